//! Turns a ticket record into the ordered line sequence.

use crate::line::ReportLine;
use rackcheck_ticket::{TicketRecord, keys, rack_key};

/// The fixed document heading.
pub const REPORT_TITLE: &str = "Check list Caixa Econômica";

/// Builds the full report line sequence for one ticket.
///
/// Pure and infallible: absent fields render as empty strings, absent
/// Sim/Não answers as "Não", and a missing or invalid rack count as a
/// single rack. For `n` racks the sequence is exactly `13 + 11n` lines:
/// the agency block, one block per rack in ascending index order, then the
/// access-point block.
pub fn build_report_lines(record: &TicketRecord) -> Vec<ReportLine> {
    let num_racks = record.num_racks();
    let mut lines = Vec::with_capacity(13 + 11 * num_racks as usize);

    lines.push(ReportLine::title(REPORT_TITLE));
    lines.push(ReportLine::blank());
    lines.push(ReportLine::body(format!("Agência: {}", record.text(keys::AGENCIA))));
    lines.push(ReportLine::body(format!("Cidade/UF: {}", record.text(keys::CIDADE_UF))));
    lines.push(ReportLine::body(format!("Endereço: {}", record.text(keys::ENDERECO))));
    lines.push(ReportLine::body(format!("Quantidade de Rack na agência: {num_racks}")));
    lines.push(ReportLine::blank());

    for i in 1..=num_racks {
        lines.push(ReportLine::subtitle(format!("Rack {i}:")));
        lines.push(ReportLine::body(format!(
            "Local instalado: {}",
            record.text(&rack_key(keys::RACK_LOCAL, i))
        )));
        lines.push(ReportLine::body(format!(
            "Tamanho do Rack {i} – Número de Us: {}",
            record.text(&rack_key(keys::RACK_TAMANHO, i))
        )));
        lines.push(ReportLine::body(format!(
            "Quantidade de Us disponíveis: {}",
            record.text(&rack_key(keys::RACK_US_DISPONIVEIS, i))
        )));
        lines.push(ReportLine::body(format!(
            "Quantidade de réguas de energia: {}",
            record.text(&rack_key(keys::RACK_REGUAS, i))
        )));
        lines.push(ReportLine::body(format!(
            "Quantidade de tomadas disponíveis: {}",
            record.text(&rack_key(keys::RACK_TOMADAS_DISPONIVEIS, i))
        )));
        lines.push(ReportLine::body(format!(
            "Disponibilidade para ampliação de réguas de energia: {}",
            record.yes_no(&rack_key(keys::RACK_AMPLIACAO_REGUAS, i))
        )));
        lines.push(ReportLine::body(format!(
            "Rack está em bom estado: {}",
            record.yes_no(&rack_key(keys::RACK_ESTADO, i))
        )));
        lines.push(ReportLine::body(format!(
            "Rack está organizado: {}",
            record.yes_no(&rack_key(keys::RACK_ORGANIZADO, i))
        )));
        lines.push(ReportLine::body(format!(
            "Equipamentos e cabeamentos identificados: {}",
            record.yes_no(&rack_key(keys::RACK_IDENTIFICADO, i))
        )));
        lines.push(ReportLine::blank());
    }

    lines.push(ReportLine::subtitle("Access Point (AP)"));
    lines.push(ReportLine::blank());
    lines.push(ReportLine::body(format!(
        "Verificar a quantidade de APs: {}",
        record.text(keys::AP_QUANTIDADE)
    )));
    lines.push(ReportLine::body(format!(
        "Identificar o setor onde será instalado*: {}",
        record.text(keys::AP_SETOR)
    )));
    lines.push(ReportLine::body(format!(
        "Verificar as condições da Instalação (se possui infra ou não): {}",
        record.text(keys::AP_CONDICOES)
    )));
    lines.push(ReportLine::body(format!(
        "** Altura que será instalado / distância do rack até o ponto de instalação: {}",
        record.text(keys::AP_DISTANCIA)
    )));

    lines
}
