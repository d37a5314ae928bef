//! End-to-end export properties: one line sequence, three faithful
//! renderings.

mod common;

use common::{TestResult, docx_document_xml, extract_text_from_pdf, sample_record};
use lopdf::Document as LopdfDocument;
use rackcheck::{
    ExportFormat, LineKind, TicketRecord, build_report_lines, export_ticket, keys, render_text,
};

#[test]
fn text_export_contains_every_scenario_line() -> TestResult {
    let text = render_text(&build_report_lines(&sample_record()));
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines.contains(&"Agência: Agência Centro"));
    assert!(lines.contains(&"Cidade/UF: São Paulo/SP"));
    assert!(lines.contains(&"Endereço: Rua A, 100"));
    assert!(lines.contains(&"Verificar a quantidade de APs: 3"));

    // Rack 1 answered Sim, rack 2 answered Não; both lines must appear.
    let estado: Vec<&str> =
        lines.iter().filter(|l| l.starts_with("Rack está em bom estado: ")).copied().collect();
    assert_eq!(estado, ["Rack está em bom estado: Sim", "Rack está em bom estado: Não"]);
    Ok(())
}

#[test]
fn text_export_contains_every_nonempty_field_value() -> TestResult {
    let record = sample_record();
    let text = render_text(&build_report_lines(&record));
    for (key, value) in record.iter() {
        let shown = value.to_display();
        assert!(!shown.is_empty(), "fixture field {key} should be non-empty");
        assert!(text.contains(&shown), "missing value of {key}: {shown}");
    }
    Ok(())
}

#[test]
fn record_without_num_racks_gets_one_rack_block() {
    let record = TicketRecord::new().with(keys::AGENCIA, "Agência Centro");
    let lines = build_report_lines(&record);
    assert_eq!(lines.len(), 24);
    let rack_subtitles =
        lines.iter().filter(|l| l.kind() == LineKind::Subtitle && l.text().starts_with("Rack"));
    assert_eq!(rack_subtitles.count(), 1);
}

#[test]
fn nonpositive_num_racks_clamps_to_one_rack_block() {
    for bad in [0i64, -4] {
        let record = TicketRecord::new().with(keys::NUM_RACKS, bad);
        let lines = build_report_lines(&record);
        assert_eq!(lines.len(), 24, "num_racks = {bad}");
        assert!(lines.iter().any(|l| l.text() == "Quantidade de Rack na agência: 1"));
    }
}

#[test]
fn every_format_is_idempotent_on_the_same_snapshot() -> TestResult {
    let record = sample_record();
    for format in ExportFormat::ALL {
        let first = export_ticket(&record, format)?;
        let second = export_ticket(&record, format)?;
        assert_eq!(first, second, "{format} export is not reproducible");
    }
    Ok(())
}

#[test]
fn pdf_export_is_us_letter_and_carries_the_field_values() -> TestResult {
    let bytes = export_ticket(&sample_record(), ExportFormat::Pdf)?;
    let doc = LopdfDocument::load_mem(&bytes)?;
    assert!(!doc.get_pages().is_empty());

    let first_page = *doc.get_pages().get(&1).unwrap();
    let page_dict = doc.get_object(first_page)?.as_dict()?;
    let media_box = page_dict.get(b"MediaBox")?.as_array()?;
    assert_eq!(media_box[2].as_float()?, 612.0);
    assert_eq!(media_box[3].as_float()?, 792.0);

    let text = extract_text_from_pdf(&bytes)?;
    assert!(text.contains("Check list Caixa Econômica"));
    assert!(text.contains("Agência Centro"));
    assert!(text.contains("Sala TI"));
    assert!(text.contains("Depósito"));
    Ok(())
}

#[test]
fn docx_export_styles_the_title_and_carries_the_field_values() -> TestResult {
    let bytes = export_ticket(&sample_record(), ExportFormat::Docx)?;
    let xml = docx_document_xml(&bytes)?;

    assert!(xml.contains("Check list Caixa Econômica"));
    assert!(xml.contains("Agência: Agência Centro"));
    assert!(xml.contains("Local instalado: Sala TI"));

    // The title paragraph is centered and bold.
    let title_paragraph = xml
        .split("<w:p>")
        .find(|p| p.contains("Check list Caixa Econômica"))
        .expect("title paragraph");
    assert!(title_paragraph.contains(r#"<w:jc w:val="center"/>"#));
    assert!(title_paragraph.contains("<w:b/>"));
    Ok(())
}

#[test]
fn all_defaults_record_exports_everywhere_without_failing() -> TestResult {
    let record = TicketRecord::new();
    let text = render_text(&build_report_lines(&record));
    assert!(text.contains("Rack está em bom estado: Não"));
    assert!(text.contains("Agência: \n"));

    for format in ExportFormat::ALL {
        export_ticket(&record, format)?;
    }
    Ok(())
}

#[test]
fn multi_rack_report_flows_onto_additional_pdf_pages() -> TestResult {
    let record = TicketRecord::new().with(keys::NUM_RACKS, 12i64);
    let bytes = export_ticket(&record, ExportFormat::Pdf)?;
    let doc = LopdfDocument::load_mem(&bytes)?;
    assert!(doc.get_pages().len() > 1);
    Ok(())
}
