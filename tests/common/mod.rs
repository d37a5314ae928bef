//! Shared fixtures and artifact-inspection helpers.

use lopdf::Document as LopdfDocument;
use rackcheck::{TicketRecord, keys, rack_key};
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The two-rack survey used throughout the scenario tests.
pub fn sample_record() -> TicketRecord {
    TicketRecord::new()
        .with(keys::AGENCIA, "Agência Centro")
        .with(keys::CIDADE_UF, "São Paulo/SP")
        .with(keys::ENDERECO, "Rua A, 100")
        .with(keys::NUM_RACKS, 2i64)
        .with(rack_key(keys::RACK_LOCAL, 1), "Sala TI")
        .with(rack_key(keys::RACK_ESTADO, 1), "Sim")
        .with(rack_key(keys::RACK_LOCAL, 2), "Depósito")
        .with(rack_key(keys::RACK_ESTADO, 2), "Não")
        .with(keys::AP_QUANTIDADE, "3")
}

/// Extracts the text content of every page of a generated PDF.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load_mem(pdf_bytes)?;
    let mut text = String::new();
    for page_num in 1..=doc.get_pages().len() {
        text.push_str(&doc.extract_text(&[page_num as u32])?);
        text.push('\n');
    }
    Ok(text)
}

/// Reads `word/document.xml` out of a generated DOCX package.
pub fn docx_document_xml(docx_bytes: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let mut archive = ZipArchive::new(Cursor::new(docx_bytes.to_vec()))?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;
    Ok(xml)
}
