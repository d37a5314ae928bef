//! OPC packaging: zips the document parts into the final `.docx` bytes.

use crate::document::build_document_xml;
use rackcheck_render_core::{ExportFormat, RenderError, ReportRenderer};
use rackcheck_report::ReportLine;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>
"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>
"#;

#[derive(Debug, Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for DocxRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, lines: &[ReportLine]) -> Result<Vec<u8>, RenderError> {
        let document_xml = build_document_xml(lines)?;

        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamp keeps repeated exports byte-identical.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (name, bytes) in [
            ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS.as_bytes()),
            ("word/document.xml", document_xml.as_slice()),
        ] {
            archive
                .start_file(name, options)
                .map_err(|e| RenderError::Document(e.to_string()))?;
            archive.write_all(bytes)?;
        }

        let cursor = archive.finish().map_err(|e| RenderError::Document(e.to_string()))?;
        let bytes = cursor.into_inner();
        log::debug!("packaged DOCX, {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn part_names(bytes: &[u8]) -> Vec<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        (0..archive.len()).map(|i| archive.by_index(i).unwrap().name().to_string()).collect()
    }

    #[test]
    fn package_contains_the_three_parts() {
        let renderer = DocxRenderer::new();
        let bytes = renderer.render(&[ReportLine::body("Agência: Centro")]).unwrap();
        let names = part_names(&bytes);
        assert_eq!(names, ["[Content_Types].xml", "_rels/.rels", "word/document.xml"]);
    }

    #[test]
    fn document_part_carries_the_line_text() {
        let renderer = DocxRenderer::new();
        let bytes = renderer.render(&[ReportLine::body("Rack está organizado: Sim")]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive.by_name("word/document.xml").unwrap().read_to_string(&mut xml).unwrap();
        assert!(xml.contains("Rack está organizado: Sim"));
    }

    #[test]
    fn repeated_renders_are_byte_identical() {
        let renderer = DocxRenderer::new();
        let lines = [ReportLine::title("Check list"), ReportLine::blank()];
        assert_eq!(renderer.render(&lines).unwrap(), renderer.render(&lines).unwrap());
    }
}
