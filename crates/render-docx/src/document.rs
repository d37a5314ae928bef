//! Builds `word/document.xml` from the line sequence.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rackcheck_render_core::RenderError;
use rackcheck_report::{LineKind, ReportLine};
use std::io::Cursor;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// US Letter with one-inch margins, in twentieths of a point.
const PAGE_WIDTH: &str = "12240";
const PAGE_HEIGHT: &str = "15840";
const PAGE_MARGIN: &str = "1440";

/// Serializes the WordprocessingML main part.
///
/// Title lines become centered bold paragraphs, subtitles bold paragraphs,
/// body lines plain paragraphs, and blanks empty paragraphs so section
/// separation stays visible in the rendered document.
pub(crate) fn build_document_xml(lines: &[ReportLine]) -> Result<Vec<u8>, RenderError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut document = BytesStart::new("w:document");
    document.push_attribute(("xmlns:w", WORDML_NS));
    writer.write_event(Event::Start(document))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for line in lines {
        write_paragraph(&mut writer, line)?;
    }
    write_section_properties(&mut writer)?;

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;
    Ok(writer.into_inner().into_inner())
}

fn write_paragraph(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    line: &ReportLine,
) -> Result<(), RenderError> {
    if line.kind() == LineKind::Blank {
        writer.write_event(Event::Empty(BytesStart::new("w:p")))?;
        return Ok(());
    }

    let bold = matches!(line.kind(), LineKind::Title | LineKind::Subtitle);
    let centered = line.kind() == LineKind::Title;

    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    if centered {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        let mut jc = BytesStart::new("w:jc");
        jc.push_attribute(("w:val", "center"));
        writer.write_event(Event::Empty(jc))?;
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }

    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    if bold {
        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    }
    // An embedded newline is a soft break inside the run.
    for (i, segment) in line.text().split('\n').enumerate() {
        if i > 0 {
            writer.write_event(Event::Empty(BytesStart::new("w:br")))?;
        }
        let mut text = BytesStart::new("w:t");
        text.push_attribute(("xml:space", "preserve"));
        writer.write_event(Event::Start(text))?;
        writer.write_event(Event::Text(BytesText::new(segment)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_section_properties(writer: &mut Writer<Cursor<Vec<u8>>>) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

    let mut page_size = BytesStart::new("w:pgSz");
    page_size.push_attribute(("w:w", PAGE_WIDTH));
    page_size.push_attribute(("w:h", PAGE_HEIGHT));
    writer.write_event(Event::Empty(page_size))?;

    let mut margins = BytesStart::new("w:pgMar");
    for side in ["w:top", "w:right", "w:bottom", "w:left"] {
        margins.push_attribute((side, PAGE_MARGIN));
    }
    writer.write_event(Event::Empty(margins))?;

    writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
    Ok(())
}
