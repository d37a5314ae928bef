//! Assembles content streams into the final PDF document.

use crate::styles::{Font, PageGeometry};
use lopdf::content::Content;
use lopdf::{Document, Object, Stream, dictionary};
use rackcheck_render_core::RenderError;
use std::io::Cursor;

/// Writes one page object per content stream and serializes the document.
///
/// Object IDs are allocated sequentially and nothing time-dependent is
/// written, so the same pages always serialize to the same bytes.
pub(crate) fn write_document(
    pages: Vec<Content>,
    geom: &PageGeometry,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut font_dict = lopdf::Dictionary::new();
    for font in [Font::Helvetica, Font::HelveticaBold] {
        font_dict.set(
            font.resource_name().as_bytes(),
            Object::Dictionary(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            }),
        );
    }
    let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for content in pages {
        let encoded = content.encode().map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), geom.width.into(), geom.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Cursor::new(Vec::new());
    doc.save_to(&mut buffer).map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bytes = buffer.into_inner();
    log::debug!("serialized PDF, {} bytes", bytes.len());
    Ok(bytes)
}
