//! DOCX export backend.
//!
//! A `.docx` file is an OPC zip package whose main part,
//! `word/document.xml`, carries the WordprocessingML body. This backend
//! writes the minimal package: content types, package relationships, and a
//! document built paragraph-by-paragraph from the tagged line sequence.

mod document;
mod package;

pub use package::DocxRenderer;
