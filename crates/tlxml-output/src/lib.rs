//! XML output for tlxml documents.
//!
//! Documents are first lowered into a generic [`XmlElement`] tree, which a
//! single serializer renders for both testcase and requirement imports:
//!
//! - **Tree**: [`XmlElement`] with attributes and either text or children
//! - **Lowering**: [`ToXmlTree`] for every document type
//! - **Rendering**: [`render_document`] with the standard XML declaration
//! - **Files**: [`output_file_name`] and [`write_output`]

mod common;
mod error;
mod lower;
mod render;
mod sink;
mod tree;

pub use common::{INDENT_WIDTH, XML_ENCODING, XML_VERSION};
pub use error::{OutputError, Result};
pub use lower::ToXmlTree;
pub use render::{render_document, render_tree};
pub use sink::{output_file_name, write_output};
pub use tree::{XmlContent, XmlElement};
