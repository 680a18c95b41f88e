//! Inspección de metadata embebida en imágenes, documentos Word y PDFs.
//!
//! Cada archivo compatible encontrado bajo un directorio se lee con el
//! extractor de su formato y se imprime como una tabla de propiedades, con
//! las propiedades sensibles resaltadas.

pub mod directory;
pub mod error;
pub mod extractors;
pub mod metadata;

pub use directory::{collect_targets, process_directory};
pub use error::{ExtractError, Result};
pub use extractors::{MetadataSource, extract_docx, extract_image, extract_pdf};
pub use metadata::{MetadataRecord, is_sensitive, render_metadata};
