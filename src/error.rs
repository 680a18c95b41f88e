//! Errores que puede producir la lectura de metadata de un archivo.

use thiserror::Error;

/// Alias de resultado para las operaciones de extracción.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Fallos de extracción de un único archivo. Nunca detienen el recorrido.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("cannot identify image file '{0}'")]
    UnsupportedImage(String),

    #[error("{0}")]
    Exif(#[from] exif::Error),

    /// La imagen es válida pero no contiene un bloque EXIF.
    #[error("No Exif metadata found")]
    NoExif,

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("file '{path}' is not a Word file, content type is '{content_type}'")]
    NotWordDocument { path: String, content_type: String },

    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Text extraction is not allowed")]
    ExtractionNotAllowed,

    #[error("No /Outlines object")]
    NoOutlines,
}
