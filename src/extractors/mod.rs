//! Lectores de metadata por formato y despacho según la extensión.

mod image;
mod office;
mod pdf;


use std::io::{self, Write};
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::metadata::{MetadataRecord, render_metadata, write_report};

pub use self::image::{read_image_metadata, tag_name};
pub use self::office::read_docx_metadata;
pub use self::pdf::{check_extractable, read_pdf_metadata};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const WORD_EXTENSIONS: &[&str] = &["docx"];
const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// Origen de metadata seleccionado por la extensión del archivo.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MetadataSource {
    Image,
    WordDocument,
    Pdf,
}

impl MetadataSource {
    /// Extensión en minúsculas → lector. `None` para cualquier otro archivo.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Image)
        } else if WORD_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::WordDocument)
        } else if PDF_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image metadata",
            Self::WordDocument => "Word document metadata",
            Self::Pdf => "PDF metadata",
        }
    }

    pub fn read(self, path: &Path) -> Result<MetadataRecord> {
        match self {
            Self::Image => read_image_metadata(path),
            Self::WordDocument => read_docx_metadata(path),
            Self::Pdf => read_pdf_metadata(path),
        }
    }

    /// Lee el archivo y escribe su tabla, o la línea de error correspondiente.
    /// Los errores de extracción se quedan aquí; solo se propaga un fallo al
    /// escribir en `out`.
    pub fn report<W: Write>(self, path: &Path, out: &mut W) -> io::Result<()> {
        match self.read(path) {
            Ok(metadata) => write_report(out, path, self.label(), &metadata),
            Err(error) => self.write_failure(path, &error, out),
        }
    }

    fn write_failure<W: Write>(
        self,
        path: &Path,
        error: &ExtractError,
        out: &mut W,
    ) -> io::Result<()> {
        if let ExtractError::NoExif = error {
            return writeln!(out, "\n{}: {error}", path.display());
        }

        tracing::debug!(
            path = %path.display(),
            source = ?self,
            %error,
            "extracción fallida"
        );
        writeln!(out, "{}: Error: {error}", path.display())
    }
}

/// Imprime la metadata de una imagen en la salida estándar.
pub fn extract_image(path: &Path) {
    extract_to_stdout(MetadataSource::Image, path);
}

/// Imprime la metadata de un documento Word en la salida estándar.
pub fn extract_docx(path: &Path) {
    extract_to_stdout(MetadataSource::WordDocument, path);
}

/// Imprime la metadata de un PDF en la salida estándar.
pub fn extract_pdf(path: &Path) {
    extract_to_stdout(MetadataSource::Pdf, path);
}

fn extract_to_stdout(source: MetadataSource, path: &Path) {
    let error = match source.read(path) {
        Ok(metadata) => return render_metadata(path, source.label(), &metadata),
        Err(error) => error,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(io_error) = source.write_failure(path, &error, &mut handle) {
        tracing::warn!(path = %path.display(), %io_error, "no se pudo escribir el reporte");
    }
}
