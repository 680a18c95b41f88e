//! Recorrido recursivo de directorios y despacho de cada archivo a su lector.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::extractors::{MetadataSource, extract_docx, extract_image, extract_pdf};

/// Archivos bajo `root` con un lector asociado, en el orden del recorrido.
/// Los archivos con extensiones desconocidas se omiten sin aviso.
pub fn walk_targets(root: &Path) -> impl Iterator<Item = (PathBuf, MetadataSource)> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "entrada omitida durante el recorrido");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let source = MetadataSource::from_path(entry.path())?;
            Some((entry.into_path(), source))
        })
}

pub fn collect_targets(root: &Path) -> Vec<(PathBuf, MetadataSource)> {
    walk_targets(root).collect()
}

/// Procesa cada archivo compatible escribiendo su reporte en `out`. Un
/// archivo que falla nunca detiene el recorrido.
pub fn process_directory_to<W: Write>(root: &Path, out: &mut W) -> io::Result<()> {
    for (path, source) in walk_targets(root) {
        tracing::debug!(path = %path.display(), ?source, "procesando archivo");
        source.report(&path, out)?;
    }
    Ok(())
}

/// Recorre `root` e imprime la metadata de cada archivo compatible.
pub fn process_directory(root: &Path) {
    for (path, source) in walk_targets(root) {
        tracing::debug!(path = %path.display(), ?source, "procesando archivo");
        match source {
            MetadataSource::Image => extract_image(&path),
            MetadataSource::WordDocument => extract_docx(&path),
            MetadataSource::Pdf => extract_pdf(&path),
        }
    }
}
