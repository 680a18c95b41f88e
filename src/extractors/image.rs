//! Extracción de etiquetas EXIF de imágenes JPEG y PNG.

use exif::{Exif, Field, In, Tag, Value};
use image::ImageReader;
use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::metadata::MetadataRecord;

/// Devuelve las etiquetas EXIF de la imagen principal, incluidas las del
/// bloque GPS. Las miniaturas se ignoran.
pub fn read_image_metadata(path: &Path) -> Result<MetadataRecord> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);

    let format = ImageReader::new(&mut bufreader)
        .with_guessed_format()?
        .format();
    if format.is_none() {
        return Err(ExtractError::UnsupportedImage(path.display().to_string()));
    }
    bufreader.rewind()?;

    let exif = match exif::Reader::new().read_from_container(&mut bufreader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Err(ExtractError::NoExif),
        Err(error) => return Err(error.into()),
    };

    let metadata = exif
        .fields()
        .filter(|field| field.ifd_num == In::PRIMARY)
        .map(|field| (tag_name(field.tag), field_value(field, &exif)))
        .collect();

    Ok(metadata)
}

/// Nombre canónico de la etiqueta, o su número si el diccionario EXIF no la
/// conoce.
pub fn tag_name(tag: Tag) -> String {
    match tag.description() {
        Some(_) => tag.to_string(),
        None => tag.number().to_string(),
    }
}

fn field_value(field: &Field, exif: &Exif) -> String {
    match &field.value {
        Value::Ascii(parts) => parts
            .iter()
            .map(|part| String::from_utf8_lossy(part).trim_end_matches('\0').to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().with_unit(exif).to_string(),
    }
}
