//! Extracción del diccionario Info de documentos PDF.

use lopdf::{Dictionary, Document, Object};
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::metadata::MetadataRecord;

/// Bit 5 de `/P`: permiso para copiar o extraer contenido.
const EXTRACT_PERMISSION_BIT: i64 = 1 << 4;

/// Carga el documento, respeta la bandera de "no extraer" y devuelve el
/// diccionario Info como registro plano.
pub fn read_pdf_metadata(path: &Path) -> Result<MetadataRecord> {
    let doc = Document::load(path)?;

    check_extractable(&doc)?;
    check_outlines(&doc)?;

    let Some(info) = info_dictionary(&doc) else {
        tracing::debug!(path = %path.display(), "PDF sin diccionario Info");
        return Ok(MetadataRecord::new());
    };

    Ok(info
        .iter()
        .map(|(key, value)| {
            (
                String::from_utf8_lossy(key).into_owned(),
                object_to_string(&doc, value),
            )
        })
        .collect())
}

/// Falla con [`ExtractError::ExtractionNotAllowed`] si el manejador de
/// seguridad del documento no permite extraer contenido.
pub fn check_extractable(doc: &Document) -> Result<()> {
    match permission_flags(doc) {
        Some(flags) if flags & EXTRACT_PERMISSION_BIT == 0 => {
            Err(ExtractError::ExtractionNotAllowed)
        }
        _ => Ok(()),
    }
}

/// Permisos `/P` del diccionario de cifrado. Si el lector ya descifró el
/// documento y quitó `/Encrypt` del trailer, se busca el diccionario del
/// manejador estándar entre los objetos.
fn permission_flags(doc: &Document) -> Option<i64> {
    let from_trailer = doc
        .trailer
        .get(b"Encrypt")
        .ok()
        .and_then(|encrypt| deref_dictionary(doc, encrypt));

    let encrypt = from_trailer.or_else(|| {
        doc.objects.values().find_map(|object| match object {
            Object::Dictionary(dict) if is_standard_security_handler(dict) => Some(dict),
            _ => None,
        })
    })?;

    encrypt.get(b"P").ok()?.as_i64().ok()
}

fn is_standard_security_handler(dict: &Dictionary) -> bool {
    let is_standard = matches!(dict.get(b"Filter"), Ok(Object::Name(name)) if name == b"Standard");
    is_standard && dict.has(b"P") && dict.has(b"O") && dict.has(b"U")
}

/// Un `/Outlines` presente en el catálogo que no resuelve a un diccionario
/// se reporta como error.
fn check_outlines(doc: &Document) -> Result<()> {
    let Some(catalog) = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|root| deref_dictionary(doc, root))
    else {
        return Ok(());
    };

    match catalog.get(b"Outlines") {
        Ok(outlines) if deref_dictionary(doc, outlines).is_none() => Err(ExtractError::NoOutlines),
        _ => Ok(()),
    }
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    deref_dictionary(doc, info)
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn object_to_string(doc: &Document, obj: &Object) -> String {
    match obj {
        Object::String(bytes, _) => decode_text_string(bytes),
        Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
        Object::Integer(value) => value.to_string(),
        Object::Real(value) => value.to_string(),
        Object::Boolean(value) => value.to_string(),
        Object::Null => "null".to_string(),
        Object::Array(items) => {
            let parts: Vec<String> = items.iter().map(|item| object_to_string(doc, item)).collect();
            format!("[{}]", parts.join(", "))
        }
        Object::Reference(reference) => match doc.get_object(*reference) {
            Ok(inner) if !matches!(inner, Object::Reference(_)) => object_to_string(doc, inner),
            _ => format!("{} {} R", reference.0, reference.1),
        },
        Object::Dictionary(_) => "<dictionary>".to_string(),
        Object::Stream(_) => "<stream>".to_string(),
    }
}

/// Cadenas de texto PDF: UTF-16BE con BOM o un byte por carácter.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    bytes.iter().map(|&byte| char::from(byte)).collect()
}
