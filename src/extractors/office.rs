//! Lectura de las propiedades principales de documentos Word (`.docx`).

use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use xmltree::{Element, XMLNode};
use zip::ZipArchive;

use crate::error::{ExtractError, Result};
use crate::metadata::MetadataRecord;

const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
const CP_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const DCTERMS_NS: &str = "http://purl.org/dc/terms/";

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const PACKAGE_RELS_PART: &str = "_rels/.rels";
const DEFAULT_CORE_PART: &str = "docProps/core.xml";
const CORE_RELATIONSHIP_SUFFIX: &str = "/metadata/core-properties";

const WORD_MAIN_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

struct CoreField {
    name: &'static str,
    local_name: &'static str,
    namespace: &'static str,
    timestamp: bool,
}

const CORE_FIELDS: [CoreField; 15] = [
    CoreField {
        name: "Author",
        local_name: "creator",
        namespace: DC_NS,
        timestamp: false,
    },
    CoreField {
        name: "Category",
        local_name: "category",
        namespace: CP_NS,
        timestamp: false,
    },
    CoreField {
        name: "Comments",
        local_name: "description",
        namespace: DC_NS,
        timestamp: false,
    },
    CoreField {
        name: "ContentStatus",
        local_name: "contentStatus",
        namespace: CP_NS,
        timestamp: false,
    },
    CoreField {
        name: "Created",
        local_name: "created",
        namespace: DCTERMS_NS,
        timestamp: true,
    },
    CoreField {
        name: "Identifier",
        local_name: "identifier",
        namespace: DC_NS,
        timestamp: false,
    },
    CoreField {
        name: "Keywords",
        local_name: "keywords",
        namespace: CP_NS,
        timestamp: false,
    },
    CoreField {
        name: "Language",
        local_name: "language",
        namespace: DC_NS,
        timestamp: false,
    },
    CoreField {
        name: "LastModifiedBy",
        local_name: "lastModifiedBy",
        namespace: CP_NS,
        timestamp: false,
    },
    CoreField {
        name: "LastPrinted",
        local_name: "lastPrinted",
        namespace: CP_NS,
        timestamp: true,
    },
    CoreField {
        name: "Modified",
        local_name: "modified",
        namespace: DCTERMS_NS,
        timestamp: true,
    },
    CoreField {
        name: "Revision",
        local_name: "revision",
        namespace: CP_NS,
        timestamp: false,
    },
    CoreField {
        name: "Subject",
        local_name: "subject",
        namespace: DC_NS,
        timestamp: false,
    },
    CoreField {
        name: "Title",
        local_name: "title",
        namespace: DC_NS,
        timestamp: false,
    },
    CoreField {
        name: "Version",
        local_name: "version",
        namespace: CP_NS,
        timestamp: false,
    },
];

/// Abre el paquete, comprueba que sea un documento Word y devuelve sus
/// propiedades principales presentes.
pub fn read_docx_metadata(path: &Path) -> Result<MetadataRecord> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    ensure_word_package(&mut archive, path)?;

    let core_part = core_part_name(&mut archive)?;
    let contents = match read_part(&mut archive, &core_part) {
        Ok(contents) => contents,
        Err(ExtractError::Zip(zip::result::ZipError::FileNotFound)) => {
            tracing::debug!(
                path = %path.display(),
                part = %core_part,
                "sin propiedades principales"
            );
            return Ok(MetadataRecord::new());
        }
        Err(error) => return Err(error),
    };

    let root = Element::parse(contents.as_bytes())?;
    Ok(extract_core_properties(&root))
}

fn read_part(archive: &mut ZipArchive<File>, name: &str) -> Result<String> {
    let mut part = archive.by_name(name)?;
    let mut contents = String::new();
    part.read_to_string(&mut contents)?;
    Ok(contents)
}

fn ensure_word_package(archive: &mut ZipArchive<File>, path: &Path) -> Result<()> {
    let not_word = |content_type: &str| ExtractError::NotWordDocument {
        path: path.display().to_string(),
        content_type: content_type.to_string(),
    };

    let contents = match read_part(archive, CONTENT_TYPES_PART) {
        Ok(contents) => contents,
        Err(ExtractError::Zip(zip::result::ZipError::FileNotFound)) => {
            return Err(not_word(""));
        }
        Err(error) => return Err(error),
    };
    let root = Element::parse(contents.as_bytes())?;

    let overrides: Vec<&str> = child_elements(&root, "Override")
        .filter_map(|element| element.attributes.get("ContentType").map(String::as_str))
        .collect();

    if overrides.contains(&WORD_MAIN_CONTENT_TYPE) {
        return Ok(());
    }

    let main_type = overrides
        .iter()
        .find(|content_type| content_type.ends_with(".main+xml"))
        .copied()
        .unwrap_or_default();
    Err(not_word(main_type))
}

/// Ubicación de la parte de propiedades según las relaciones del paquete.
fn core_part_name(archive: &mut ZipArchive<File>) -> Result<String> {
    let contents = match read_part(archive, PACKAGE_RELS_PART) {
        Ok(contents) => contents,
        Err(ExtractError::Zip(zip::result::ZipError::FileNotFound)) => {
            return Ok(DEFAULT_CORE_PART.to_string());
        }
        Err(error) => return Err(error),
    };
    let root = Element::parse(contents.as_bytes())?;

    let target = child_elements(&root, "Relationship")
        .filter(|element| {
            element
                .attributes
                .get("Type")
                .is_some_and(|kind| kind.ends_with(CORE_RELATIONSHIP_SUFFIX))
        })
        .find_map(|element| element.attributes.get("Target"))
        .map(|target| target.trim_start_matches('/').to_string());

    Ok(target.unwrap_or_else(|| DEFAULT_CORE_PART.to_string()))
}

fn extract_core_properties(root: &Element) -> MetadataRecord {
    let mut metadata = MetadataRecord::new();
    for field in &CORE_FIELDS {
        if let Some(text) = find_child_text(root, field.local_name, field.namespace) {
            let value = if field.timestamp {
                normalize_timestamp(&text)
            } else {
                text
            };
            metadata.insert(field.name.to_string(), value);
        }
    }
    metadata
}

fn child_elements<'a>(root: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    root.children.iter().filter_map(move |node| match node {
        XMLNode::Element(child) if child.name == name => Some(child),
        _ => None,
    })
}

fn find_child_text(root: &Element, local_name: &str, namespace: &str) -> Option<String> {
    child_elements(root, local_name)
        .find(|child| child.namespace.as_deref() == Some(namespace))
        .map(element_text_content)
}

fn element_text_content(element: &Element) -> String {
    let mut content = String::new();
    for node in &element.children {
        if let XMLNode::Text(text) = node {
            content.push_str(text);
        }
    }
    content.trim().to_string()
}

/// Fechas W3CDTF a `AAAA-MM-DD HH:MM:SS` en UTC; el resto se deja tal cual.
fn normalize_timestamp(text: &str) -> String {
    match DateTime::parse_from_rfc3339(text) {
        Ok(datetime) => datetime
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => text.to_string(),
    }
}
