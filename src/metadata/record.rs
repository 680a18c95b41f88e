//! Registro plano de propiedades extraído de un archivo.

use std::collections::BTreeMap;

/// Propiedad → valor ya convertido a texto. Se crea por archivo y se
/// descarta después de imprimirlo.
pub type MetadataRecord = BTreeMap<String, String>;
