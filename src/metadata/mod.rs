//! Modelo de metadata por archivo, tabla de propiedades sensibles y su
//! presentación en consola.

mod record;
mod renderer;
mod sensitive;

pub use record::MetadataRecord;
pub use renderer::{
    FormattedRow, MAX_VALUE_LENGTH, format_rows, render_metadata, truncate_value, write_report,
};
pub use sensitive::{SENSITIVE_PROPERTIES, is_sensitive};
