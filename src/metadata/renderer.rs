//! Tabla de propiedades por archivo con las entradas sensibles resaltadas.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Row, Table};
use console::style;
use std::io::{self, Write};
use std::path::Path;

use super::record::MetadataRecord;
use super::sensitive::is_sensitive;

/// Longitud máxima, en caracteres, de un valor antes de recortarlo.
pub const MAX_VALUE_LENGTH: usize = 250;

const ELLIPSIS: &str = "...";

/// Fila lista para imprimir: valor ya recortado y marca de sensibilidad.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormattedRow {
    pub key: String,
    pub value: String,
    pub sensitive: bool,
}

pub fn truncate_value(value: &str) -> String {
    match value.char_indices().nth(MAX_VALUE_LENGTH) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &value[..cut]),
        None => value.to_string(),
    }
}

pub fn format_rows(metadata: &MetadataRecord) -> Vec<FormattedRow> {
    metadata
        .iter()
        .map(|(key, value)| FormattedRow {
            key: key.clone(),
            value: truncate_value(value),
            sensitive: is_sensitive(key),
        })
        .collect()
}

/// Escribe la cabecera `<ruta>: <tipo>` seguida de la tabla de propiedades.
pub fn write_report<W: Write>(
    out: &mut W,
    path: &Path,
    type_label: &str,
    metadata: &MetadataRecord,
) -> io::Result<()> {
    let rows = format_rows(metadata);
    writeln!(out)?;
    writeln!(
        out,
        "{}: {}",
        style(path.display().to_string()).green(),
        type_label
    )?;
    writeln!(out, "{}", build_table(&rows))?;
    Ok(())
}

/// Imprime el reporte en la salida estándar. Un fallo de escritura se
/// registra y no se propaga.
pub fn render_metadata(path: &Path, type_label: &str, metadata: &MetadataRecord) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(error) = write_report(&mut handle, path, type_label, metadata) {
        tracing::warn!(path = %path.display(), %error, "no se pudo imprimir la metadata");
    }
}

fn build_table(rows: &[FormattedRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![header_cell("Property"), header_cell("Value")]);

    for row in rows {
        table.add_row(build_row(row));
    }

    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn build_row(row: &FormattedRow) -> Row {
    if row.sensitive {
        Row::from(vec![
            Cell::new(&row.key).fg(Color::Red),
            Cell::new(&row.value).fg(Color::Red),
        ])
    } else {
        Row::from(vec![Cell::new(&row.key), Cell::new(&row.value)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, &str)]) -> MetadataRecord {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn sensitive_keys_are_marked_and_others_are_not() {
        let metadata = record(&[
            ("Author", "Alice"),
            ("Title", "Informe"),
            ("GPSLatitude", "40"),
        ]);

        let rows = format_rows(&metadata);

        let marked: Vec<_> = rows
            .iter()
            .filter(|row| row.sensitive)
            .map(|row| row.key.as_str())
            .collect();
        assert_eq!(marked, vec!["Author", "GPSLatitude"]);
        assert!(rows.iter().any(|row| row.key == "Title" && !row.sensitive));
    }

    #[test]
    fn long_values_are_cut_to_limit_plus_ellipsis() {
        let long = "x".repeat(MAX_VALUE_LENGTH + 40);

        let truncated = truncate_value(&long);

        assert_eq!(truncated.len(), MAX_VALUE_LENGTH + ELLIPSIS.len());
        assert!(truncated.starts_with(&"x".repeat(MAX_VALUE_LENGTH)));
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn values_at_the_limit_are_kept_intact() {
        let exact = "y".repeat(MAX_VALUE_LENGTH);
        assert_eq!(truncate_value(&exact), exact);
        assert_eq!(truncate_value(""), "");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "ñ".repeat(MAX_VALUE_LENGTH + 1);

        let truncated = truncate_value(&long);

        assert_eq!(truncated.chars().count(), MAX_VALUE_LENGTH + ELLIPSIS.len());
        assert!(truncated.starts_with(&"ñ".repeat(MAX_VALUE_LENGTH)));
    }

    #[test]
    fn report_lists_header_and_every_entry() -> Result<(), Box<dyn std::error::Error>> {
        let metadata = record(&[("Author", "Alice"), ("Revision", "3")]);
        let mut out = Vec::new();

        write_report(
            &mut out,
            Path::new("docs/a.docx"),
            "Word document metadata",
            &metadata,
        )?;

        let text = String::from_utf8(out)?;
        assert!(text.starts_with('\n'));
        assert!(text.contains("docs/a.docx"));
        assert!(text.contains(": Word document metadata"));
        for expected in ["Property", "Value", "Author", "Alice", "Revision", "3"] {
            assert!(text.contains(expected), "falta `{expected}` en:\n{text}");
        }
        Ok(())
    }

    fn red_sequence() -> String {
        let mut reference = Table::new();
        reference.add_row(vec![Cell::new("X").fg(Color::Red)]);
        reference.enforce_styling();
        let rendered = reference.to_string();
        let start = rendered.find('\u{1b}').unwrap_or(0);
        let end = rendered[start..].find('m').map_or(start, |end| start + end + 1);
        rendered[start..end].to_string()
    }

    fn line_containing<'a>(rendered: &'a str, needle: &str) -> &'a str {
        rendered
            .lines()
            .find(|line| line.contains(needle))
            .unwrap_or_default()
    }

    #[test]
    fn sensitive_rows_color_both_cells_red() {
        let red = red_sequence();
        assert!(red.starts_with('\u{1b}'), "no se obtuvo la secuencia roja");

        let metadata = record(&[("Author", "Alice"), ("Title", "Informe")]);
        let mut table = build_table(&format_rows(&metadata));
        table.enforce_styling();
        let rendered = table.to_string();

        let author_line = line_containing(&rendered, "Author");
        let cells: Vec<&str> = author_line.split('│').collect();
        assert_eq!(cells.len(), 4, "fila inesperada: {author_line:?}");
        assert!(cells[1].contains(&red) && cells[1].contains("Author"));
        assert!(cells[2].contains(&red) && cells[2].contains("Alice"));

        let title_line = line_containing(&rendered, "Title");
        assert!(title_line.contains("Informe"));
        assert!(!title_line.contains(&red));
    }

    #[test]
    fn empty_record_still_prints_header_and_table() -> Result<(), Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        let empty = MetadataRecord::new();
        write_report(&mut out, Path::new("vacio.pdf"), "PDF metadata", &empty)?;

        let text = String::from_utf8(out)?;
        assert!(text.contains(": PDF metadata"));
        assert!(text.contains("Property"));
        assert!(text.contains("Value"));
        Ok(())
    }
}
