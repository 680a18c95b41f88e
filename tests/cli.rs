//! Pruebas del binario: validación de argumentos y códigos de salida.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_metalens"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("no se pudo ejecutar el binario")
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: metalens <directory>"));
}

#[test]
fn extra_arguments_print_usage_and_fail() {
    let output = run(&["uno", "dos"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: metalens <directory>"));
}

#[test]
fn flag_like_argument_is_treated_as_a_path() {
    for flag in ["--help", "-h", "--version", "-V"] {
        let output = run(&[flag]);

        assert_eq!(output.status.code(), Some(1), "{flag}");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            "Directory not found",
            "{flag}"
        );
    }
}

#[test]
fn missing_directory_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("no_existe");

    let output = run(&[missing.to_str().ok_or("ruta no UTF-8")?]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Directory not found");
    Ok(())
}

#[test]
fn file_argument_is_not_a_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("foto.jpg");
    fs::write(&file, b"")?;

    let output = run(&[file.to_str().ok_or("ruta no UTF-8")?]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Directory not found"));
    Ok(())
}

#[test]
fn walk_with_failing_files_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("anidado"))?;
    fs::write(dir.path().join("anidado/roto.pdf"), b"no es un pdf")?;
    fs::write(dir.path().join("notas.txt"), b"ignorado")?;

    let output = run(&[dir.path().to_str().ok_or("ruta no UTF-8")?]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("roto.pdf: Error: "));
    assert!(!stdout.contains("notas.txt"));
    Ok(())
}

#[test]
fn word_document_table_reaches_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let docx = dir.path().join("informe.docx");
    create_docx_with_author(&docx, "Alice")?;

    let output = run(&[dir.path().to_str().ok_or("ruta no UTF-8")?]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("informe.docx: Word document metadata"));
    assert!(stdout.contains("Property"));
    assert!(stdout.contains("Author"));
    assert!(stdout.contains("Alice"));
    Ok(())
}

fn create_docx_with_author(path: &Path, author: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = ZipWriter::new(File::create(path)?);
    let options = SimpleFileOptions::default();

    writer.start_file("[Content_Types].xml", options)?;
    writer.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#,
    )?;

    writer.start_file("docProps/core.xml", options)?;
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
                   xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:creator>{author}</dc:creator>
</cp:coreProperties>"#
    )?;

    writer.finish()?;
    Ok(())
}
