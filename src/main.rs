use clap::Parser;
use std::path::PathBuf;
use std::process;

use metalens::process_directory;

const USAGE: &str = "Usage: metalens <directory>";

/// Muestra la metadata de imágenes, documentos Word y PDFs de un directorio,
/// resaltando las propiedades sensibles.
#[derive(Parser)]
#[command(name = "metalens", about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Directorio a recorrer de forma recursiva
    #[arg(allow_hyphen_values = true)]
    directory: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            tracing::debug!(%error, "argumentos inválidos");
            println!("{USAGE}");
            process::exit(1);
        }
    };

    if !cli.directory.is_dir() {
        println!("Directory not found");
        process::exit(1);
    }

    process_directory(&cli.directory);
}
