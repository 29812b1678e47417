//! ORMAP Command-Line Inspector
//!
//! Resolves the classes of a JSON mapping document and prints their metadata.

mod formatter;

use clap::{Parser, Subcommand};
use formatter::OutputFormat;
use ormap_core::{ClassMetadataFactory, FileDriver};
use std::path::{Path, PathBuf};

/// ORMAP Command-Line Inspector
#[derive(Parser, Debug)]
#[command(name = "ormap")]
#[command(version, about = "Inspect resolved class metadata")]
pub struct Args {
    /// Output format
    #[arg(long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and list every class of a mapping document
    Classes {
        /// Mapping document (JSON)
        file: PathBuf,
    },
    /// Resolve and show one class
    Show {
        /// Mapping document (JSON)
        file: PathBuf,
        /// Class name
        class: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ormap_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = formatter::create_formatter(args.format);

    match args.command {
        Command::Classes { file } => {
            let factory = open_factory(&file)?;
            let classes = factory.get_all_metadata()?;
            println!("{}", formatter.format_class_list(&classes));
        }
        Command::Show { file, class } => {
            let factory = open_factory(&file)?;
            let metadata = factory.get_metadata_for(&class)?;
            println!("{}", formatter.format_class(&metadata));
        }
    }

    Ok(())
}

/// Build a factory over the classes, hierarchy and settings of a mapping document.
fn open_factory(file: &Path) -> Result<ClassMetadataFactory<FileDriver>, ormap_core::Error> {
    let driver = FileDriver::open(file)?;
    let hierarchy = driver.hierarchy().clone();
    let config = driver.config().clone();

    tracing::info!(
        file = %file.display(),
        classes = hierarchy.len(),
        "resolving mapping document"
    );

    Ok(ClassMetadataFactory::with_config(driver, hierarchy, config))
}
