use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use offerta_core::{build, export_filename, export_xml, OffertaDocument};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// SII offer XML assembly toolchain.
#[derive(Parser)]
#[command(name = "offerta", version, about = "SII offer XML assembly toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the SII XML from an offer JSON document
    Build {
        /// Path to the offer JSON file
        file: PathBuf,
        /// Destination directory for the exported XML
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Free-text label appended to the export filename
        /// (default: the offer name)
        #[arg(long)]
        label: Option<String>,
        /// Print the XML to stdout instead of exporting a file
        #[arg(long)]
        stdout: bool,
    },

    /// Derive the export filename for a VAT number and optional label
    Filename {
        /// Vendor VAT number (PIVA)
        piva: String,
        /// Free-text label appended to the filename
        #[arg(long)]
        label: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let output = cli.output;

    let result = match cli.command {
        Commands::Build {
            file,
            out,
            label,
            stdout,
        } => cmd_build(&file, &out, label.as_deref(), stdout, output),
        Commands::Filename { piva, label } => cmd_filename(&piva, label.as_deref(), output),
    };

    if let Err(message) = result {
        match output {
            OutputFormat::Text => eprintln!("error: {}", message),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({"success": false, "error": message})
            ),
        }
        process::exit(1);
    }
}

fn cmd_build(
    file: &Path,
    out_dir: &Path,
    label: Option<&str>,
    to_stdout: bool,
    output: OutputFormat,
) -> Result<(), String> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("cannot read '{}': {}", file.display(), e))?;
    let doc: OffertaDocument = serde_json::from_str(&content)
        .map_err(|e| format!("invalid offer document '{}': {}", file.display(), e))?;

    let xml = build(&doc);

    if to_stdout {
        print!("{}", xml);
        return Ok(());
    }

    let label = label.unwrap_or(doc.offer_details.nome_offerta.as_str());
    let filename = export_filename(&doc.basic_info.piva_utente, Some(label));
    let outcome = export_xml(&xml, &filename, out_dir);

    if outcome.success {
        let path = outcome.path.unwrap_or_default();
        match output {
            OutputFormat::Text => println!("wrote {}", path.display()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({
                    "success": true,
                    "filename": filename,
                    "path": path.display().to_string(),
                })
            ),
        }
        Ok(())
    } else {
        match outcome.error {
            Some(e) => Err(format!("{} ({})", e.user_message(), e)),
            None => Err("export failed".to_string()),
        }
    }
}

fn cmd_filename(piva: &str, label: Option<&str>, output: OutputFormat) -> Result<(), String> {
    let filename = export_filename(piva, label);
    match output {
        OutputFormat::Text => println!("{}", filename),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({"success": true, "filename": filename})
        ),
    }
    Ok(())
}
