#![deny(missing_docs)]

//! # Convert Command
//!
//! Loads the OpenAPI document, runs the conversion, and writes the
//! Postman collection. Load and parse failures are fatal: there is no
//! meaningful partial output without a document.

use std::fs;
use std::path::{Path, PathBuf};

use o2p_core::{convert, AppError, AppResult, ConvertOptions, OpenApiDocument};

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the OpenAPI document (JSON, or YAML by extension).
    #[clap(long, default_value = "open_api.json")]
    pub input: PathBuf,

    /// Output path for the Postman collection. Prints to stdout when omitted.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Base URL prefix for request URLs (Postman variable syntax allowed).
    #[clap(long, default_value = "{{url}}")]
    pub base_url: String,
}

/// Executes the conversion.
pub fn execute(args: &ConvertArgs) -> AppResult<()> {
    if !args.input.exists() {
        return Err(AppError::General(format!(
            "OpenAPI file not found: {:?}",
            args.input
        )));
    }

    // 1. Read Document
    let content = fs::read_to_string(&args.input)?;

    // 2. Parse
    let document = if is_yaml(&args.input) {
        OpenApiDocument::from_yaml_str(&content)?
    } else {
        OpenApiDocument::from_json_str(&content)?
    };

    // 3. Convert
    let options = ConvertOptions {
        base_url: args.base_url.clone(),
    };
    let collection = convert(&document, &options)?;

    // 4. Write Collection
    let rendered = serde_json::to_string_pretty(&collection)?;

    match &args.output {
        Some(output) => {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(output, rendered)?;
            println!("Postman collection written to {:?}", output);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
