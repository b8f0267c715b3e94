use std::fs;

use anyhow::{Context, Result};
use vip_translate::config_file::load_canonical;
use vip_translate::report::render_artifact_summary;
use vip_translate_core::translate;

use crate::cli::{OutputFormat, TranslateArgs};
use crate::path_guard::ensure_output_not_input;

pub fn run_translate(args: TranslateArgs) -> Result<()> {
    let config = load_canonical(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let artifact = translate(&config, args.vendor.into())
        .with_context(|| format!("translation to {:?} failed", args.vendor))?;

    if let Some(out_path) = &args.output {
        ensure_output_not_input(out_path, &args.input)?;
        fs::write(out_path, &artifact.text)
            .with_context(|| format!("failed to write artifact {}", out_path.display()))?;
    }

    match args.format {
        OutputFormat::Text => {
            if args.output.is_none() {
                // artifact goes to stdout unadorned so it can be piped
                print!("{}", artifact.text);
            } else {
                println!("{}", render_artifact_summary(&artifact));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&artifact)?),
    }

    Ok(())
}
