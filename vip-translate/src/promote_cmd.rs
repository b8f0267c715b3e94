use std::fs;

use anyhow::{Context, Result};
use vip_translate::config_file::load_canonical;
use vip_translate::report::render_promotion_plan;
use vip_translate_core::plan;

use crate::cli::{OutputFormat, PromoteArgs};
use crate::path_guard::ensure_output_not_input;

pub fn run_promote(args: PromoteArgs) -> Result<()> {
    let source = load_canonical(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let promotion = plan(
        &source,
        args.to_env.into(),
        &args.datacenter,
        args.vendor.into(),
    )
    .with_context(|| {
        format!(
            "cannot plan promotion of {} to {:?}",
            args.input.display(),
            args.to_env
        )
    })?;

    if let Some(out_path) = &args.output {
        ensure_output_not_input(out_path, &args.input)?;
        let draft_json = serde_json::to_string_pretty(&promotion.draft)?;
        fs::write(out_path, draft_json)
            .with_context(|| format!("failed to write draft config {}", out_path.display()))?;
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_promotion_plan(&promotion)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&promotion)?),
    }

    Ok(())
}
