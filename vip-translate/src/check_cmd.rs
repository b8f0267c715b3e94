use anyhow::{bail, Context, Result};
use vip_translate::check::build_check_report;
use vip_translate::config_file::load_canonical;
use vip_translate::report::render_check;

use crate::cli::{CheckArgs, OutputFormat};

pub fn run_check(args: CheckArgs) -> Result<()> {
    let config = load_canonical(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let report = build_check_report(&config, args.vendor.map(Into::into));

    match args.format {
        OutputFormat::Text => println!("{}", render_check(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.errors > 0 {
        bail!("check failed: {} errors", report.errors);
    }
    if args.strict && report.warnings > 0 {
        bail!("check failed in strict mode: {} warnings", report.warnings);
    }
    Ok(())
}
