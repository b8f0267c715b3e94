use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse to write an artifact or draft over its own input config.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite input config: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        // canonicalize resolves symlinks and `..` for paths that exist on disk.
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // The output file usually does not exist yet; best-effort join with cwd.
    // `..` sequences are not resolved here, which is acceptable for a CLI
    // where the user controls both paths.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}
