use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse any report target that would overwrite the configuration export.
///
/// `targets` are the files the report will write (the output file, or each
/// CSV inside the output directory).
pub fn ensure_targets_spare_input(input: &Path, targets: &[PathBuf]) -> Result<()> {
    let source = resolved(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    for target in targets {
        let resolved_target = resolved(target)
            .with_context(|| format!("failed to resolve output path {}", target.display()))?;
        if resolved_target == source {
            bail!(
                "refusing to overwrite source file: output {} is the input {}",
                target.display(),
                input.display()
            );
        }
    }
    Ok(())
}

/// Canonical form of `path`; a missing file is resolved through its parent
/// directory so `dir/../conf` and `conf` still compare equal.
fn resolved(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.canonicalize()?);
    }

    let absolute = std::env::current_dir().context("current_dir")?.join(path);
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) if parent.exists() => Ok(parent.canonicalize()?.join(name)),
        _ => Ok(absolute),
    }
}
