use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use clinic_site_config::Config;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Writes the built-in site configuration to `path`.
pub fn execute(path: &Path, args: &InitArgs, out: &mut impl Write) -> Result<()> {
    if path.exists() && !args.force {
        bail!(
            "Config file '{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    writeln!(out, "{}", path.display())?;
    Ok(())
}
