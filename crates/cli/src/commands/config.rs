use std::fs;

use anyhow::{anyhow, Context, Result};
use namecheck_core::config::{render_config, NamecheckConfig};

use crate::canonicalize_or_current;

/// Write a default config to `path`. Refuses to overwrite unless `force`.
pub fn init_config_command(path: &str, force: bool) -> Result<()> {
    let target = canonicalize_or_current(path)?;
    if target.exists() && !force {
        return Err(anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            target.display()
        ));
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
    }
    let text = render_config(&target, &NamecheckConfig::new())?;
    fs::write(&target, text)
        .with_context(|| format!("Failed to write config: {}", target.display()))?;
    println!("Wrote default config to {}", target.display());
    Ok(())
}
