//! Config display handler

use crate::AppConfig;
use crate::PolicyRagError;
use crate::Result;

/// Print the effective configuration (no secrets live in the config)
pub fn handle_config(config: &AppConfig) -> Result<()> {
    println!("📄 Current configuration\n");

    let rendered =
        toml::to_string_pretty(config).map_err(|e| PolicyRagError::Config(e.to_string()))?;
    println!("{rendered}");

    Ok(())
}
