use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Commented starter config written by `init`.
pub fn default_config_template() -> &'static str {
    "# Colombia GeoGame configuration

# CSV table to quiz on. Leave unset to use the bundled department table.
# Columns: departamento, capital, aeropuerto, lugar_aeropuerto, iata, altitud, latitud, longitud
# data_path: /path/to/departamentos_colombia.csv

# Starting mode: departments, capitals, airports, iata-codes, practice, distance, altitude
mode: departments

# Difficulty: easy, medium, hard (shown in the sidebar; scoring is the same at every level)
difficulty: easy

# How long answer feedback stays on screen before the next question
feedback_delay: 5s

# Screen refresh tick in milliseconds
tick_rate_ms: 250

# Color theme: auto, dark, light
theme: auto
"
}

/// Write the starter config to `path` atomically.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(default_config_template().as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}
