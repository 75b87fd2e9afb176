use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values. An existing file is
/// kept unless `force` is set.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    info("Initializing shiftcal…");
    Config::default().save(path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
