use crate::cli::parser::Commands;
use crate::config::{CodeEntry, Config};
use crate::core::registry::ShiftCodeRegistry;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::formatting::{bold, display_width, pad_right};
use std::path::Path;

/// Handle the `codes` subcommand: legend, or add/update one code.
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Codes {
        add,
        start,
        end,
        pause,
        label,
    } = cmd
    {
        let mut registry = ShiftCodeRegistry::from_config(cfg)?;

        if let Some(code) = add {
            let start = start.as_deref().unwrap_or("");
            let end = end.as_deref().unwrap_or("");
            let label = label.as_deref().unwrap_or("");

            // validated first: an invalid code never reaches the config file
            let stored = registry.upsert(code, start, end, *pause, label)?.clone();

            let mut updated = cfg.clone();
            updated.upsert_code(CodeEntry {
                code: stored.code.clone(),
                start: (!start.trim().is_empty()).then(|| start.trim().to_string()),
                end: (!end.trim().is_empty()).then(|| end.trim().to_string()),
                break_minutes: stored.break_minutes,
                label: stored.label.clone(),
            });
            updated.save(path)?;

            success(format!(
                "Shift code '{}' saved: {}",
                stored.code,
                stored.describe()
            ));
            return Ok(());
        }

        print_legend(&registry, &cfg.separator_char);
    }
    Ok(())
}

pub fn print_legend(registry: &ShiftCodeRegistry, sep: &str) {
    header("📖 Legende", sep);

    let width = registry.iter().map(|c| display_width(&c.code)).max().unwrap_or(0);
    for c in registry.iter() {
        println!("{} → {}", bold(&pad_right(&c.code, width)), c.describe());
    }
}
