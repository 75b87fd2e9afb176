use crate::cli::commands::month::build;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        file,
        force,
    } = cmd
    {
        let session = build(month, cfg)?;
        ExportLogic::export(
            &session,
            format,
            file.as_deref(),
            &cfg.export_dir(),
            *force,
        )?;

        let summary = session.summary();
        if !summary.unknown_codes.is_empty() {
            warning(format!(
                "Onbekende codes aangetroffen: {}",
                summary.unknown_codes.join(", ")
            ));
        }
    }
    Ok(())
}
