use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        match BackupLogic::backup(&pool, Path::new(&cfg.database), file, *compress, *force)? {
            Some(path) => success(format!("Backup written to {}", path.display())),
            None => info("Backup cancelled, existing file kept."),
        }
    }

    Ok(())
}
