use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { kind, id, yes } = cmd {
        if !*yes {
            warning(format!(
                "Delete {} #{}? This action is irreversible.",
                kind.to_db_str(),
                id
            ));
            if !confirm("Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;
        DeleteLogic::apply(&mut pool, *kind, *id)?;
        success(format!("{} #{} has been deleted.", kind.to_db_str(), id));
    }

    Ok(())
}
