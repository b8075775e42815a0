use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        resource,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &pool,
            &cfg.converter()?,
            *format,
            file,
            range.as_deref(),
            resource.as_deref(),
            *force,
        )?;
    }

    Ok(())
}
