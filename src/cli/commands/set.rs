use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventKind;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        kind,
        id,
        status,
        odometers,
    } = cmd
    {
        if status.is_none() && odometers.is_none() {
            warning("Nothing to update: pass --status and/or --odometers.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(s) = status {
            AddLogic::set_status(&mut pool, *kind, *id, s)?;
        }

        if let Some(readings) = odometers {
            if *kind != EventKind::Flight {
                return Err(AppError::InvalidEventKind(
                    "odometer readings apply to flights only".into(),
                ));
            }
            if let [initial, final_reading] = readings.as_slice() {
                AddLogic::set_odometers(&mut pool, *id, *initial, *final_reading)?;
            }
        }
    }

    Ok(())
}
