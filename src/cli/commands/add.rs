use crate::cli::parser::{AddCommand, Commands};
use crate::config::Config;
use crate::core::add::{AddLogic, FlightDraft, MaintenanceDraft};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { what } = cmd {
        let converter = cfg.converter()?;
        let mut pool = DbPool::new(&cfg.database)?;

        match what {
            AddCommand::Flight(a) => {
                let draft = FlightDraft {
                    date: a.date.clone(),
                    start: a.start.clone(),
                    end: a.end.clone(),
                    aircraft: a.aircraft.clone(),
                    pilot: a.pilot.clone(),
                    title: a.title.clone(),
                    status: a.status.clone(),
                    odometer_start: a.odometer_start,
                    odometer_end: a.odometer_end,
                };
                AddLogic::add_flight(&mut pool, &converter, &draft)?;
            }
            AddCommand::Maintenance(a) => {
                let draft = MaintenanceDraft {
                    date: a.date.clone(),
                    start: a.start.clone(),
                    aircraft: a.aircraft.clone(),
                    technician: a.technician.clone(),
                    title: a.title.clone(),
                    status: a.status.clone(),
                };
                AddLogic::add_maintenance(&mut pool, &converter, &draft)?;
            }
        }
    }

    Ok(())
}
