use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::run_time_label;
use crate::core::logic::Core;
use crate::errors::AppResult;

/// `duration` and `odometer`: stand-alone calculators, no database access.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let core = Core::new(cfg.converter()?, cfg.week_start);

    match cmd {
        Commands::Duration {
            start,
            end,
            from_date,
            to_date,
        } => {
            let minutes = match (from_date, to_date) {
                (Some(fd), Some(td)) => {
                    let conv = core.converter();
                    let s = conv.parse_civil_input(fd, start)?;
                    let e = conv.parse_civil_input(td, end)?;
                    core.compute_duration_between(&s, &e)
                }
                _ => core.compute_duration(start, end)?,
            };
            println!("Duration: {} ({} min)", run_time_label(minutes), minutes);
        }
        Commands::Odometer {
            initial,
            final_reading,
        } => {
            let hours = core.compute_flight_time_from_odometers(*initial, *final_reading)?;
            println!("Flight time: {hours:.1} h");
        }
        _ => {}
    }

    Ok(())
}
