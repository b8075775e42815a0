use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::schedule::session::{CommitOutcome, ScheduleSession};
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let converter = cfg.converter()?;
        let month = match month {
            Some(m) => MonthKey::parse(m)?,
            None => MonthKey::of(converter.today()),
        };

        let core = Core::new(converter.clone(), cfg.week_start);
        let pool = DbPool::new(&cfg.database)?;
        let mut session = ScheduleSession::new(converter);

        if let CommitOutcome::Applied { skipped, .. } =
            session.load(&SqliteStore::new(&pool), month)?
            && skipped > 0
        {
            warning(format!(
                "{skipped} record(s) with unreadable timestamps were not counted."
            ));
        }

        let s = core
            .get_summary(&session, month)
            .ok_or_else(|| AppError::Other(format!("month {month} is not loaded")))?;

        println!("\n📊 Summary for {month}\n");
        println!("{CYAN}• Flights:{RESET}     {}", s.flight_count);
        println!("    {GREEN}completed{RESET}  {}", s.completed_count);
        println!("    scheduled  {}", s.scheduled_count);
        println!("    {RED}cancelled{RESET}  {}", s.cancelled_count);
        println!("    unknown    {}", s.unknown_count);
        println!("{CYAN}• Maintenance:{RESET} {YELLOW}{}{RESET}", s.maintenance_count);
        println!("{CYAN}• Total:{RESET}       {}", s.total());
    }

    Ok(())
}
