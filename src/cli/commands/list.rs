use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::index::ScheduleIndex;
use crate::core::schedule::span::load_span;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::EventExport;
use crate::export::range::parse_range;
use crate::models::month_key::MonthKey;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::hours_or_dash;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range, resource } = cmd {
        let converter = cfg.converter()?;

        let (start, end) = match range {
            Some(r) => parse_range(r)?,
            None => {
                let m = MonthKey::of(converter.today());
                (m.first_day(), m.last_day())
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        let span = load_span(
            &SqliteStore::new(&pool),
            &converter,
            start,
            end,
            resource.as_deref(),
        )?;
        let idx = ScheduleIndex::build(&span.events, &converter);
        let events = idx.events_in_range(start, end);

        println!("\n📅 Events from {} to {} ({})\n", start, end, converter.zone());

        if events.is_empty() {
            info("No events found.");
        } else {
            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("KIND", 11),
                Column::new("DATE", 10),
                Column::new("START", 5),
                Column::new("END", 16),
                Column::new("AIRCRAFT", 8),
                Column::new("CREW", 12),
                Column::new("STATUS", 11),
                Column::new("RUN", 6),
                Column::new("HOURS", 5),
            ]);

            let count = events.len();
            for ev in events {
                let row = EventExport::from_event(ev, &converter);
                table.add_row(vec![
                    row.id.to_string(),
                    row.kind,
                    row.date,
                    row.start,
                    row.end,
                    row.aircraft,
                    row.participant,
                    row.category,
                    row.run_time,
                    hours_or_dash(row.flight_hours),
                ]);
            }

            print!("{}", table.render());
            println!("\n{} event(s)", count);
        }

        if span.skipped > 0 {
            warning(format!(
                "{} record(s) with unreadable timestamps are not listed.",
                span.skipped
            ));
        }
    }

    Ok(())
}
