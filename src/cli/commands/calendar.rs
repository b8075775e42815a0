use crate::cli::commands::render::{day_heading, event_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier::category_of;
use crate::core::logic::Core;
use crate::core::schedule::index::{self, ScheduleIndex};
use crate::core::schedule::span::load_span;
use crate::core::time_converter::DisplayPattern;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{CalendarCell, Direction, Granularity};
use crate::models::category::Category;
use crate::models::civil::CivilDateTime;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{GREY, RESET, TODAY, colorize_category};
use crate::utils::date::{parse_date, weekday_short};
use crate::utils::formatting::{bold, pad_right};
use chrono::{Datelike, NaiveDate};

const CELL_WIDTH: usize = 6;
const MAX_MARKERS: usize = 3;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        date,
        view,
        prev,
        next,
    } = cmd
    {
        let converter = cfg.converter()?;
        let core = Core::new(converter.clone(), cfg.week_start);
        let view = view.unwrap_or(cfg.default_view);

        let mut reference = match date {
            Some(d) => CivilDateTime::from_date(
                parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            ),
            None => converter.now_civil(),
        };

        let (steps, direction) = match (prev, next) {
            (Some(n), _) => (*n, Direction::Backward),
            (None, Some(n)) => (*n, Direction::Forward),
            (None, None) => (0, Direction::Forward),
        };
        for _ in 0..steps {
            reference = core.navigate(reference, view, direction);
        }

        let cells = core.get_grid(reference, view);
        let (start, end) = core.grid_builder().period_bounds(reference.date(), view);

        tracing::debug!(view = view.as_str(), %start, %end, "building calendar");

        let pool = DbPool::new(&cfg.database)?;
        let span = load_span(&SqliteStore::new(&pool), &converter, start, end, None)?;
        let idx = ScheduleIndex::build(&span.events, &converter);

        println!();
        println!("{}", bold(&period_title(&core, view, start, end)));
        println!();

        if view != Granularity::Day {
            print_grid(&core, &idx, &cells);
            println!();
        }

        if idx.is_empty() {
            info("No events in this period.");
        } else {
            for cell in cells.iter().filter(|c| c.in_current_period) {
                let events = core.get_events_for_cell(&idx, cell);
                if events.is_empty() {
                    continue;
                }
                println!("{}", day_heading(cell.date));
                for ev in events {
                    println!("{}", event_line(ev, &converter));
                }
            }
        }

        if view == Granularity::Month {
            let s = index::summary(&span.events);
            println!();
            println!(
                "Flights: {}  (completed {}, scheduled {}, cancelled {}, unknown {})  Maintenance: {}",
                s.flight_count,
                s.completed_count,
                s.scheduled_count,
                s.cancelled_count,
                s.unknown_count,
                s.maintenance_count
            );
        }

        if span.skipped > 0 {
            warning(format!(
                "{} record(s) with unreadable timestamps are not shown.",
                span.skipped
            ));
        }
    }

    Ok(())
}

fn period_title(core: &Core, view: Granularity, start: NaiveDate, end: NaiveDate) -> String {
    match view {
        Granularity::Month => start.format("%B %Y").to_string(),
        Granularity::Week => format!("Week {} to {}", start, end),
        Granularity::Day => core
            .converter()
            .format_civil(CivilDateTime::from_date(start), DisplayPattern::DateLong),
    }
}

fn print_grid(core: &Core, idx: &ScheduleIndex<'_>, cells: &[CalendarCell]) {
    let mut weekday = core.grid_builder().week_start().weekday();
    let mut header = String::new();
    for _ in 0..7 {
        header.push_str(&pad_right(weekday_short(weekday), CELL_WIDTH));
        weekday = weekday.succ();
    }
    println!("{}", header.trim_end());

    for row in cells.chunks(7) {
        let line: String = row.iter().map(|c| render_cell(core, idx, c)).collect();
        println!("{}", line.trim_end());
    }
}

/// Day number followed by one marker per distinct category on that day.
fn render_cell(core: &Core, idx: &ScheduleIndex<'_>, cell: &CalendarCell) -> String {
    let day = format!("{:>2}", cell.date.day());

    if !cell.in_current_period {
        return format!("{GREY}{}{RESET}", pad_right(&day, CELL_WIDTH));
    }

    let mut categories: Vec<Category> = Vec::new();
    for ev in core.get_events_for_cell(idx, cell) {
        let c = category_of(ev);
        if !categories.contains(&c) {
            categories.push(c);
        }
    }
    categories.truncate(MAX_MARKERS);

    let markers: String = categories
        .iter()
        .map(|c| colorize_category(&c.marker().to_string(), *c))
        .collect();

    let day = if cell.is_today {
        format!("{TODAY}{day}{RESET}")
    } else {
        day
    };

    let used = 2 + categories.len();
    format!("{day}{markers}{}", " ".repeat(CELL_WIDTH.saturating_sub(used)))
}
