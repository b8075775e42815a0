//! Shared text rendering for calendar and list output.

use crate::core::calculator::duration::run_time_label;
use crate::core::classifier::category_of;
use crate::core::time_converter::{DisplayPattern, TimeConverter};
use crate::models::event::ScheduledEvent;
use crate::utils::colors::{colorize_category, colorize_optional};
use chrono::NaiveDate;

/// `2025-08-15 Fri`
pub(crate) fn day_heading(date: NaiveDate) -> String {
    date.format("%Y-%m-%d %a").to_string()
}

/// One agenda line: times, category marker, id, aircraft, title, crew, run time.
pub(crate) fn event_line(ev: &ScheduledEvent, converter: &TimeConverter) -> String {
    let category = category_of(ev);

    let start = converter.format_for_display(ev.start, DisplayPattern::TimeOnly);
    let end = ev
        .end
        .map(|e| converter.format_for_display(e, DisplayPattern::TimeOnly))
        .unwrap_or_else(|| "--:--".to_string());

    let who = ev
        .participant
        .as_deref()
        .map(|p| format!(" ({p})"))
        .unwrap_or_default();

    let run = ev
        .scheduled_minutes()
        .map(|m| format!("  {}", run_time_label(m)))
        .unwrap_or_default();

    format!(
        "  {}-{} {} #{:<4} {:<8} {}{}{}",
        start,
        colorize_optional(&end),
        colorize_category(&format!("[{}]", category.marker()), category),
        ev.id,
        ev.resource_id,
        ev.title,
        who,
        run
    )
}
