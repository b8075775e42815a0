use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}

fn bound(pool: &DbPool, order: &str) -> rusqlite::Result<Option<String>> {
    pool.conn
        .query_row(
            &format!(
                "SELECT start_at FROM (
                    SELECT start_at FROM flights
                    UNION ALL
                    SELECT start_at FROM maintenance
                 ) ORDER BY start_at {order} LIMIT 1"
            ),
            [],
            |row| row.get(0),
        )
        .optional()
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let flights = count(pool, "flights")?;
    let maintenance = count(pool, "maintenance")?;
    println!("{}• Flights:{} {}{}{}", CYAN, RESET, GREEN, flights, RESET);
    println!(
        "{}• Maintenance jobs:{} {}{}{}",
        CYAN, RESET, GREEN, maintenance, RESET
    );

    //
    // 3) STORED RANGE (raw stored text, UTC)
    //
    let fmt = |v: Option<String>| v.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Stored range:{}", CYAN, RESET);
    println!("    from: {}", fmt(bound(pool, "ASC")?));
    println!("    to:   {}", fmt(bound(pool, "DESC")?));

    println!();
    Ok(())
}
