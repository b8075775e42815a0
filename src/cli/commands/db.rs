use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *info) {
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
