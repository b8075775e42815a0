use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::AppResult;
use crate::models::event::EventKind;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, kind: EventKind, id: i64) -> AppResult<()> {
        // fails with EventNotFound before anything is touched
        let record = load_event(&pool.conn, kind, id)?;

        delete_event(&pool.conn, kind, id)?;

        ttlog_quiet(
            &pool.conn,
            "del",
            &format!("{} #{id}", kind.to_db_str()),
            &format!("{} {} '{}'", record.resource_id, record.start, record.title),
        );

        info(format!("Deleted {} #{} ({})", kind.to_db_str(), id, record.resource_id));
        Ok(())
    }
}
