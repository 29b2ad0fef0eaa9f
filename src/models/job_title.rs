use rusqlite::params;

use crate::db::DbPool;

pub struct JobTitle;

impl JobTitle {
    pub fn name_by_id(pool: &DbPool, id: &str) -> Option<String> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT name FROM job_titles WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .ok()
    }
}
