use rusqlite::params;

use crate::db::DbPool;

pub struct EmploymentStatus;

impl EmploymentStatus {
    pub fn name_by_id(pool: &DbPool, id: &str) -> Option<String> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT name FROM employment_statuses WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .ok()
    }
}
