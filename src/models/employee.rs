use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

/// Employee columns that can be listed with `Employee::distinct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    Status,
    Country,
    JobTitle,
    EmploymentStatus,
}

impl EmployeeColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Country => "country",
            Self::JobTitle => "job_title",
            Self::EmploymentStatus => "employment_status",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_phone: Option<String>,
    pub country: Option<String>,
    pub job_title: Option<i64>,
    pub employment_status: Option<i64>,
    pub status: String,
}

impl Employee {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Employee {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            mobile_phone: row.get("mobile_phone")?,
            country: row.get("country")?,
            job_title: row.get("job_title")?,
            employment_status: row.get("employment_status")?,
            status: row.get("status")?,
        })
    }

    /// Runs `SELECT * FROM employees WHERE <predicate>` with positional binds.
    /// The predicate is built from fixed column names; values only ever arrive as binds.
    pub fn find(pool: &DbPool, predicate: &str, bind: &[String]) -> Result<Vec<Self>, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let sql = format!("SELECT * FROM employees WHERE {}", predicate);
        let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(bind.iter()), Self::from_row)
            .map_err(|e| e.to_string())?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| e.to_string())
    }

    /// Distinct non-null values of a column, rendered as text.
    pub fn distinct(pool: &DbPool, column: EmployeeColumn) -> Vec<String> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };

        let sql = format!(
            "SELECT DISTINCT CAST({col} AS TEXT) FROM employees WHERE {col} IS NOT NULL",
            col = column.as_str()
        );
        let mut stmt = match conn.prepare(&sql) {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        stmt.query_map([], |row| row.get::<_, String>(0))
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }
}
