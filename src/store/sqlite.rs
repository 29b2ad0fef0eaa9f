use crate::db::DbPool;
use crate::models::employee::{Employee, EmployeeColumn};
use crate::models::employment_status::EmploymentStatus;
use crate::models::job_title::JobTitle;
use crate::models::settings::Setting;

use super::Store;

/// SQLite-backed implementation of the Store trait.
/// Wraps the r2d2 connection pool and delegates to model methods.
pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn new_at(path: &str) -> Result<Self, String> {
        let pool = crate::db::init_pool_at(path).map_err(|e| e.to_string())?;
        Ok(Self { pool })
    }
}

impl Store for SqliteStore {
    // ── Lifecycle ───────────────────────────────────────────────────

    fn run_migrations(&self) -> Result<(), String> {
        crate::db::run_migrations(&self.pool).map_err(|e| e.to_string())
    }

    // ── Settings ────────────────────────────────────────────────────

    fn setting_add(&self, name: &str, description: &str, value: &str) -> bool {
        Setting::add(&self.pool, name, description, value)
    }

    fn setting_get(&self, name: &str) -> String {
        Setting::get(&self.pool, name)
    }

    fn setting_set(&self, name: &str, value: &str) -> Result<(), String> {
        Setting::set(&self.pool, name, value)
    }

    fn setting_list(&self) -> Vec<Setting> {
        Setting::list(&self.pool)
    }

    // ── Employees ───────────────────────────────────────────────────

    fn employee_find(&self, predicate: &str, bind: &[String]) -> Result<Vec<Employee>, String> {
        Employee::find(&self.pool, predicate, bind)
    }

    fn employee_distinct(&self, column: EmployeeColumn) -> Vec<String> {
        Employee::distinct(&self.pool, column)
    }

    // ── Lookups ─────────────────────────────────────────────────────

    fn job_title_name(&self, id: &str) -> Option<String> {
        JobTitle::name_by_id(&self.pool, id)
    }

    fn employment_status_name(&self, id: &str) -> Option<String> {
        EmploymentStatus::name_by_id(&self.pool, id)
    }
}
