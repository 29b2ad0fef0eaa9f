use crate::models::employee::{Employee, EmployeeColumn};
use crate::models::settings::Setting;

pub mod sqlite;

/// Everything the extension needs from the HR application's data layer.
/// Implementations: `SqliteStore` (wraps rusqlite/r2d2).
pub trait Store: Send + Sync {
    // ── Lifecycle ───────────────────────────────────────────────────
    fn run_migrations(&self) -> Result<(), String>;

    // ── Settings ────────────────────────────────────────────────────
    /// Create a setting in the extension's category. Returns whether it was saved.
    fn setting_add(&self, name: &str, description: &str, value: &str) -> bool;
    /// Empty string when the setting does not exist.
    fn setting_get(&self, name: &str) -> String;
    fn setting_set(&self, name: &str, value: &str) -> Result<(), String>;
    fn setting_list(&self) -> Vec<Setting>;

    // ── Employees ───────────────────────────────────────────────────
    fn employee_find(&self, predicate: &str, bind: &[String]) -> Result<Vec<Employee>, String>;
    fn employee_distinct(&self, column: EmployeeColumn) -> Vec<String>;

    // ── Lookups ─────────────────────────────────────────────────────
    fn job_title_name(&self, id: &str) -> Option<String>;
    fn employment_status_name(&self, id: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{API_KEY_SETTING, SETTING_CATEGORY};
    use crate::store::sqlite::SqliteStore;

    /// Create a fresh in-memory SqliteStore with migrations + seed applied.
    fn test_store() -> SqliteStore {
        let manager = r2d2_sqlite::SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .build(manager)
            .expect("Failed to create in-memory pool");
        let store = SqliteStore::new(pool);
        store.run_migrations().expect("migrations failed");
        crate::sms77::install(&store).expect("install failed");
        store
    }

    fn insert_employee(s: &SqliteStore, phone: Option<&str>, country: &str, status: &str) {
        let conn = s.pool.get().unwrap();
        conn.execute(
            "INSERT INTO employees (first_name, mobile_phone, country, status) VALUES ('E', ?1, ?2, ?3)",
            rusqlite::params![phone, country, status],
        )
        .unwrap();
    }

    // ── Settings ────────────────────────────────────────────────────

    #[test]
    fn test_install_registers_api_key() {
        let s = test_store();
        let list = s.setting_list();
        let key = list.iter().find(|x| x.name == API_KEY_SETTING).expect("api key seeded");
        assert_eq!(key.category, SETTING_CATEGORY);
        assert_eq!(key.value, "");
        assert!(!key.description.is_empty());
    }

    #[test]
    fn test_install_is_idempotent() {
        let s = test_store();
        s.setting_set(API_KEY_SETTING, "abc").unwrap();
        crate::sms77::install(&s).unwrap();
        assert_eq!(s.setting_get(API_KEY_SETTING), "abc");
    }

    #[test]
    fn test_setting_add_and_get() {
        let s = test_store();
        assert!(s.setting_add("sms77_from", "Sender id", "HR"));
        assert_eq!(s.setting_get("sms77_from"), "HR");
    }

    #[test]
    fn test_setting_add_duplicate_fails() {
        let s = test_store();
        assert!(s.setting_add("dup", "first", "1"));
        assert!(!s.setting_add("dup", "second", "2"));
        assert_eq!(s.setting_get("dup"), "1");
    }

    #[test]
    fn test_setting_get_missing_is_empty() {
        let s = test_store();
        assert_eq!(s.setting_get("nonexistent_key_xyz"), "");
    }

    #[test]
    fn test_setting_ignores_other_categories() {
        let s = test_store();
        {
            let conn = s.pool.get().unwrap();
            conn.execute(
                "INSERT INTO settings (name, value, description, category) VALUES ('foreign', 'x', '', 'System')",
                [],
            )
            .unwrap();
        }
        assert_eq!(s.setting_get("foreign"), "");
        assert!(s.setting_list().iter().all(|x| x.name != "foreign"));
    }

    // ── Employees ───────────────────────────────────────────────────

    #[test]
    fn test_employee_find_binds_values() {
        let s = test_store();
        insert_employee(&s, Some("111"), "DE", "Active");
        insert_employee(&s, Some("222"), "US", "Active");
        let found = s.employee_find("country in (?)", &["US".to_string()]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].mobile_phone.as_deref(), Some("222"));
    }

    #[test]
    fn test_employee_find_bad_predicate_errors() {
        let s = test_store();
        assert!(s.employee_find("no_such_column = ?", &["1".to_string()]).is_err());
    }

    #[test]
    fn test_employee_distinct_skips_null() {
        let s = test_store();
        insert_employee(&s, Some("1"), "DE", "Active");
        insert_employee(&s, Some("2"), "DE", "Terminated");
        insert_employee(&s, None, "FR", "Active");
        let mut statuses = s.employee_distinct(EmployeeColumn::Status);
        statuses.sort();
        assert_eq!(statuses, vec!["Active", "Terminated"]);
        let mut countries = s.employee_distinct(EmployeeColumn::Country);
        countries.sort();
        assert_eq!(countries, vec!["DE", "FR"]);
        assert!(s.employee_distinct(EmployeeColumn::JobTitle).is_empty());
    }

    #[test]
    fn test_lookup_names() {
        let s = test_store();
        {
            let conn = s.pool.get().unwrap();
            conn.execute("INSERT INTO job_titles (id, name) VALUES (7, 'Engineer')", [])
                .unwrap();
            conn.execute(
                "INSERT INTO employment_statuses (id, name) VALUES (3, 'Full Time')",
                [],
            )
            .unwrap();
        }
        assert_eq!(s.job_title_name("7"), Some("Engineer".to_string()));
        assert_eq!(s.employment_status_name("3"), Some("Full Time".to_string()));
        assert!(s.job_title_name("99").is_none());
    }
}
