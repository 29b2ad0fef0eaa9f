use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

/// Category every setting owned by this extension is filed under.
pub const SETTING_CATEGORY: &str = "sms77";
pub const API_KEY_SETTING: &str = "sms77_api_key";
pub const API_KEY_DESCRIPTION: &str = "API key from sms77.io, required for sending SMS and voice messages";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub value: String,
    pub description: String,
    pub category: String,
}

impl Setting {
    /// Create and save a setting in the extension's category.
    /// Returns whether the row was written; a duplicate name is a failed save.
    pub fn add(pool: &DbPool, name: &str, description: &str, value: &str) -> bool {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Settings: no connection to save {}: {}", name, e);
                return false;
            }
        };
        match conn.execute(
            "INSERT INTO settings (name, value, description, category) VALUES (?1, ?2, ?3, ?4)",
            params![name, value, description, SETTING_CATEGORY],
        ) {
            Ok(n) => n == 1,
            Err(e) => {
                log::warn!("Settings: failed to save {}: {}", name, e);
                false
            }
        }
    }

    pub fn find(pool: &DbPool, name: &str) -> Option<Setting> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT name, COALESCE(value, ''), COALESCE(description, ''), category
             FROM settings WHERE name = ?1 AND category = ?2",
            params![name, SETTING_CATEGORY],
            |row| {
                Ok(Setting {
                    name: row.get(0)?,
                    value: row.get(1)?,
                    description: row.get(2)?,
                    category: row.get(3)?,
                })
            },
        )
        .ok()
    }

    /// Value of a setting, empty when unset.
    pub fn get(pool: &DbPool, name: &str) -> String {
        Self::find(pool, name).map(|s| s.value).unwrap_or_default()
    }

    pub fn set(pool: &DbPool, name: &str, value: &str) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO settings (name, value, description, category) VALUES (?1, ?2, '', ?3)
             ON CONFLICT(name) DO UPDATE SET value = ?2",
            params![name, value, SETTING_CATEGORY],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn list(pool: &DbPool) -> Vec<Setting> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };

        let mut stmt = match conn.prepare(
            "SELECT name, COALESCE(value, ''), COALESCE(description, ''), category
             FROM settings WHERE category = ?1 ORDER BY name",
        ) {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        stmt.query_map(params![SETTING_CATEGORY], |row| {
            Ok(Setting {
                name: row.get(0)?,
                value: row.get(1)?,
                description: row.get(2)?,
                category: row.get(3)?,
            })
        })
        .map(|rows| rows.filter_map(|r| r.ok()).collect())
        .unwrap_or_default()
    }
}
