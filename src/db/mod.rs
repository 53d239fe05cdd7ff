mod schema;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{LeadTime, Recurrence, Subscription};

/// Thin storage collaborator. Owns the connection; call sites pass it
/// explicitly, there is no process-wide handle.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Subscriptions ─────────────────────────────────────────

    pub(crate) fn insert_subscription(&self, sub: &Subscription) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO subscriptions (user_id, service, category, cost, purchase_date, lead_time, recurrence, reminder_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                sub.user_id,
                sub.service,
                sub.category,
                sub.cost.to_string(),
                sub.purchase_date.format("%Y-%m-%d").to_string(),
                sub.lead_time.as_str(),
                sub.recurrence.map(|r| r.as_str()).unwrap_or(""),
                sub.reminder_date.format("%Y-%m-%d").to_string(),
                sub.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All subscriptions owned by one user, newest first.
    pub(crate) fn subscriptions_for_user(&self, user_id: i64) -> Result<Vec<Subscription>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, service, category, cost, purchase_date, lead_time, recurrence, reminder_date, created_at
             FROM subscriptions WHERE user_id = ?1 ORDER BY id DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            let cost_str: String = row.get(4)?;
            let purchase_str: String = row.get(5)?;
            let lead_str: String = row.get(6)?;
            let recurrence_str: String = row.get(7)?;
            let reminder_str: String = row.get(8)?;
            Ok(Subscription {
                id: Some(row.get(0)?),
                user_id: row.get(1)?,
                service: row.get(2)?,
                category: row.get(3)?,
                cost: Decimal::from_str(&cost_str).unwrap_or_default(),
                purchase_date: parse_stored_date(&purchase_str),
                lead_time: LeadTime::parse(&lead_str),
                recurrence: Recurrence::parse(&recurrence_str),
                reminder_date: parse_stored_date(&reminder_str),
                created_at: row.get(9)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_subscription_by_id(&self, id: i64) -> Result<Option<Subscription>> {
        let result = self.conn.query_row(
            "SELECT id, user_id, service, category, cost, purchase_date, lead_time, recurrence, reminder_date, created_at
             FROM subscriptions WHERE id = ?1",
            params![id],
            |row| {
                let cost_str: String = row.get(4)?;
                let purchase_str: String = row.get(5)?;
                let lead_str: String = row.get(6)?;
                let recurrence_str: String = row.get(7)?;
                let reminder_str: String = row.get(8)?;
                Ok(Subscription {
                    id: Some(row.get(0)?),
                    user_id: row.get(1)?,
                    service: row.get(2)?,
                    category: row.get(3)?,
                    cost: Decimal::from_str(&cost_str).unwrap_or_default(),
                    purchase_date: parse_stored_date(&purchase_str),
                    lead_time: LeadTime::parse(&lead_str),
                    recurrence: Recurrence::parse(&recurrence_str),
                    reminder_date: parse_stored_date(&reminder_str),
                    created_at: row.get(9)?,
                })
            },
        );
        match result {
            Ok(s) => Ok(Some(s)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn delete_subscription(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM subscriptions WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn parse_stored_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}
