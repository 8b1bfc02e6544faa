//! Database store for user records.
//!
//! This module owns the SQLite connection and provides schema setup, the
//! transactional bulk loader and the paginated keyword search.

use crate::config::{
    COUNT_MATCHES_SQL, CREATE_USERS_SQL, INSERT_USER_SQL, SEARCH_USERS_SQL, like_pattern,
};
use crate::error::{Result, TestSqlError};
use crate::model::{NewUser, SearchPage, User};
use rusqlite::{Connection, OpenFlags, Row, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The database store.
#[derive(Debug)]
pub struct Store {
    /// Database connection.
    conn: Connection,
    /// Database file path (`:memory:` for in-memory stores).
    db_path: PathBuf,
}

impl Store {
    /// Open (or create) the database file read-write and ensure the schema exists.
    pub fn open(db_path: &Path) -> Result<Self> {
        // Ensure parent directory exists.
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;
        debug!(path = %db_path.display(), "opened database");

        let store = Self {
            conn,
            db_path: db_path.to_path_buf(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Open a private in-memory database with the schema in place.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            db_path: PathBuf::from(":memory:"),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Get the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Create the `Users` table if it does not exist yet.
    ///
    /// Safe to call any number of times.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_USERS_SQL)?;
        debug!("users schema ready");
        Ok(())
    }

    /// Insert all users in a single transaction.
    ///
    /// Returns the assigned ids in input order. If any row fails (for example
    /// a duplicate email) the whole batch is rolled back and the error is
    /// returned, so either every user is stored or none is.
    pub fn insert_users(&mut self, users: &[NewUser]) -> Result<Vec<i64>> {
        let tx = self.conn.transaction()?;

        let ids = match insert_each(&tx, users) {
            Ok(ids) => ids,
            Err(err) => {
                warn!(error = %err, "bulk insert failed, rolling back");
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                return Err(err);
            }
        };

        tx.commit()?;
        info!(count = ids.len(), "inserted users");
        Ok(ids)
    }

    /// Search users whose name or email contains `keyword`, oldest first.
    ///
    /// `page` is 1-based. A page past the last match is empty rather than an error.
    pub fn search_users(&self, keyword: &str, page: u32, page_size: u32) -> Result<SearchPage> {
        if page == 0 || page_size == 0 {
            return Err(TestSqlError::InvalidPage { page, page_size });
        }
        let offset = i64::from(page - 1).saturating_mul(i64::from(page_size));

        let mut stmt = self.conn.prepare(SEARCH_USERS_SQL)?;
        let users = stmt
            .query_map(
                params![like_pattern(keyword), i64::from(page_size), offset],
                user_from_row,
            )?
            .collect::<std::result::Result<Vec<User>, _>>()?;

        debug!(keyword, page, page_size, rows = users.len(), "searched users");
        Ok(SearchPage {
            keyword: keyword.to_string(),
            page,
            page_size,
            users,
        })
    }

    /// Number of users whose name or email contains `keyword`.
    pub fn count_matches(&self, keyword: &str) -> Result<usize> {
        let pattern = like_pattern(keyword);
        let count: i64 = self
            .conn
            .query_row(COUNT_MATCHES_SQL, params![pattern], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Total number of stored users.
    pub fn count_users(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Users", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

/// Run the insert statement once per user, reusing one prepared statement.
fn insert_each(conn: &Connection, users: &[NewUser]) -> Result<Vec<i64>> {
    let mut stmt = conn.prepare(INSERT_USER_SQL)?;
    let mut ids = Vec::with_capacity(users.len());
    for user in users {
        let id = stmt.insert(params![user.name, user.age, user.email])?;
        debug!(id, email = %user.email, "inserted user");
        ids.push(id);
    }
    Ok(ids)
}

/// Map a `SELECT id, name, age, email` row to a [`User`].
fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        email: row.get(3)?,
    })
}

/// Number of pages needed to show `total` rows at `page_size` rows per page.
#[must_use]
pub fn page_count(total: usize, page_size: u32) -> usize {
    match usize::try_from(page_size) {
        Ok(0) | Err(_) => 0,
        Ok(size) => total.div_ceil(size),
    }
}
