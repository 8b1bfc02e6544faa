//! Configuration constants and SQL text.

/// Default database file, created in the working directory.
pub const DEFAULT_DB_FILE: &str = "testSQL.atc";

/// Environment variable that overrides the database path.
pub const DB_PATH_ENV: &str = "TESTSQL_DB";

/// Default search keyword.
pub const DEFAULT_KEYWORD: &str = "a";

/// Pages printed by a default run.
pub const DEFAULT_PAGES: &[u32] = &[1, 2];

/// Rows per page for a default run.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Schema for the `Users` table.
pub const CREATE_USERS_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS Users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        email TEXT UNIQUE NOT NULL
    );
";

/// Insert one user; reused for every row of a bulk load.
pub const INSERT_USER_SQL: &str = "INSERT INTO Users (name, age, email) VALUES (?1, ?2, ?3)";

/// Paginated keyword search. `?1` is the `LIKE` pattern, `?2` the limit, `?3` the offset.
pub const SEARCH_USERS_SQL: &str = r"
    SELECT id, name, age, email
    FROM Users
    WHERE name LIKE ?1 OR email LIKE ?1
    ORDER BY age DESC, id ASC
    LIMIT ?2 OFFSET ?3
";

/// Count of rows matching the search filter.
pub const COUNT_MATCHES_SQL: &str = "SELECT COUNT(*) FROM Users WHERE name LIKE ?1 OR email LIKE ?1";

/// Build the `LIKE` pattern for a substring match.
#[must_use]
pub fn like_pattern(keyword: &str) -> String {
    format!("%{keyword}%")
}
