//! testsql - embedded SQLite basics
//!
//! Creates a `Users` table, bulk-loads users inside one transaction and runs
//! a paginated keyword search over name and email.
//!
//! ## Features
//!
//! - Idempotent schema setup
//! - All-or-nothing bulk insert with a reused prepared statement
//! - `LIKE` search ordered by age, paged with `LIMIT`/`OFFSET`
//! - CLI, JSON, CSV and Markdown output

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod model;
pub mod store;

pub use app::{EXIT_FAILURE, EXIT_SUCCESS, report, run};
pub use cli::{Cli, OutputFormat};
pub use error::{Result, TestSqlError};
pub use formatter::format_pages;
pub use model::{NewUser, SearchPage, User, seed_users};
pub use store::{Store, page_count};
