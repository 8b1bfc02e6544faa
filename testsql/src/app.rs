//! The default flow: open the database, load the seed users, print pages.

use crate::cli::Cli;
use crate::formatter::format_pages;
use crate::model::{SearchPage, seed_users};
use crate::store::{Store, page_count};
use anyhow::Result;
use std::io::Write;

/// Exit status for a completed run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for any failed database operation.
pub const EXIT_FAILURE: u8 = 1;

/// Open the database, load the seed users and write the requested pages to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let mut store = Store::open(&cli.db)?;
    tracing::info!(path = %store.db_path().display(), "database ready");

    if cli.no_seed {
        tracing::info!("skipping seed users");
    } else {
        let ids = store.insert_users(&seed_users())?;
        tracing::info!(count = ids.len(), "seed users loaded");
    }

    let matches = store.count_matches(&cli.keyword)?;
    tracing::info!(
        keyword = %cli.keyword,
        matches,
        pages = page_count(matches, cli.page_size),
        "searching"
    );

    let pages = cli
        .pages
        .iter()
        .map(|&page| store.search_users(&cli.keyword, page, cli.page_size))
        .collect::<crate::Result<Vec<SearchPage>>>()?;

    out.write_all(format_pages(&pages, cli.format).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Turn the outcome of [`run`] into an exit status, writing any error to `err_out`.
pub fn report(result: &Result<()>, err_out: &mut dyn Write) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "SQLite error: {err}");
            EXIT_FAILURE
        }
    }
}
