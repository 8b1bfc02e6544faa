//! Output formatting for search pages.

use crate::cli::OutputFormat;
use crate::model::{SearchPage, User};
use colored::Colorize;

/// Render search pages in the requested format.
pub fn format_pages(pages: &[SearchPage], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(pages),
        OutputFormat::Csv => format_csv(pages),
        OutputFormat::Md => format_md(pages),
        OutputFormat::Cli => format_cli(pages),
    }
}

/// One row in the human-readable layout.
pub fn format_user_line(user: &User) -> String {
    format!(
        "ID: {}, Name: {}, Age: {}, Email: {}",
        user.id, user.name, user.age, user.email
    )
}

// CLI output.
fn format_cli(pages: &[SearchPage]) -> String {
    let mut lines = Vec::new();
    for page in pages {
        lines.push(String::new());
        lines.push(format!(" [Search results - page {}]", page.page).bold().to_string());
        lines.extend(page.users.iter().map(format_user_line));
    }
    join_lines(&lines)
}

// JSON output.
fn format_json(pages: &[SearchPage]) -> String {
    let mut out = serde_json::to_string_pretty(pages).unwrap_or_default();
    out.push('\n');
    out
}

// CSV output.
fn format_csv(pages: &[SearchPage]) -> String {
    let mut lines = vec!["page,id,name,age,email".to_string()];
    for page in pages {
        for user in &page.users {
            lines.push(format!(
                "{},{},{},{},{}",
                page.page,
                user.id,
                escape_csv(&user.name),
                user.age,
                escape_csv(&user.email)
            ));
        }
    }
    join_lines(&lines)
}

// Markdown output.
fn format_md(pages: &[SearchPage]) -> String {
    let mut lines = Vec::new();
    for page in pages {
        lines.push(format!("## Page {} (keyword: `{}`)\n", page.page, page.keyword));
        if page.is_empty() {
            lines.push("_No results._\n".to_string());
            continue;
        }
        lines.push("| ID | Name | Age | Email |".to_string());
        lines.push("|---:|------|----:|-------|".to_string());
        for user in &page.users {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                user.id,
                escape_md(&user.name),
                user.age,
                escape_md(&user.email)
            ));
        }
        lines.push(String::new());
    }
    join_lines(&lines)
}

/// Join lines with a trailing newline.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Escape a string for CSV output.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Escape a pipe so it does not split a Markdown table cell.
fn escape_md(s: &str) -> String {
    s.replace('|', "\\|")
}
