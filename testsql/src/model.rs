//! User records and the seed data set.

use serde::Serialize;

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Auto-assigned primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Email address, unique across all users.
    pub email: String,
}

/// A user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Email address.
    pub email: String,
}

impl NewUser {
    /// Create a new unsaved user.
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

/// Seed rows as `(name, age, email)`, in insertion order.
pub const SEED_USERS: &[(&str, i64, &str)] = &[
    ("Alica", 30, "alice@example.com"),
    ("Bob", 25, "bob@example.com"),
    ("Charlie", 35, "charlie@example.com"),
    ("Dave", 28, "dave@example.com"),
    ("Eve", 40, "eve@example.com"),
    ("Frank", 29, "frank@example.com"),
    ("Grace", 32, "grace@example.com"),
];

/// The fixed seed set loaded by a default run.
#[must_use]
pub fn seed_users() -> Vec<NewUser> {
    SEED_USERS
        .iter()
        .map(|&(name, age, email)| NewUser::new(name, age, email))
        .collect()
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    /// Keyword the page was searched with.
    pub keyword: String,
    /// 1-based page number.
    pub page: u32,
    /// Maximum rows per page.
    pub page_size: u32,
    /// Matching users, oldest first.
    pub users: Vec<User>,
}

impl SearchPage {
    /// Whether the page holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users() {
        let users = seed_users();
        assert_eq!(users.len(), 7);
        assert_eq!(users[0], NewUser::new("Alica", 30, "alice@example.com"));
        assert_eq!(users[6].name, "Grace");

        let mut emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_search_page_serializes() {
        let page = SearchPage {
            keyword: "a".to_string(),
            page: 1,
            page_size: 3,
            users: vec![User {
                id: 5,
                name: "Eve".to_string(),
                age: 40,
                email: "eve@example.com".to_string(),
            }],
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["page"], 1);
        assert_eq!(value["users"][0]["name"], "Eve");
        assert_eq!(value["users"][0]["age"], 40);
        assert!(!page.is_empty());
    }
}
