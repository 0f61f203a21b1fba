//! Test helpers for generating unique test data
//!
//! Fixture ids and logins are ULID-suffixed so tests sharing a database never
//! collide on primary keys or the unique `users.login` column.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("game");
/// let id2 = unique_str("game");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique login with the given prefix
///
/// Logins are lowercased so they stay stable under case-insensitive lookups.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_login;
///
/// let login = unique_login("alice");
/// assert!(login.starts_with("alice_"));
/// assert_eq!(login, login.to_lowercase());
/// ```
pub fn unique_login(prefix: &str) -> String {
    format!("{}_{}", prefix, Ulid::new()).to_lowercase()
}
