//! Credential record

/// A single username/password pair held in the store.
///
/// Both fields are stored verbatim: no normalisation, hashing or length limits.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Overwrite the password in place
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Exact, case-sensitive username match
    pub fn matches_username(&self, username: &str) -> bool {
        self.username == username
    }

    /// Exact match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

// Passwords never reach the logs through `{:?}`.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let credential = Credential::new("alice", "pw1");

        assert_eq!(credential.username(), "alice");
        assert_eq!(credential.password(), "pw1");
    }

    #[test]
    fn test_set_password() {
        let mut credential = Credential::new("alice", "pw1");

        credential.set_password("pw2");
        assert_eq!(credential.password(), "pw2");
        assert_eq!(credential.username(), "alice");
    }

    #[test]
    fn test_username_match_is_case_sensitive() {
        let credential = Credential::new("Alice", "pw1");

        assert!(credential.matches_username("Alice"));
        assert!(!credential.matches_username("alice"));
        assert!(!credential.matches_username("Alice "));
    }

    #[test]
    fn test_matches_requires_both_fields() {
        let credential = Credential::new("alice", "pw1");

        assert!(credential.matches("alice", "pw1"));
        assert!(!credential.matches("alice", "wrong"));
        assert!(!credential.matches("bob", "pw1"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("alice", "hunter2");
        let debug = format!("{:?}", credential);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
