pub mod credentials;

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use chrono::Utc;
use tracing::debug;

use lobby_types::{User, UserId};

pub use credentials::CredentialScheme;

/// How fresh user ids are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    /// Monotonically increasing counter starting at 1.
    Sequential,
    /// Random uuid per user.
    Random,
}

#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    pub credentials: CredentialScheme,
    pub ids: IdScheme,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            credentials: CredentialScheme::Hashed,
            ids: IdScheme::Sequential,
        }
    }
}

struct Inner {
    users: HashMap<UserId, User>,
    // Insertion order; `all` and `find_by_email` iterate in this order.
    order: Vec<UserId>,
    next_id: u64,
}

/// In-memory user store. Insert/read only: records are never updated or
/// removed, and live until the process exits. Ids are never reused.
pub struct UserStore {
    config: StoreConfig,
    inner: Mutex<Inner>,
}

impl UserStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                users: HashMap::new(),
                order: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn credential_scheme(&self) -> CredentialScheme {
        self.config.credentials
    }

    fn with_inner<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Inner) -> T,
    {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| anyhow!("store lock poisoned: {e}"))?;
        Ok(f(&mut inner))
    }

    /// All users, in insertion order.
    pub fn all(&self) -> Result<Vec<User>> {
        self.with_inner(|inner| {
            inner
                .order
                .iter()
                .filter_map(|id| inner.users.get(id).cloned())
                .collect()
        })
    }

    pub fn find(&self, id: &UserId) -> Result<Option<User>> {
        self.with_inner(|inner| inner.users.get(id).cloned())
    }

    /// First user (in insertion order) whose email matches exactly.
    /// Linear scan; emails are not unique.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.with_inner(|inner| {
            inner
                .order
                .iter()
                .filter_map(|id| inner.users.get(id))
                .find(|user| user.email == email)
                .cloned()
        })
    }

    /// Create and store a user with a freshly assigned id. No email
    /// uniqueness check: registering the same email twice yields two
    /// records, and `find_by_email` keeps returning the first.
    pub fn register(&self, email: &str, password: &str) -> Result<User> {
        let stored = self.config.credentials.seal(password)?;
        let ids = self.config.ids;

        self.with_inner(|inner| {
            let id = match ids {
                IdScheme::Sequential => {
                    let id = UserId::serial(inner.next_id);
                    inner.next_id += 1;
                    id
                }
                IdScheme::Random => UserId::random(),
            };

            let user = User {
                id: id.clone(),
                email: email.to_owned(),
                password: stored,
                created_at: Utc::now(),
            };

            inner.users.insert(id.clone(), user.clone());
            inner.order.push(id);

            debug!(user_id = %user.id, "registered user");
            user
        })
    }

    /// Look up by email and check the password. Returns `None` for both an
    /// unknown email and a wrong password; callers cannot tell them apart.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let user = self.find_by_email(email)?;

        Ok(user.filter(|u| self.config.credentials.verify(password, &u.password)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashed_store() -> UserStore {
        UserStore::new(StoreConfig::default())
    }

    fn plaintext_store() -> UserStore {
        UserStore::new(StoreConfig {
            credentials: CredentialScheme::Plaintext,
            ids: IdScheme::Random,
        })
    }

    #[test]
    fn register_assigns_sequential_ids() {
        let store = hashed_store();
        let a = store.register("a@x.com", "pw1").unwrap();
        let b = store.register("b@x.com", "pw2").unwrap();

        assert_eq!(a.id.as_str(), "1");
        assert_eq!(b.id.as_str(), "2");
    }

    #[test]
    fn register_assigns_distinct_random_ids() {
        let store = plaintext_store();
        let a = store.register("a@x.com", "pw").unwrap();
        let b = store.register("a@x.com", "pw").unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn hashed_scheme_does_not_store_the_raw_password() {
        let store = hashed_store();
        let user = store.register("a@x.com", "secret").unwrap();

        assert_ne!(user.password, "secret");
        assert!(user.password.starts_with("$argon2"));
    }

    #[test]
    fn plaintext_scheme_stores_verbatim() {
        let store = plaintext_store();
        let user = store.register("a@x.com", "secret").unwrap();

        assert_eq!(user.password, "secret");
    }

    #[test]
    fn login_matches_registered_credentials() {
        let store = hashed_store();
        let registered = store.register("a@x.com", "pw1").unwrap();

        let found = store.login("a@x.com", "pw1").unwrap();
        assert_eq!(found.map(|u| u.id), Some(registered.id));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let store = hashed_store();
        store.register("a@x.com", "pw1").unwrap();

        assert!(store.login("a@x.com", "nope").unwrap().is_none());
    }

    #[test]
    fn login_rejects_unknown_email() {
        let store = hashed_store();

        assert!(store.login("ghost@x.com", "pw").unwrap().is_none());
    }

    #[test]
    fn plaintext_login_is_direct_equality() {
        let store = plaintext_store();
        store.register("a@x.com", "pw1").unwrap();

        assert!(store.login("a@x.com", "pw1").unwrap().is_some());
        assert!(store.login("a@x.com", "PW1").unwrap().is_none());
    }

    #[test]
    fn duplicate_email_returns_first_inserted() {
        let store = hashed_store();
        let first = store.register("a@x.com", "pw1").unwrap();
        let second = store.register("a@x.com", "pw2").unwrap();
        assert_ne!(first.id, second.id);

        let found = store.find_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn find_by_email_is_case_sensitive() {
        let store = hashed_store();
        store.register("a@x.com", "pw").unwrap();

        assert!(store.find_by_email("A@X.COM").unwrap().is_none());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = plaintext_store();
        store.register("first@x.com", "pw").unwrap();
        store.register("second@x.com", "pw").unwrap();
        store.register("third@x.com", "pw").unwrap();

        let emails: Vec<String> = store
            .all()
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, ["first@x.com", "second@x.com", "third@x.com"]);
    }

    #[test]
    fn find_by_unknown_id_is_none() {
        let store = hashed_store();
        store.register("a@x.com", "pw").unwrap();

        assert!(store.find(&UserId::serial(99)).unwrap().is_none());
    }
}
