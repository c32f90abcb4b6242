// src/credentials.rs
// Cookie bundle persistence in the system secret store.
//
// Layout under service `portswigger_academy`:
//   account "default_user" → the remembered username (plain text)
//   account <username>     → JSON object of cookie name → value

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::consts::{AUTH_COOKIE_PREFIX, DEFAULT_USER_KEY, REQUIRED_COOKIES, SERVICE_ID};
use crate::core::net;
use crate::error::{Result, TrackerError};

/// Cookie name → value, as copied out of a logged-in browser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieBundle(BTreeMap<String, String>);

impl CookieBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Cookie:` header value: `a=1; b=2`.
    pub fn to_header(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Required cookies that are absent. The auth cookie is matched by prefix.
    pub fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if !self.0.keys().any(|k| k.starts_with(AUTH_COOKIE_PREFIX)) {
            missing.push(format!("{AUTH_COOKIE_PREFIX}_UserVerificationId"));
        }
        for name in REQUIRED_COOKIES {
            if !self.0.contains_key(name) {
                missing.push(s!(name));
            }
        }
        missing
    }
}

/// Split one `name=value` line. Both sides are trimmed; the value may contain `=`.
pub fn parse_cookie_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((s!(name), s!(value.trim())))
}

/// Heuristic liveness check against the dashboard. See `core::net::probe`.
pub fn validate(bundle: &CookieBundle) -> bool {
    net::probe(bundle)
}

/// Backing secret store. `KeyringStore` in production; tests use an in-memory map.
pub trait SecretStore {
    fn get(&self, account: &str) -> Result<Option<String>>;
    fn set(&self, account: &str, secret: &str) -> Result<()>;
    /// Removing an absent entry is not an error.
    fn delete(&self, account: &str) -> Result<()>;
}

pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: &str) -> Self {
        Self { service: s!(service) }
    }

    fn entry(&self, account: &str) -> Result<keyring::Entry> {
        Ok(keyring::Entry::new(&self.service, account)?)
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(SERVICE_ID)
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, account: &str) -> Result<Option<String>> {
        match self.entry(account)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, account: &str, secret: &str) -> Result<()> {
        self.entry(account)?.set_password(secret)?;
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<()> {
        match self.entry(account)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Cookie bundle storage for one user.
pub struct CredentialStore<S: SecretStore> {
    secrets: S,
    username: String,
}

impl<S: SecretStore> CredentialStore<S> {
    /// Resolve the username: the remembered default if there is one, otherwise
    /// `prompt` is asked once and its answer remembered.
    pub fn open<F>(secrets: S, prompt: F) -> Result<Self>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        let remembered = secrets.get(DEFAULT_USER_KEY).unwrap_or_else(|e| {
            logw!("could not read remembered username: {e}");
            None
        });

        let username = match remembered.filter(|u| !u.trim().is_empty()) {
            Some(u) => u,
            None => {
                let answer = prompt()?.trim().to_string();
                if answer.is_empty() {
                    return Err(TrackerError::NoUsername);
                }
                if let Err(e) = secrets.set(DEFAULT_USER_KEY, &answer) {
                    loge!("could not remember username: {e}");
                }
                answer
            }
        };

        Ok(Self { secrets, username })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored bundle. Store errors and unreadable JSON are logged and read
    /// as "nothing stored".
    pub fn get(&self) -> Option<CookieBundle> {
        let raw = match self.secrets.get(&self.username) {
            Ok(raw) => raw?,
            Err(e) => {
                loge!("Error retrieving cookies: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                loge!("Stored cookies are not valid JSON: {e}");
                None
            }
        }
    }

    pub fn set(&self, bundle: &CookieBundle) -> Result<()> {
        let json = serde_json::to_string(bundle)?;
        self.secrets.set(&self.username, &json)?;
        logf!("stored {} cookies for {}", bundle.0.len(), self.username);
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        self.secrets.delete(&self.username)?;
        logf!("deleted cookies for {}", self.username);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;

    #[derive(Default)]
    struct MemoryStore {
        map: RefCell<HashMap<String, String>>,
        broken: bool,
    }

    impl SecretStore for MemoryStore {
        fn get(&self, account: &str) -> Result<Option<String>> {
            if self.broken {
                return Err(TrackerError::Io(io::Error::other("locked")));
            }
            Ok(self.map.borrow().get(account).cloned())
        }
        fn set(&self, account: &str, secret: &str) -> Result<()> {
            self.map.borrow_mut().insert(s!(account), s!(secret));
            Ok(())
        }
        fn delete(&self, account: &str) -> Result<()> {
            self.map.borrow_mut().remove(account);
            Ok(())
        }
    }

    fn full_bundle() -> CookieBundle {
        let mut b = CookieBundle::new();
        b.insert("Authenticated_UserVerificationId", "abc");
        b.insert("SessionId", "s1");
        b.insert("t", "tok");
        b
    }

    #[test]
    fn parse_cookie_line_variants() {
        assert_eq!(parse_cookie_line(" t = x "), Some((s!("t"), s!("x"))));
        assert_eq!(parse_cookie_line("SessionId=a=b"), Some((s!("SessionId"), s!("a=b"))));
        assert_eq!(parse_cookie_line("novalue"), None);
        assert_eq!(parse_cookie_line("=v"), None);
    }

    #[test]
    fn missing_required_matches_auth_prefix() {
        assert!(full_bundle().missing_required().is_empty());

        let mut b = CookieBundle::new();
        b.insert("AuthenticatedSomethingElse", "1");
        assert_eq!(b.missing_required(), vec![s!("SessionId"), s!("t")]);

        let mut b = CookieBundle::new();
        b.insert("SessionId", "1");
        b.insert("t", "2");
        assert_eq!(b.missing_required(), vec![s!("Authenticated_UserVerificationId")]);
    }

    #[test]
    fn header_joins_pairs() {
        assert_eq!(full_bundle().to_header(), "Authenticated_UserVerificationId=abc; SessionId=s1; t=tok");
    }

    #[test]
    fn remembered_username_skips_prompt() {
        let store = MemoryStore::default();
        store.set(DEFAULT_USER_KEY, "me@example.com").unwrap();
        let creds = CredentialStore::open(store, || panic!("must not prompt")).unwrap();
        assert_eq!(creds.username(), "me@example.com");
    }

    #[test]
    fn prompt_answer_is_remembered() {
        let creds = CredentialStore::open(MemoryStore::default(), || Ok(s!(" me@example.com\n"))).unwrap();
        assert_eq!(creds.username(), "me@example.com");
        assert_eq!(
            creds.secrets.get(DEFAULT_USER_KEY).unwrap().as_deref(),
            Some("me@example.com")
        );
    }

    #[test]
    fn empty_prompt_answer_is_rejected() {
        let err = CredentialStore::open(MemoryStore::default(), || Ok(s!("  "))).err().unwrap();
        assert!(matches!(err, TrackerError::NoUsername));
    }

    #[test]
    fn set_get_delete_roundtrip() {
        let creds = CredentialStore::open(MemoryStore::default(), || Ok(s!("u"))).unwrap();
        assert_eq!(creds.get(), None);

        creds.set(&full_bundle()).unwrap();
        assert_eq!(creds.get(), Some(full_bundle()));
        let raw = creds.secrets.get("u").unwrap().unwrap();
        assert!(raw.starts_with('{') && raw.contains("\"SessionId\":\"s1\""));

        creds.delete().unwrap();
        assert_eq!(creds.get(), None);
    }

    #[test]
    fn unreadable_store_means_no_credentials() {
        let store = MemoryStore { broken: true, ..Default::default() };
        let creds = CredentialStore::open(store, || Ok(s!("u"))).unwrap();
        assert_eq!(creds.get(), None);
    }

    #[test]
    fn garbage_secret_means_no_credentials() {
        let creds = CredentialStore::open(MemoryStore::default(), || Ok(s!("u"))).unwrap();
        creds.secrets.set("u", "not json").unwrap();
        assert_eq!(creds.get(), None);
    }
}
