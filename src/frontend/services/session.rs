//! The one place that decides whether the user counts as signed in.
//!
//! A stored, non-empty token means "authenticated". Nothing about the token is
//! checked locally: no expiry, no signature, no server round trip.

use crate::backend::storage::CredentialStore;
use crate::backend::utils::route::Route;
use crate::utils::Result;
use std::sync::Arc;

/// Outcome of the credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted { token: String },
    Denied,
}

impl Access {
    /// Where to send the user instead, if anywhere.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Access::Granted { .. } => None,
            Access::Denied => Some(Route::Login {}),
        }
    }
}

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Reads the stored token. Storage failures count as "no token".
    pub fn token(&self) -> Option<String> {
        match self.store.get() {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(e) => {
                log::warn!("Failed to read stored credentials: {e}");
                None
            }
        }
    }

    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn access(&self) -> Access {
        match self.token() {
            Some(token) => Access::Granted { token },
            None => Access::Denied,
        }
    }

    /// Persists a token handed out by the backend.
    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.store.set(token)?;
        log::info!("Signed in");
        Ok(())
    }

    /// Forgets the stored token and returns the route to show next.
    pub fn logout(&self) -> Route {
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear stored credentials: {e}");
        }
        log::info!("Signed out");
        Route::Login {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;
    use crate::simple_error;

    struct BrokenStore;

    impl CredentialStore for BrokenStore {
        fn get(&self) -> Result<Option<String>> {
            Err(simple_error!("disk unplugged"))
        }

        fn set(&self, _token: &str) -> Result<()> {
            Err(simple_error!("disk unplugged"))
        }

        fn clear(&self) -> Result<()> {
            Err(simple_error!("disk unplugged"))
        }
    }

    fn session_with(store: MemoryStore) -> (Session, Arc<MemoryStore>) {
        let store = Arc::new(store);
        (Session::new(store.clone()), store)
    }

    #[test]
    fn no_token_is_denied_and_redirects_to_login() {
        let (session, _) = session_with(MemoryStore::default());

        let access = session.access();

        assert_eq!(access, Access::Denied);
        assert_eq!(access.redirect(), Some(Route::Login {}));
    }

    #[test]
    fn stored_token_is_granted_without_redirect() {
        let (session, _) = session_with(MemoryStore::default().with_token("abc123"));

        let access = session.access();

        assert_eq!(
            access,
            Access::Granted {
                token: "abc123".to_string()
            }
        );
        assert_eq!(access.redirect(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let (session, _) = session_with(MemoryStore::default().with_token(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_clears_token_and_returns_login() {
        let (session, store) = session_with(MemoryStore::default().with_token("abc123"));

        let next = session.logout();

        assert_eq!(next, Route::Login {});
        assert_eq!(store.get().unwrap(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_without_token_still_returns_login() {
        let (session, _) = session_with(MemoryStore::default());
        assert_eq!(session.logout(), Route::Login {});
    }

    #[test]
    fn storage_failures_deny_access_and_never_block_logout() {
        let session = Session::new(Arc::new(BrokenStore));

        assert_eq!(session.access(), Access::Denied);
        assert!(session.sign_in("abc123").is_err());
        assert_eq!(session.logout(), Route::Login {});
    }

    #[test]
    fn sign_in_makes_the_session_authenticated() {
        let (session, _) = session_with(MemoryStore::default());

        session.sign_in("abc123").unwrap();

        assert_eq!(session.token().as_deref(), Some("abc123"));
    }
}
