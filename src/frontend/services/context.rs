//! Authentication context and hooks.

use crate::backend::Backend;
use crate::backend::storage::FileStore;
use crate::backend::utils::config::AppConfig;
use crate::frontend::services::session::Session;
use dioxus::prelude::*;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub session: Session,
    pub backend: Backend,
}

impl AuthState {
    /// Builds the file-backed session and the backend described by `config`.
    pub fn from_config(config: &AppConfig, app_dir: &Path) -> Self {
        let store = FileStore::new(config.storage_path(app_dir), &config.storage.token_key);
        log::debug!("Credentials stored in {}", store.path().display());

        Self {
            session: Session::new(Arc::new(store)),
            backend: Backend::from_config(&config.api),
        }
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Shared credential check for guards and views.
pub fn use_session() -> Session {
    use_auth().session
}
