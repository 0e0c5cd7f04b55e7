//! Profile loading.

use crate::backend::Backend;
use crate::backend::api::User;
use crate::backend::utils::route::Route;
use crate::frontend::services::session::{Access, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// Nothing to show yet: no backend is configured.
    Placeholder,
    Loaded(User),
    Redirect(Route),
}

pub async fn load_profile(session: &Session, backend: &Backend) -> ProfileOutcome {
    let token = match session.access() {
        Access::Granted { token } => token,
        Access::Denied => return ProfileOutcome::Redirect(Route::Login {}),
    };

    let Some(client) = backend.client() else {
        return ProfileOutcome::Placeholder;
    };

    match client.profile(&token).await {
        Ok(user) => ProfileOutcome::Loaded(user),
        Err(e) => {
            log::error!("Failed to fetch profile: {e}");
            ProfileOutcome::Redirect(Route::Login {})
        }
    }
}
