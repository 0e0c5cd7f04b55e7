//! Sign-in and registration against the backend.

use crate::backend::Backend;
use crate::backend::api::{ApiClient, LoginRequest, RegisterRequest};
use crate::backend::utils::route::Route;
use crate::frontend::services::session::Session;
use crate::simple_error;
use crate::utils::Result;

fn require_client(backend: &Backend) -> Result<&ApiClient> {
    backend
        .client()
        .ok_or_else(|| simple_error!("Sign-in is unavailable: no backend is configured"))
}

/// Logs in, stores the returned token and returns the route to show next.
pub async fn login(session: &Session, backend: &Backend, request: LoginRequest) -> Result<Route> {
    let client = require_client(backend)?;
    let response = client.login(&request).await?;
    session.sign_in(&response.token)?;
    Ok(Route::Profile {})
}

/// Registers, stores the returned token and returns the route to show next.
pub async fn register(
    session: &Session,
    backend: &Backend,
    request: RegisterRequest,
) -> Result<Route> {
    let client = require_client(backend)?;
    let response = client.register(&request).await?;
    log::info!("Registered {}", request.email);
    session.sign_in(&response.token)?;
    Ok(Route::Profile {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;
    use std::sync::Arc;
    use std::time::Duration;

    fn empty_session() -> Session {
        Session::new(Arc::new(MemoryStore::default()))
    }

    #[tokio::test]
    async fn login_without_backend_is_refused() {
        let session = empty_session();

        let err = login(&session, &Backend::Unconfigured, LoginRequest::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no backend is configured"));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn failed_register_stores_nothing() {
        let session = empty_session();
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        let result = register(&session, &Backend::Http(client), RegisterRequest::default()).await;

        assert!(result.is_err());
        assert!(!session.is_authenticated());
    }
}
