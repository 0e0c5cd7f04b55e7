//! Backend collaborator. Every call is optional: with no base URL configured
//! the application runs fully offline.

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{LoginRequest, RegisterRequest, Role, TokenResponse, User};

use crate::backend::utils::config::ApiConfig;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub enum Backend {
    #[default]
    Unconfigured,
    Http(ApiClient),
}

impl Backend {
    pub fn from_config(config: &ApiConfig) -> Self {
        let Some(base_url) = config.base_url.as_deref() else {
            return Self::Unconfigured;
        };

        match ApiClient::new(base_url, Duration::from_secs(config.timeout_secs)) {
            Ok(client) => {
                log::info!("Using backend at {}", client.base_url());
                Self::Http(client)
            }
            Err(e) => {
                log::error!("Failed to create API client for {base_url}: {e}");
                Self::Unconfigured
            }
        }
    }

    pub fn client(&self) -> Option<&ApiClient> {
        match self {
            Self::Http(client) => Some(client),
            Self::Unconfigured => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client().is_some()
    }
}
