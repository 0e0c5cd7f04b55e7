//! Backend of the application: persisted credentials, configuration and the
//! optional HTTP collaborator.

pub mod api;
pub mod storage;
pub mod utils;

pub use api::Backend;
