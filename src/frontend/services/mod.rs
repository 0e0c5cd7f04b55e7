//! Frontend services: the credential check, backend calls and the context
//! that hands them to components.

pub mod account;
pub mod context;
pub mod profile;
pub mod session;
