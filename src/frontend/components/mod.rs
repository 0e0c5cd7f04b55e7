//! Layout components shared by every page.

pub mod guard;
pub mod navbar;
