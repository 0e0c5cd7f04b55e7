//! Utility modules for the application backend.
//!
//! This module contains configuration, path management and asset loading,
//! plus the routing table.

/// Application configuration.
pub mod config;
/// CSS loading and caching utilities.
pub mod css_loader;
/// Path utilities for the application directory.
pub mod paths;
/// Application routing system.
pub mod route;
