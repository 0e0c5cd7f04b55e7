//! Frontend module for the `Frontdoor` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
