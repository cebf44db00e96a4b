//! Terminal dashboard for managing an nginx installation.
//!
//! The [`layout`] and [`viewport`] modules hold the geometry every frame is
//! built from; [`backend`] talks to nginx; [`tui`] ties them together.

pub mod backend;
pub mod config;
pub mod error;
pub mod layout;
pub mod tui;
pub mod viewport;
