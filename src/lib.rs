//! Update notice for a site footer
//!
//! Reads the locally deployed version marker, looks up the latest published
//! marker (through a proxy mirror first, then the direct source), compares the
//! two and renders the outcome as a small footer paragraph.
//!
//! # Modules
//!
//! - [`version`]: formatting, comparison and fetching of version tokens
//! - [`render`]: footer presentation through an injected render target
//! - [`i18n`]: user-facing strings per locale
//! - [`config`]: constants, configuration file and paths
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod i18n;
pub mod logging;
pub mod render;
pub mod version;
