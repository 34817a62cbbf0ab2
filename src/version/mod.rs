//! Version token handling
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Sources   │────▶│   Checker   │────▶│ UpdateResult│
//! │(local,proxy,│     │ (race, fall │     │ (formatted) │
//! │   direct)   │     │    back)    │     └─────────────┘
//! └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ HttpClient  │     │  Compare /  │
//! │  (reqwest)  │     │   Format    │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: update check flow and its result type
//! - [`client`]: HTTP capability trait and the reqwest implementation
//! - [`compare`]: numeric segment comparison of version tokens
//! - [`error`]: error types for fetching
//! - [`format`]: human readable rendering of version tokens
//! - [`source`]: where version tokens are read from

pub mod checker;
pub mod client;
pub mod compare;
pub mod error;
pub mod format;
pub mod source;

pub use checker::{UpdateChecker, UpdateResult};
pub use compare::{compare_versions, has_update};
pub use format::{UNKNOWN_VERSION, format_version};
