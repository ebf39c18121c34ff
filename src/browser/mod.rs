//! Browser session management
//!
//! A [`BrowserSession`] drives a Chrome/Chromium instance over CDP and acts
//! as the [`Navigator`](crate::navigation::Navigator) for practice
//! navigation: redirects reuse the active tab, new-context opens create a tab.

pub mod config;
pub mod session;
pub mod url;

pub use config::{ConnectionOptions, DEFAULT_BASE_URL, LaunchOptions};
pub use session::{BrowserSession, SessionOrigin};
pub use url::{normalize_base_url, parse_base_url, resolve_url};
