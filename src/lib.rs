//! # practice-nav
//!
//! Turn a topic search into a practice page visit.
//!
//! The user types a topic (or pastes a link to one), the text is normalized
//! into a single path segment, and the browser is sent to
//! `/practice/<segment>`. Holding the control key opens the page in a new
//! tab instead of replacing the current one.
//!
//! ## Normalization
//!
//! ```rust
//! use practice_nav::normalize_search_text;
//!
//! assert_eq!(normalize_search_text("  Abraham Lincoln "), "Abraham_Lincoln");
//! assert_eq!(normalize_search_text("https://en.wikipedia.org/wiki/Abraham_Lincoln"), "Abraham_Lincoln");
//! assert_eq!(normalize_search_text("   "), "");
//! ```
//!
//! ## Driving a browser
//!
//! ```rust,no_run
//! use practice_nav::{BrowserSession, LaunchOptions, PracticeEvent};
//!
//! # fn main() -> practice_nav::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::new().headless(false))?
//!     .with_base_url("http://localhost:8000")?;
//!
//! // Plain click: the active tab goes to http://localhost:8000/practice/Abraham_Lincoln
//! session.practice("Abraham Lincoln", PracticeEvent::click())?;
//!
//! // Ctrl+click: same page in a new tab
//! session.practice("Abraham Lincoln", PracticeEvent::ctrl_click())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom navigators
//!
//! Anything implementing [`Navigator`] can receive practice navigation,
//! which keeps the handler independent of the browser backend:
//!
//! ```rust
//! use practice_nav::{Navigator, PracticeEvent, practice};
//!
//! struct Print;
//!
//! impl Navigator for Print {
//!     fn redirect(&self, url: &str) -> practice_nav::Result<()> {
//!         println!("go to {url}");
//!         Ok(())
//!     }
//!
//!     fn open(&self, url: &str) -> practice_nav::Result<()> {
//!         println!("open {url}");
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> practice_nav::Result<()> {
//! practice("Some Topic", PracticeEvent::click(), &Print)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`normalize`]: search text normalization
//! - [`navigation`]: the practice handler, navigation commands and the [`Navigator`] trait
//! - [`browser`]: Chrome/Chromium session that implements [`Navigator`]
//! - [`tools`]: named handlers invoked with JSON parameters
//! - [`error`]: error types and result aliases

pub mod browser;
pub mod error;
pub mod navigation;
pub mod normalize;
pub mod tools;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, SessionOrigin};
pub use error::{BrowserError, Result};
pub use navigation::{
    NavigationCommand, NavigationTarget, Navigator, PRACTICE_ROUTE, PracticeEvent, plan_practice, practice,
    practice_url,
};
pub use normalize::normalize_search_text;
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
