//! Practice navigation handler
//!
//! The handler reads the search text at event time, normalizes it, and
//! either redirects the current browsing context or opens a new one,
//! depending on whether the control key was held.

use crate::error::Result;
use crate::normalize::normalize_search_text;
use serde::{Deserialize, Serialize};

/// Route prefix every practice page lives under
pub const PRACTICE_ROUTE: &str = "/practice/";

/// The UI interaction that triggered navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeEvent {
    /// Control key held while triggering (open in a new context)
    pub ctrl_key: bool,
}

impl PracticeEvent {
    pub fn new(ctrl_key: bool) -> Self {
        Self { ctrl_key }
    }

    /// Plain click
    pub fn click() -> Self {
        Self::new(false)
    }

    /// Click with the control key held
    pub fn ctrl_click() -> Self {
        Self::new(true)
    }
}

/// Which browsing context a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Current,
    NewContext,
}

/// A navigation to perform, computed before anything is dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Replace the current context's location
    Redirect(String),
    /// Open the location in a new context, leaving the current one alone
    OpenNew(String),
}

impl NavigationCommand {
    pub fn url(&self) -> &str {
        match self {
            NavigationCommand::Redirect(url) | NavigationCommand::OpenNew(url) => url,
        }
    }

    pub fn target(&self) -> NavigationTarget {
        match self {
            NavigationCommand::Redirect(_) => NavigationTarget::Current,
            NavigationCommand::OpenNew(_) => NavigationTarget::NewContext,
        }
    }

    /// Execute the command against a navigator
    pub fn dispatch(&self, navigator: &dyn Navigator) -> Result<()> {
        match self {
            NavigationCommand::Redirect(url) => navigator.redirect(url),
            NavigationCommand::OpenNew(url) => navigator.open(url),
        }
    }
}

/// Something that can move a browsing context to a location
///
/// URLs handed to a navigator are site-relative (`/practice/...`); resolving
/// them against an origin is the navigator's job.
pub trait Navigator {
    /// Navigate the current browsing context to `url`
    fn redirect(&self, url: &str) -> Result<()>;

    /// Open `url` in a new browsing context
    fn open(&self, url: &str) -> Result<()>;
}

/// Build the practice URL for already-normalized text
pub fn practice_url(normalized: &str) -> String {
    format!("{}{}", PRACTICE_ROUTE, normalized)
}

/// Decide what navigation, if any, the event should cause
///
/// Returns `None` when the search text normalizes to an empty string.
pub fn plan_practice(search_text: &str, event: PracticeEvent) -> Option<NavigationCommand> {
    let normalized = normalize_search_text(search_text);
    if normalized.is_empty() {
        return None;
    }

    let url = practice_url(&normalized);
    if event.ctrl_key {
        Some(NavigationCommand::OpenNew(url))
    } else {
        Some(NavigationCommand::Redirect(url))
    }
}

/// Handle a practice event: plan the navigation and dispatch it
///
/// Empty input is a silent no-op and yields `Ok(None)`. Otherwise the
/// command that was dispatched is returned.
pub fn practice(
    search_text: &str,
    event: PracticeEvent,
    navigator: &dyn Navigator,
) -> Result<Option<NavigationCommand>> {
    let Some(command) = plan_practice(search_text, event) else {
        log::debug!("Search text {:?} normalized to nothing, not navigating", search_text);
        return Ok(None);
    };

    log::debug!("Practice navigation: {:?}", command);
    command.dispatch(navigator)?;

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(NavigationTarget, String)>>,
    }

    impl Navigator for Recorder {
        fn redirect(&self, url: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((NavigationTarget::Current, url.to_string()));
            Ok(())
        }

        fn open(&self, url: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((NavigationTarget::NewContext, url.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_practice_url() {
        assert_eq!(practice_url("Some_Topic"), "/practice/Some_Topic");
    }

    #[test]
    fn test_plan_redirect_without_modifier() {
        let command = plan_practice("Some Topic", PracticeEvent::click()).unwrap();
        assert_eq!(
            command,
            NavigationCommand::Redirect("/practice/Some_Topic".to_string())
        );
        assert_eq!(command.target(), NavigationTarget::Current);
    }

    #[test]
    fn test_plan_open_with_modifier() {
        let command = plan_practice("Some_Topic", PracticeEvent::ctrl_click()).unwrap();
        assert_eq!(
            command,
            NavigationCommand::OpenNew("/practice/Some_Topic".to_string())
        );
        assert_eq!(command.url(), "/practice/Some_Topic");
        assert_eq!(command.target(), NavigationTarget::NewContext);
    }

    #[test]
    fn test_plan_empty_is_none() {
        assert!(plan_practice("   ", PracticeEvent::click()).is_none());
        assert!(plan_practice("wiki/", PracticeEvent::ctrl_click()).is_none());
    }

    #[test]
    fn test_practice_dispatches_redirect() {
        let recorder = Recorder::default();
        let command = practice("Some_Topic", PracticeEvent::click(), &recorder).unwrap();

        assert!(command.is_some());
        assert_eq!(
            recorder.calls.borrow().as_slice(),
            &[(NavigationTarget::Current, "/practice/Some_Topic".to_string())]
        );
    }

    #[test]
    fn test_practice_dispatches_open() {
        let recorder = Recorder::default();
        practice(
            "http://example.com/Some_Topic",
            PracticeEvent::ctrl_click(),
            &recorder,
        )
        .unwrap();

        assert_eq!(
            recorder.calls.borrow().as_slice(),
            &[(NavigationTarget::NewContext, "/practice/Some_Topic".to_string())]
        );
    }

    #[test]
    fn test_practice_whitespace_is_silent_noop() {
        let recorder = Recorder::default();
        let command = practice(" \t ", PracticeEvent::ctrl_click(), &recorder).unwrap();

        assert!(command.is_none());
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_event_deserialize_default() {
        let event: PracticeEvent = serde_json::from_value(serde_json::json!({ "ctrl_key": true })).unwrap();
        assert!(event.ctrl_key);
        assert!(!PracticeEvent::default().ctrl_key);
    }
}
