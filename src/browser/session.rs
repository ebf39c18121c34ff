use crate::{browser::config::{ConnectionOptions, DEFAULT_BASE_URL, LaunchOptions},
            browser::url::{normalize_base_url, resolve_url},
            error::{BrowserError, Result},
            navigation::{NavigationCommand, Navigator, PracticeEvent, practice},
            tools::{ToolContext, ToolRegistry, ToolResult}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// How a session got hold of its browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Browser process started by this session
    Launched,
    /// Attached to a browser the user already runs
    Connected,
}

impl SessionOrigin {
    /// Whether closing the session may close the browser's tabs
    pub fn owns_tabs(self) -> bool {
        matches!(self, SessionOrigin::Launched)
    }
}

/// Browser session that manages a Chrome/Chromium instance
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    origin: SessionOrigin,

    /// Origin that site-relative practice routes are resolved against
    base_url: String,

    /// Registered event handlers
    tool_registry: ToolRegistry,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        log::debug!("Launching browser with {:?}", options);
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Hide the "controlled by automated software" infobar in headed mode
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));

        // Keep the browser alive while a user is reading the practice page (default is 30 seconds)
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        // Headless unless the user wants to watch the page load
        launch_opts.headless = options.headless;

        // Window size also applies to the headless viewport
        launch_opts.window_size = Some((options.window_width, options.window_height));

        // Fall back to headless_chrome's auto-detection when no binary is given
        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        // Reuse a profile so practice-site logins survive between runs
        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        // Containers without user namespaces need the sandbox off
        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        // The practice redirect needs a tab to land in
        browser.new_tab().map_err(|e| BrowserError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self::from_browser(browser, SessionOrigin::Launched))
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        log::debug!("Connecting to {} (timeout {}ms)", options.ws_url, options.timeout);
        let browser = Browser::connect_with_timeout(options.ws_url, Duration::from_millis(options.timeout))
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Self::from_browser(browser, SessionOrigin::Connected))
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    fn from_browser(browser: Browser, origin: SessionOrigin) -> Self {
        Self {
            browser,
            origin,
            base_url: DEFAULT_BASE_URL.to_string(),
            tool_registry: ToolRegistry::with_defaults(),
        }
    }

    /// Set the origin practice routes are resolved against
    ///
    /// Fails for anything but an http(s) URL with a host.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the active tab
    pub fn tab(&self) -> Result<Arc<Tab>> {
        self.get_active_tab()
    }

    /// Get all tabs
    pub fn get_tabs(&self) -> Result<Vec<Arc<Tab>>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| BrowserError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        Ok(tabs)
    }

    /// Get the currently active tab by checking the document visibility and focus state
    ///
    /// Falls back to the first tab when no tab reports itself as visible,
    /// which is common for a freshly launched headless browser.
    pub fn get_active_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self.get_tabs()?;

        for check in ["document.visibilityState === 'visible' && document.hasFocus()", "document.visibilityState === 'visible'"] {
            for tab in &tabs {
                match tab.evaluate(check, false) {
                    Ok(remote_object) => {
                        if remote_object.value.and_then(|v| v.as_bool()).unwrap_or(false) {
                            return Ok(tab.clone());
                        }
                    }
                    Err(e) => {
                        log::debug!("Failed to check tab status: {}", e);
                    }
                }
            }
        }

        tabs.first()
            .cloned()
            .ok_or_else(|| BrowserError::TabOperationFailed("No active tab found".to_string()))
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// URL currently loaded in the active tab
    pub fn current_url(&self) -> Result<String> {
        Ok(self.tab()?.get_url())
    }

    /// Navigate the active tab to a URL and wait for the load to finish
    pub fn navigate(&self, url: &str) -> Result<()> {
        let tab = self.tab()?;
        tab.navigate_to(url)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        tab.wait_until_navigated()
            .map_err(|e| BrowserError::NavigationFailed(format!("Navigation to {} did not complete: {}", url, e)))?;

        Ok(())
    }

    /// Open a URL in a new tab and bring that tab to front
    pub fn open_in_new_tab(&self, url: &str) -> Result<Arc<Tab>> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| BrowserError::TabOperationFailed(format!("Failed to create tab: {}", e)))?;

        tab.navigate_to(url)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        tab.wait_until_navigated()
            .map_err(|e| BrowserError::NavigationFailed(format!("Navigation to {} did not complete: {}", url, e)))?;

        tab.activate()
            .map_err(|e| BrowserError::TabOperationFailed(format!("Failed to activate tab: {}", e)))?;

        Ok(tab)
    }

    /// Run the practice handler for the given search text against this browser
    pub fn practice(&self, search_text: &str, event: PracticeEvent) -> Result<Option<NavigationCommand>> {
        practice(search_text, event, self)
    }

    /// Execute a tool by name
    pub fn execute_tool(&self, name: &str, params: serde_json::Value) -> Result<ToolResult> {
        let mut context = ToolContext::new(self);
        self.tool_registry.execute(name, params, &mut context)
    }

    /// Close all tabs of a launched browser; the process exits when the session is dropped
    ///
    /// A connected browser belongs to the user, so its tabs are left open and
    /// only the DevTools connection goes away on drop.
    pub fn close(&self) -> Result<()> {
        if !self.origin.owns_tabs() {
            log::debug!("Leaving tabs of connected browser open");
            return Ok(());
        }

        let tabs = self.get_tabs()?;
        for tab in tabs {
            let _ = tab.close(false);
        }
        Ok(())
    }
}

impl Navigator for BrowserSession {
    fn redirect(&self, url: &str) -> Result<()> {
        let resolved = resolve_url(&self.base_url, url)?;
        log::debug!("Redirecting active tab to {}", resolved);
        self.navigate(&resolved)
    }

    fn open(&self, url: &str) -> Result<()> {
        let resolved = resolve_url(&self.base_url, url)?;
        log::debug!("Opening {} in a new tab", resolved);
        self.open_in_new_tab(&resolved)?;
        Ok(())
    }
}
