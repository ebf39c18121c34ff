//! practice-nav CLI
//!
//! Normalizes a topic search and opens the matching practice page in a
//! Chrome/Chromium browser.

use anyhow::Context;
use clap::Parser;
use practice_nav::browser::{
    BrowserSession, ConnectionOptions, DEFAULT_BASE_URL, LaunchOptions, normalize_base_url, resolve_url,
};
use practice_nav::{NavigationCommand, PracticeEvent, plan_practice};
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "practice-nav")]
#[command(version)]
#[command(about = "Open the practice page for a topic search", long_about = None)]
struct Cli {
    /// Search text; multiple words are joined with spaces
    #[arg(required = true, value_name = "SEARCH_TEXT")]
    search_text: Vec<String>,

    /// Open the practice page in a new tab (same as ctrl+click)
    #[arg(long, short = 'n')]
    new_window: bool,

    /// Site origin practice routes are resolved against
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<String>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<String>,

    /// WebSocket endpoint URL of an already running browser
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Print where the search would go without starting a browser
    #[arg(long)]
    dry_run: bool,

    /// Keep the browser open until Enter is pressed
    #[arg(long)]
    keep_open: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let search_text = cli.search_text.join(" ");
    let event = PracticeEvent::new(cli.new_window);
    let base_url = normalize_base_url(&cli.base_url).context("Invalid --base-url")?;

    let Some(command) = plan_practice(&search_text, event) else {
        log::info!("Nothing to search for in {:?}", search_text);
        return Ok(());
    };

    if cli.dry_run {
        let url = resolve_url(&base_url, command.url())?;
        let target = match command {
            NavigationCommand::Redirect(_) => "current tab",
            NavigationCommand::OpenNew(_) => "new tab",
        };
        println!("{} ({})", url, target);
        return Ok(());
    }

    let session = match cli.ws_endpoint {
        Some(ref endpoint) => {
            log::info!("Connecting to browser at {}", endpoint);
            BrowserSession::connect(ConnectionOptions::new(endpoint.as_str()))
                .context("Failed to connect to browser")?
        }
        None => {
            let mut options = LaunchOptions::new().headless(!cli.headed);
            if let Some(ref path) = cli.executable_path {
                options = options.chrome_path(path);
            }
            if let Some(ref dir) = cli.user_data_dir {
                options = options.user_data_dir(dir);
            }
            log::info!("Launching {} browser", if options.headless { "headless" } else { "headed" });
            BrowserSession::launch(options).context("Failed to launch browser")?
        }
    }
    .with_base_url(&base_url)?;

    let result = session
        .execute_tool(
            "practice",
            serde_json::json!({ "search_text": search_text, "ctrl_key": event.ctrl_key }),
        )
        .with_context(|| format!("Failed to open {}", command.url()))?;
    log::debug!("practice tool result: {:?}", result);

    log::info!("Opened {}", session.current_url().unwrap_or_else(|_| command.url().to_string()));

    if cli.keep_open {
        eprintln!("Press Enter to close the browser");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }

    // Tabs of a connected browser stay open; see BrowserSession::close
    session.close()?;
    Ok(())
}
