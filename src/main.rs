use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use forum_tui::api::ApiClient;
use forum_tui::app::{App, AppEvent};
use forum_tui::config::Config;
use forum_tui::feed::{FeedModel, FeedSnapshot};
use forum_tui::theme::{StyleMap, ThemeVariant};
use forum_tui::ui;

/// Get the config directory path (~/.config/forum-tui/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("forum-tui"))
}

/// Resolve the log destination from the `FORUM_TUI_LOG` variable. The
/// terminal owns stdout and stderr while the TUI runs, so logs only go
/// somewhere when a file is named explicitly; unset or empty means no
/// logging at all.
fn log_file(var: Option<OsString>) -> Option<PathBuf> {
    var.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn open_log_file(path: &Path) -> Result<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn init_tracing() -> Result<()> {
    let Some(path) = log_file(std::env::var_os("FORUM_TUI_LOG")) else {
        return Ok(());
    };
    let file = open_log_file(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "forum-tui", about = "Browse a forum feed from the terminal.")]
struct Args {
    /// Base URL of the forum service (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Theme variant: "dark" or "light" (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let args = Args::parse();

    let config_path = get_config_dir()?.join("config.toml");
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    let server_url = args.server.unwrap_or(config.server_url);
    let theme_name = args.theme.unwrap_or(config.theme);
    let variant = ThemeVariant::from_str_name(&theme_name).unwrap_or_else(|| {
        tracing::warn!(theme = %theme_name, "Unknown theme name, falling back to dark");
        ThemeVariant::Dark
    });
    let styles = StyleMap::from_palette(&variant.palette());

    let client =
        ApiClient::new(&server_url).with_context(|| format!("Invalid server URL: {server_url}"))?;

    // One fetch per page load; a failure leaves the feed empty but the UI
    // stays interactive.
    let snapshot = match client.fetch_feed().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(server = %server_url, error = %e, "Failed to load feed, starting empty");
            FeedSnapshot::default()
        }
    };

    let mut app = App::new(client, FeedModel::new(snapshot), styles);
    app.select_all_posts();

    // Create event channel for background reaction submits
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unset_log_var_disables_logging() {
        assert_eq!(log_file(None), None);
    }

    #[test]
    fn test_empty_log_var_disables_logging() {
        assert_eq!(log_file(Some(OsString::new())), None);
    }

    #[test]
    fn test_log_var_names_the_file() {
        let path = log_file(Some(OsString::from("/tmp/forum-tui.log")));
        assert_eq!(path, Some(PathBuf::from("/tmp/forum-tui.log")));
    }

    #[test]
    fn test_open_log_file_creates_and_appends() {
        let dir = std::env::temp_dir().join("forum_tui_log_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("forum-tui.log");
        std::fs::remove_file(&path).ok();

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");

        std::fs::remove_dir_all(&dir).ok();
    }
}
