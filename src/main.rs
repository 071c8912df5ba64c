#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use socialcards_core::{builtin_profiles, default_profiles_path, load_profiles, AnimationTimings, Profile};
use tracing_subscriber::EnvFilter;

use crate::context::ShowcaseSettings;

/// Global showcase settings, set from command line
static SETTINGS: OnceLock<ShowcaseSettings> = OnceLock::new();

/// Get the showcase settings (set from command line or default)
pub fn get_settings() -> ShowcaseSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| ShowcaseSettings {
        profiles: builtin_profiles(),
        timings: AnimationTimings::default(),
        muted: false,
    })
}

/// Social Cards - animated social profile showcase
#[derive(Parser, Debug)]
#[command(name = "socialcards-desktop")]
#[command(about = "Animated social profile cards")]
struct Args {
    /// JSON file with the profiles to show
    #[arg(short, long)]
    profiles: Option<PathBuf>,

    /// Delay between card entrances, in milliseconds
    #[arg(long, default_value_t = 200)]
    stagger_ms: u64,

    /// Disable the hover tone
    #[arg(short, long)]
    mute: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Window width
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

/// Resolve the profile feed: explicit path, then the user config file,
/// then the built-in table.
fn resolve_profiles(explicit: Option<PathBuf>) -> anyhow::Result<Vec<Profile>> {
    if let Some(path) = explicit {
        return load_profiles(&path)
            .with_context(|| format!("failed to load profiles from {}", path.display()));
    }

    match default_profiles_path() {
        Some(path) if path.exists() => load_profiles(&path)
            .with_context(|| format!("failed to load profiles from {}", path.display())),
        _ => Ok(builtin_profiles()),
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let profiles = match resolve_profiles(args.profiles.clone()) {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("{:#}; falling back to built-in profiles", e);
            builtin_profiles()
        }
    };

    tracing::info!(
        "Starting showcase with {} profiles (stagger {}ms, muted: {})",
        profiles.len(),
        args.stagger_ms,
        args.mute
    );

    let _ = SETTINGS.set(ShowcaseSettings {
        profiles,
        timings: AnimationTimings::default().with_stagger(Duration::from_millis(args.stagger_ms)),
        muted: args.mute,
    });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Social Cards")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_profiles_path_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "platform": "GitHub",
                "accounts": [{{ "username": "octo", "link": "https://github.com/octo" }}],
                "accentColors": ["1, 2, 3"],
                "secondaryColors": ["4, 5, 6"]
            }}]"#
        )
        .unwrap();

        let profiles = resolve_profiles(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].platform(), "GitHub");
    }

    #[test]
    fn broken_explicit_path_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = resolve_profiles(Some(missing)).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to load profiles"));
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["socialcards-desktop"]);
        assert_eq!(args.stagger_ms, 200);
        assert!(!args.mute);
        assert!(args.profiles.is_none());
    }
}
