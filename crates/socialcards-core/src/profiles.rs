//! Profile feeds: the built-in showcase table and JSON files.

use std::path::{Path, PathBuf};

use crate::error::{CardError, CardResult};
use crate::types::{Account, Profile, Rgb};

/// File name looked up in the user config directory
pub const PROFILES_FILE_NAME: &str = "profiles.json";

/// Default location of a user supplied profile feed:
/// `<config_dir>/socialcards/profiles.json`.
pub fn default_profiles_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("socialcards").join(PROFILES_FILE_NAME))
}

/// Load and validate a JSON array of profiles.
pub fn load_profiles(path: &Path) -> CardResult<Vec<Profile>> {
    let raw = std::fs::read_to_string(path)?;
    let profiles = parse_profiles(&raw)?;
    tracing::info!("Loaded {} profiles from {:?}", profiles.len(), path);
    Ok(profiles)
}

/// Parse a JSON array of profiles. An empty array is an error.
pub fn parse_profiles(json: &str) -> CardResult<Vec<Profile>> {
    let profiles: Vec<Profile> = serde_json::from_str(json)?;
    if profiles.is_empty() {
        return Err(CardError::EmptyProfileSet);
    }
    Ok(profiles)
}

/// The profiles shown when no feed is configured.
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile::from_entries(
            "GitHub",
            vec![(
                Account::new("ohaviii", "https://github.com/ohaviii")
                    .with_bio("Developer & Open Source Enthusiast 💻"),
                Rgb::new(147, 51, 234),
                Rgb::new(168, 85, 247),
            )],
        ),
        Profile::from_entries(
            "Instagram",
            vec![
                (
                    Account::new("oh.aviii", "https://www.instagram.com/oh.aviii")
                        .with_bio("Personal Life & Adventures 📸"),
                    Rgb::new(225, 48, 108),
                    Rgb::new(193, 53, 132),
                ),
                (
                    Account::new("av.eeiii", "https://www.instagram.com/av.eeiii")
                        .with_bio("Work & Creative Portfolio ✨"),
                    Rgb::new(245, 96, 64),
                    Rgb::new(226, 119, 95),
                ),
            ],
        ),
        Profile::from_entries(
            "YouTube",
            vec![
                (
                    Account::new("Lyrical Pills Hindi", "https://www.youtube.com/@LyricalPills")
                        .with_bio("Music & Lyrics | Creative Content 🎵"),
                    Rgb::new(255, 0, 0),
                    Rgb::new(200, 0, 0),
                ),
                (
                    Account::new("SNEH", "https://www.youtube.com/@Sneeehhhh")
                        .with_bio("Personal Channel & Vlogs 🎥"),
                    Rgb::new(230, 33, 23),
                    Rgb::new(180, 32, 23),
                ),
            ],
        ),
        Profile::from_entries(
            "LinkedIn",
            vec![(
                Account::new("Abhinav Kumar", "https://www.linkedin.com/in/avi-kr/")
                    .with_bio("Professional Network & Updates 💼"),
                Rgb::new(10, 102, 194),
                Rgb::new(40, 123, 222),
            )],
        ),
        Profile::from_entries(
            "Pinterest",
            vec![(
                Account::new("AVI", "https://in.pinterest.com/oh_avi/_profile/")
                    .with_bio("Visual Inspiration & Ideas 🎨"),
                Rgb::new(230, 0, 35),
                Rgb::new(200, 0, 35),
            )],
        ),
        Profile::from_entries(
            "Facebook",
            vec![(
                Account::new("Avi", "https://facebook.com/dummy-profile")
                    .with_bio("Connecting & Sharing 🌟"),
                Rgb::new(66, 103, 178),
                Rgb::new(88, 120, 188),
            )],
        ),
    ]
}
