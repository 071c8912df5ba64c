//! Core types for Social Cards

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// An RGB color triple.
///
/// Profile feeds write colors as comma separated channels (`"147, 51, 234"`),
/// which is also how they are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` notation
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` notation with the given alpha
    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CardError::InvalidColor(s.to_string()))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(CardError::InvalidColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// One identity under a platform profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Handle shown as `@username`
    pub username: String,
    /// Profile URL
    pub link: String,
    /// Optional short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Account {
    pub fn new(username: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            link: link.into(),
            bio: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Username with the `@` prefix used on cards and menus
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

/// A platform profile with one or more accounts.
///
/// Accounts, accent colors and secondary colors are parallel arrays; the
/// colors at index `i` theme the card while account `i` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile", rename_all = "camelCase")]
pub struct Profile {
    platform: String,
    accounts: Vec<Account>,
    accent_colors: Vec<Rgb>,
    secondary_colors: Vec<Rgb>,
}

/// Unchecked wire shape of [`Profile`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    platform: String,
    accounts: Vec<Account>,
    accent_colors: Vec<Rgb>,
    secondary_colors: Vec<Rgb>,
}

impl TryFrom<RawProfile> for Profile {
    type Error = CardError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        Profile::new(
            raw.platform,
            raw.accounts,
            raw.accent_colors,
            raw.secondary_colors,
        )
    }
}

impl Profile {
    /// Build a profile, checking that the parallel arrays line up.
    pub fn new(
        platform: impl Into<String>,
        accounts: Vec<Account>,
        accent_colors: Vec<Rgb>,
        secondary_colors: Vec<Rgb>,
    ) -> CardResult<Self> {
        let profile = Self {
            platform: platform.into(),
            accounts,
            accent_colors,
            secondary_colors,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Build a profile from per-account entries. The parallel arrays line
    /// up by construction.
    pub(crate) fn from_entries(platform: &str, entries: Vec<(Account, Rgb, Rgb)>) -> Self {
        let mut profile = Self {
            platform: platform.to_string(),
            accounts: Vec::with_capacity(entries.len()),
            accent_colors: Vec::with_capacity(entries.len()),
            secondary_colors: Vec::with_capacity(entries.len()),
        };
        for (account, accent, secondary) in entries {
            profile.accounts.push(account);
            profile.accent_colors.push(accent);
            profile.secondary_colors.push(secondary);
        }
        profile
    }

    /// Check the profile invariants.
    pub fn validate(&self) -> CardResult<()> {
        let invalid = |reason: String| CardError::InvalidProfile {
            platform: self.platform.clone(),
            reason,
        };

        if self.accounts.is_empty() {
            return Err(invalid("no accounts".to_string()));
        }
        if self.accent_colors.len() != self.accounts.len() {
            return Err(invalid(format!(
                "{} accounts but {} accent colors",
                self.accounts.len(),
                self.accent_colors.len()
            )));
        }
        if self.secondary_colors.len() != self.accounts.len() {
            return Err(invalid(format!(
                "{} accounts but {} secondary colors",
                self.accounts.len(),
                self.secondary_colors.len()
            )));
        }
        Ok(())
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the card needs an account switcher
    pub fn has_multiple_accounts(&self) -> bool {
        self.accounts.len() > 1
    }

    /// Account and theme colors at `index`
    pub fn entry(&self, index: usize) -> Option<(&Account, Rgb, Rgb)> {
        Some((
            self.accounts.get(index)?,
            *self.accent_colors.get(index)?,
            *self.secondary_colors.get(index)?,
        ))
    }

    /// Icon key for the platform (lowercased name)
    pub fn icon_key(&self) -> String {
        self.platform.to_lowercase()
    }
}

/// Pointer coordinate in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of an element in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Position of `point` as a fraction of the box on each axis.
    ///
    /// Not clamped: points outside the box give values outside `0..=1`.
    /// A degenerate box yields the centre.
    pub fn fraction_of(&self, point: PointerPosition) -> (f64, f64) {
        let fx = if self.width > 0.0 {
            (point.x - self.left) / self.width
        } else {
            0.5
        };
        let fy = if self.height > 0.0 {
            (point.y - self.top) / self.height
        } else {
            0.5
        };
        (fx, fy)
    }

    /// Whether `point` lies inside the box, edges included
    pub fn contains(&self, point: PointerPosition) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }

    /// Longer side, used to size ripples
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(n: usize) -> Vec<Rgb> {
        vec![Rgb::new(1, 2, 3); n]
    }

    #[test]
    fn rgb_parses_comma_string() {
        let color: Rgb = "147, 51, 234".parse().unwrap();
        assert_eq!(color, Rgb::new(147, 51, 234));
        assert_eq!(color.to_string(), "147, 51, 234");
        assert_eq!(color.css_alpha(0.4), "rgba(147, 51, 234, 0.4)");
    }

    #[test]
    fn rgb_rejects_malformed() {
        assert!("147, 51".parse::<Rgb>().is_err());
        assert!("300, 0, 0".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }

    #[test]
    fn profile_rejects_mismatched_colors() {
        let result = Profile::new(
            "GitHub",
            vec![Account::new("a", "https://a"), Account::new("b", "https://b")],
            colors(1),
            colors(2),
        );
        assert!(matches!(result, Err(CardError::InvalidProfile { .. })));
    }

    #[test]
    fn profile_rejects_no_accounts() {
        let result = Profile::new("GitHub", vec![], vec![], vec![]);
        assert!(matches!(result, Err(CardError::InvalidProfile { .. })));
    }

    #[test]
    fn profile_deserializes_camel_case() {
        let json = r#"{
            "platform": "GitHub",
            "accounts": [{ "username": "ohaviii", "link": "https://github.com/ohaviii" }],
            "accentColors": ["147, 51, 234"],
            "secondaryColors": ["168, 85, 247"]
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.platform(), "GitHub");
        assert_eq!(profile.accounts()[0].bio, None);
        assert_eq!(profile.icon_key(), "github");
        assert!(!profile.has_multiple_accounts());
    }

    #[test]
    fn profile_deserialize_validates() {
        let json = r#"{
            "platform": "GitHub",
            "accounts": [{ "username": "ohaviii", "link": "https://github.com/ohaviii" }],
            "accentColors": [],
            "secondaryColors": ["168, 85, 247"]
        }"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn bounds_fraction_is_unclamped() {
        let bounds = Bounds::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(bounds.fraction_of(PointerPosition::new(200.0, 100.0)), (0.5, 0.5));
        let (fx, fy) = bounds.fraction_of(PointerPosition::new(0.0, 250.0));
        assert!(fx < 0.0);
        assert!(fy > 1.0);
    }

    #[test]
    fn bounds_contains_edges() {
        let bounds = Bounds::new(100.0, 50.0, 200.0, 100.0);
        assert!(bounds.contains(PointerPosition::new(100.0, 50.0)));
        assert!(bounds.contains(PointerPosition::new(300.0, 150.0)));
        assert!(!bounds.contains(PointerPosition::new(99.0, 60.0)));
        assert!(!bounds.contains(PointerPosition::new(150.0, 151.0)));
    }
}
