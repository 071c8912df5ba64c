//! Loading profile feeds from disk

use std::io::Write;

use socialcards_core::{load_profiles, CardError};
use tempfile::NamedTempFile;

#[test]
fn loads_valid_feed() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "platform": "Instagram",
                "accounts": [
                    {{ "username": "one", "link": "https://example.com/one", "bio": "First" }},
                    {{ "username": "two", "link": "https://example.com/two" }}
                ],
                "accentColors": ["225, 48, 108", "245, 96, 64"],
                "secondaryColors": ["193, 53, 132", "226, 119, 95"]
            }}
        ]"#
    )
    .unwrap();

    let profiles = load_profiles(file.path()).unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].account_count(), 2);
    assert_eq!(profiles[0].accounts()[0].bio.as_deref(), Some("First"));
}

#[test]
fn rejects_mismatched_arrays() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{
            "platform": "YouTube",
            "accounts": [{{ "username": "a", "link": "https://example.com/a" }}],
            "accentColors": ["255, 0, 0", "230, 33, 23"],
            "secondaryColors": ["200, 0, 0"]
        }}]"#
    )
    .unwrap();

    let err = load_profiles(file.path()).unwrap_err();
    assert!(matches!(err, CardError::Json(_)));
    assert!(err.to_string().contains("accent colors"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_profiles(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CardError::Io(_)));
}
