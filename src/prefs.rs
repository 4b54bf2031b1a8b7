use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

/// A single wallpaper preference: the display or desktop slot it applies
/// to and the image path assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pref {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingSeparator(String),
    #[error("missing key in '{0}'")]
    EmptyKey(String),
    #[error("missing value for key '{0}'")]
    EmptyValue(String),
}

/// Parse a single KEY=VALUE assignment. The split happens at the first
/// '=', so values may themselves contain '='.
pub fn parse_assignment(raw: &str) -> Result<Pref, AssignmentError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| AssignmentError::MissingSeparator(raw.to_string()))?;

    if key.is_empty() {
        return Err(AssignmentError::EmptyKey(raw.to_string()));
    }
    if value.is_empty() {
        return Err(AssignmentError::EmptyValue(key.to_string()));
    }

    Ok(Pref {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Collect parsed assignments into the preference map. Assigning the same
/// key more than once keeps the last value.
pub fn collect(assignments: Vec<Pref>) -> BTreeMap<String, String> {
    let mut prefs = BTreeMap::new();
    for pref in assignments {
        prefs.insert(pref.key, pref.value);
    }
    prefs
}

/// Anchor a relative image path to `base`. The renderer resolves nothing
/// itself, so stored values must be absolute. Whether the file exists is
/// the renderer's concern, not ours.
pub fn absolutize(value: &str, base: &Path) -> String {
    let path = Path::new(value);
    if path.is_absolute() {
        value.to_string()
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}
