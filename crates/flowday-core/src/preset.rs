//! Named configuration presets with versioned JSON export/import.
//!
//! A preset is a snapshot of a [`SchedulingConfiguration`] plus metadata.
//! Storage backends are an external concern; this module only defines the
//! interchange format and its semantic-versioning compatibility rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulingConfiguration;
use crate::error::PresetError;

/// Current preset format version (semver). Bumped when the configuration
/// structure changes incompatibly.
pub const PRESET_VERSION: &str = "1.0.0";

/// Result of comparing a preset's version against the current format.
#[derive(Debug, Clone, PartialEq)]
pub enum Compatibility {
    /// Versions are fully compatible.
    Compatible,
    /// Import version is newer but still compatible (minor difference).
    MinorNewer { current: String, import: String },
    /// Versions are incompatible (major difference).
    Incompatible { current: String, import: String },
}

/// Metadata describing a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetMetadata {
    pub id: String,
    /// Human-readable name (e.g. "Deep work Tuesday").
    pub name: String,
    /// Icon identifier for the presentation layer.
    #[serde(default)]
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl Default for PresetMetadata {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Unnamed preset".to_string(),
            icon: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// A named, persistable snapshot of a scheduling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset format version (semver).
    pub version: String,
    pub metadata: PresetMetadata,
    pub config: SchedulingConfiguration,
}

impl Preset {
    /// Snapshot a configuration under a name.
    pub fn new(name: impl Into<String>, config: SchedulingConfiguration) -> Self {
        Self {
            version: PRESET_VERSION.to_string(),
            metadata: PresetMetadata {
                name: name.into(),
                ..Default::default()
            },
            config,
        }
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON without a compatibility check.
    ///
    /// # Errors
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Deserialize from JSON, rejecting incompatible format versions.
    ///
    /// # Errors
    /// Returns [`PresetError::IncompatibleVersion`] on a major-version
    /// mismatch, or a parse error for malformed JSON.
    pub fn import(json: &str) -> Result<Self, PresetError> {
        let preset = Self::from_json(json)?;
        if let Compatibility::Incompatible { current, import } =
            check_compatibility(PRESET_VERSION, &preset.version)
        {
            return Err(PresetError::IncompatibleVersion { current, import });
        }
        Ok(preset)
    }

    /// The configuration to hand to the engine.
    pub fn configuration(&self) -> &SchedulingConfiguration {
        &self.config
    }
}

/// Compare two semver strings for preset compatibility.
///
/// Major mismatch is incompatible; a newer minor on the import side is
/// flagged so callers can warn. Unparseable versions are incompatible.
pub fn check_compatibility(current: &str, import: &str) -> Compatibility {
    let (cur_major, cur_minor) = match parse_version(current) {
        Some(parts) => parts,
        None => {
            return Compatibility::Incompatible {
                current: current.to_string(),
                import: import.to_string(),
            }
        }
    };
    let (imp_major, imp_minor) = match parse_version(import) {
        Some(parts) => parts,
        None => {
            return Compatibility::Incompatible {
                current: current.to_string(),
                import: import.to_string(),
            }
        }
    };

    if cur_major != imp_major {
        Compatibility::Incompatible {
            current: current.to_string(),
            import: import.to_string(),
        }
    } else if imp_minor > cur_minor {
        Compatibility::MinorNewer {
            current: current.to_string(),
            import: import.to_string(),
        }
    } else {
        Compatibility::Compatible
    }
}

fn parse_version(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}
