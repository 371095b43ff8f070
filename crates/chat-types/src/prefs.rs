use serde::{Deserialize, Serialize};

/// How directly the assistant should speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TonePreference {
    Calm,
    Balanced,
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthLevel {
    Light,
    Medium,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInFrequency {
    Low,
    Medium,
    High,
}

/// Stored tone/depth preferences. Consumed by the canned-reply generator
/// and the preferences panel; plain data everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub default_tone: TonePreference,
    pub depth_level: DepthLevel,
    pub check_in_frequency: CheckInFrequency,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_tone: TonePreference::Balanced,
            depth_level: DepthLevel::Medium,
            check_in_frequency: CheckInFrequency::Medium,
        }
    }
}

impl TonePreference {
    pub fn all() -> &'static [TonePreference] {
        &[
            TonePreference::Calm,
            TonePreference::Balanced,
            TonePreference::Direct,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TonePreference::Calm => "Calm",
            TonePreference::Balanced => "Balanced",
            TonePreference::Direct => "Direct",
        }
    }
}

impl DepthLevel {
    pub fn all() -> &'static [DepthLevel] {
        &[DepthLevel::Light, DepthLevel::Medium, DepthLevel::Deep]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DepthLevel::Light => "Light",
            DepthLevel::Medium => "Medium",
            DepthLevel::Deep => "Deep",
        }
    }
}

impl CheckInFrequency {
    pub fn all() -> &'static [CheckInFrequency] {
        &[
            CheckInFrequency::Low,
            CheckInFrequency::Medium,
            CheckInFrequency::High,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckInFrequency::Low => "Low",
            CheckInFrequency::Medium => "Medium",
            CheckInFrequency::High => "High",
        }
    }
}
