use std::fmt;
use std::str::FromStr;

use crate::error::TtsError;

/// Gender of the voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

/// Voice configuration with metadata
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    pub id: &'static str,
    pub gender: Gender,
    pub description: &'static str,
}

impl VoiceConfig {
    pub const fn new(id: &'static str, gender: Gender, description: &'static str) -> Self {
        Self {
            id,
            gender,
            description,
        }
    }
}

/// Voices shipped with the KittenTTS 0.8 models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Bella,
    Jasper,
    Luna,
    Bruno,
    Rosie,
    Hugo,
    Kiki,
    Leo,
}

impl Voice {
    pub const DEFAULT: Voice = Voice::Jasper;

    /// Get the voice configuration for this voice
    pub const fn config(&self) -> VoiceConfig {
        match self {
            Voice::Bella => VoiceConfig::new("Bella", Gender::Female, "Female voice - Bella"),
            Voice::Jasper => VoiceConfig::new("Jasper", Gender::Male, "Male voice - Jasper"),
            Voice::Luna => VoiceConfig::new("Luna", Gender::Female, "Female voice - Luna"),
            Voice::Bruno => VoiceConfig::new("Bruno", Gender::Male, "Male voice - Bruno"),
            Voice::Rosie => VoiceConfig::new("Rosie", Gender::Female, "Female voice - Rosie"),
            Voice::Hugo => VoiceConfig::new("Hugo", Gender::Male, "Male voice - Hugo"),
            Voice::Kiki => VoiceConfig::new("Kiki", Gender::Female, "Female voice - Kiki"),
            Voice::Leo => VoiceConfig::new("Leo", Gender::Male, "Male voice - Leo"),
        }
    }

    /// Identifier passed to the model and accepted by the API
    pub const fn id(&self) -> &'static str {
        self.config().id
    }

    /// All voices, in the order they are listed to clients
    pub const fn all() -> &'static [Voice] {
        &[
            Voice::Bella,
            Voice::Jasper,
            Voice::Luna,
            Voice::Bruno,
            Voice::Rosie,
            Voice::Hugo,
            Voice::Kiki,
            Voice::Leo,
        ]
    }

    /// Look up a voice by its exact (case-sensitive) identifier
    pub fn from_id(id: &str) -> Option<Voice> {
        Voice::all().iter().copied().find(|voice| voice.id() == id)
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::DEFAULT
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Voice {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::from_id(s).ok_or_else(|| TtsError::InvalidVoice(s.to_string()))
    }
}
