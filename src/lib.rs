pub mod compose;
pub mod config;
pub mod content;
pub mod official;
pub mod rng;
pub mod roast;
pub mod seed;
pub mod transform;

use chrono::{Days, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "aries" => Some(ZodiacSign::Aries),
            "taurus" => Some(ZodiacSign::Taurus),
            "gemini" => Some(ZodiacSign::Gemini),
            "cancer" => Some(ZodiacSign::Cancer),
            "leo" => Some(ZodiacSign::Leo),
            "virgo" => Some(ZodiacSign::Virgo),
            "libra" => Some(ZodiacSign::Libra),
            "scorpio" => Some(ZodiacSign::Scorpio),
            "sagittarius" => Some(ZodiacSign::Sagittarius),
            "capricorn" => Some(ZodiacSign::Capricorn),
            "aquarius" => Some(ZodiacSign::Aquarius),
            "pisces" => Some(ZodiacSign::Pisces),
            _ => None,
        }
    }

    /// Lowercase token used in the seed formula and provider queries.
    pub fn token(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    /// Display name used in templates.
    pub fn label(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Yesterday,
    Today,
    Tomorrow,
}

impl Day {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "yesterday" => Some(Day::Yesterday),
            "today" => Some(Day::Today),
            "tomorrow" => Some(Day::Tomorrow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Yesterday => "yesterday",
            Day::Today => "today",
            Day::Tomorrow => "tomorrow",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolves the day option to a calendar date string (YYYY-MM-DD).
    pub fn resolve_date(self) -> String {
        let today = Local::now().date_naive();
        let date = match self {
            Day::Yesterday => today - Days::new(1),
            Day::Today => today,
            Day::Tomorrow => today + Days::new(1),
        };
        date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Official,
    Roast,
    Mix,
}

impl Mode {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "official" => Some(Mode::Official),
            "roast" => Some(Mode::Roast),
            "mix" => Some(Mode::Mix),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Official => "official",
            Mode::Roast => "roast",
            Mode::Mix => "mix",
        }
    }

    pub fn needs_official(self) -> bool {
        !matches!(self, Mode::Roast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CringeLevel {
    Gentle,
    Ironic,
    Sarcastic,
    CringeHard,
}

pub const CRINGE_LEVELS: [CringeLevel; 4] = [
    CringeLevel::Gentle,
    CringeLevel::Ironic,
    CringeLevel::Sarcastic,
    CringeLevel::CringeHard,
];

impl CringeLevel {
    pub fn from_u8(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(CringeLevel::Gentle),
            1 => Ok(CringeLevel::Ironic),
            2 => Ok(CringeLevel::Sarcastic),
            3 => Ok(CringeLevel::CringeHard),
            other => Err(format!("invalid cringe level (0-3): {}", other)),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            CringeLevel::Gentle => "Gentle",
            CringeLevel::Ironic => "Ironic",
            CringeLevel::Sarcastic => "Sarcastic",
            CringeLevel::CringeHard => "Cringe Hard",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficialHoroscope {
    pub text: String,
    pub lucky_color: Option<String>,
    pub lucky_number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastHoroscope {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Official,
    Roast,
    Mix,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::Official => "official",
            Source::Roast => "roast",
            Source::Mix => "mix",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedResult {
    pub text: String,
    pub source: Source,
    pub lucky_color: Option<String>,
    pub lucky_number: Option<u32>,
}
