//! Identity wrappers for players, seasons and season phases.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player identifiers.
///
/// Upstream feeds use alphanumeric player codes (e.g. `"P003469"`), but some
/// exports carry them as plain numbers, so both decode into the same string form.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::PlayerId;
///
/// let id = PlayerId::new("P003469");
/// assert_eq!(id.as_str(), "P003469");
/// assert_eq!(id.to_string(), "P003469");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(StatsError::invalid("player id cannot be empty"));
        }
        Ok(Self::new(s))
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(crate::models::de::string_or_number(deserializer)?))
    }
}

/// Type-safe wrapper for season years (the year the season starts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| StatsError::invalid(format!("invalid season: {s:?}")))
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::models::de::coerce_f64(&raw)
            .filter(|year| (0.0..=f64::from(u16::MAX)).contains(year))
            .map(|year| Self(year as u16))
            .unwrap_or_default())
    }
}

/// Season sub-period such as regular season (`RS`) or playoffs (`PO`).
///
/// Stored upper-cased so `"rs"` and `"RS"` select the same rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phase(pub String);

impl Phase {
    pub fn new(phase: impl AsRef<str>) -> Self {
        Self(phase.as_ref().trim().to_uppercase())
    }

    pub fn regular_season() -> Self {
        Self("RS".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::regular_season()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Phase {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "" => Err(StatsError::invalid("phase cannot be empty")),
            "REGULAR SEASON" | "REGULAR" => Ok(Self::regular_season()),
            "PLAYOFFS" | "PLAYOFF" => Ok(Self("PO".to_string())),
            other => Ok(Self(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = crate::models::de::string_or_number(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_trims_and_displays() {
        let id = PlayerId::new("  P001 ");
        assert_eq!(id.as_str(), "P001");
        assert_eq!(id.to_string(), "P001");
    }

    #[test]
    fn test_player_id_from_str_rejects_empty() {
        assert!("".parse::<PlayerId>().is_err());
        assert_eq!("P9".parse::<PlayerId>().unwrap(), PlayerId::new("P9"));
    }

    #[test]
    fn test_player_id_deserializes_from_number() {
        let id: PlayerId = serde_json::from_str("1234").unwrap();
        assert_eq!(id.as_str(), "1234");
        let id: PlayerId = serde_json::from_str("\"P77\"").unwrap();
        assert_eq!(id.as_str(), "P77");
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("2023".parse::<Season>().unwrap(), Season::new(2023));
        assert!("twenty".parse::<Season>().is_err());
        assert_eq!(Season::default().as_u16(), 2024);
    }

    #[test]
    fn test_season_deserialize_is_lenient() {
        let season: Season = serde_json::from_str("\"2023\"").unwrap();
        assert_eq!(season, Season::new(2023));
        let season: Season = serde_json::from_str("null").unwrap();
        assert_eq!(season, Season::default());
    }

    #[test]
    fn test_phase_normalization() {
        assert_eq!("rs".parse::<Phase>().unwrap(), Phase::regular_season());
        assert_eq!("Playoffs".parse::<Phase>().unwrap().as_str(), "PO");
        assert_eq!("ff".parse::<Phase>().unwrap().as_str(), "FF");
        assert!("  ".parse::<Phase>().is_err());
    }

    #[test]
    fn test_phase_deserialize_blank_defaults_to_regular_season() {
        let phase: Phase = serde_json::from_str("\"\"").unwrap();
        assert_eq!(phase, Phase::regular_season());
    }
}
