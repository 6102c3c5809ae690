//! Heat status value object
//!
//! A heat starts out `detected`; every other status is terminal and freezes
//! the record.

use serde::{Deserialize, Serialize};

/// Status of a detected estrus event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeatStatus {
    /// Freshly recorded, waiting for a servicing decision
    #[default]
    Detected,
    /// A service was recorded against this heat
    Serviced,
    /// Deliberately left unserviced
    NotServiced,
    /// Recorded in error or otherwise voided
    Cancelled,
}

impl HeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatStatus::Detected => "detected",
            HeatStatus::Serviced => "serviced",
            HeatStatus::NotServiced => "not-serviced",
            HeatStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for HeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HeatStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detected" => Ok(HeatStatus::Detected),
            "serviced" => Ok(HeatStatus::Serviced),
            "not-serviced" => Ok(HeatStatus::NotServiced),
            "cancelled" => Ok(HeatStatus::Cancelled),
            other => Err(format!(
                "unknown heat status '{other}' (expected detected, serviced, not-serviced or cancelled)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_detected() {
        assert_eq!(HeatStatus::default(), HeatStatus::Detected);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&HeatStatus::NotServiced).unwrap();
        assert_eq!(json, "\"not-serviced\"");
        let parsed: HeatStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, HeatStatus::Cancelled);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(HeatStatus::NotServiced.to_string(), "not-serviced");
    }

    #[test]
    fn from_str_round_trips_every_status() {
        for status in [
            HeatStatus::Detected,
            HeatStatus::Serviced,
            HeatStatus::NotServiced,
            HeatStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<HeatStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("standing".parse::<HeatStatus>().is_err());
    }
}
