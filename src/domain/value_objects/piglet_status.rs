//! Piglet status value object
//!
//! A piglet nurses until exactly one of four terminal outcomes, each of which
//! requires companion fields checked by the piglet validator.

use serde::{Deserialize, Serialize};

/// Current status of an individual piglet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PigletStatus {
    /// With the birth (or adoptive) sow
    #[default]
    Nursing,
    /// Weaned off; requires weaning date and weight
    Weaned,
    /// Moved to an adoptive sow; requires the sow and a reason
    Transferred,
    /// Sold off the farm
    Sold,
    /// Died; requires death date and cause
    Dead,
}

impl PigletStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PigletStatus::Nursing => "nursing",
            PigletStatus::Weaned => "weaned",
            PigletStatus::Transferred => "transferred",
            PigletStatus::Sold => "sold",
            PigletStatus::Dead => "dead",
        }
    }
}

impl std::fmt::Display for PigletStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PigletStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nursing" => Ok(PigletStatus::Nursing),
            "weaned" => Ok(PigletStatus::Weaned),
            "transferred" => Ok(PigletStatus::Transferred),
            "sold" => Ok(PigletStatus::Sold),
            "dead" => Ok(PigletStatus::Dead),
            other => Err(format!(
                "unknown piglet status '{other}' (expected nursing, weaned, transferred, sold or dead)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nursing() {
        assert_eq!(PigletStatus::default(), PigletStatus::Nursing);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&PigletStatus::Transferred).unwrap();
        assert_eq!(json, "\"transferred\"");
        let parsed: PigletStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PigletStatus::Transferred);
    }

    #[test]
    fn from_str_round_trips_every_status() {
        for status in [
            PigletStatus::Nursing,
            PigletStatus::Weaned,
            PigletStatus::Transferred,
            PigletStatus::Sold,
            PigletStatus::Dead,
        ] {
            assert_eq!(status.as_str().parse::<PigletStatus>().unwrap(), status);
        }
    }
}
