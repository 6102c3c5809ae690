//! Pregnancy status value object
//!
//! A gestation lineage runs until a birth or an abortion ends it; both end
//! states are irreversible.

use serde::{Deserialize, Serialize};

/// Status of a gestation lineage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PregnancyStatus {
    /// Confirmed and running
    #[default]
    InProgress,
    /// Recorded but not yet confirmed by ultrasound, no-return or palpation
    Unconfirmed,
    /// Ended with a recorded farrowing
    EndedBirth,
    /// Ended with a recorded abortion
    EndedAbortion,
}

impl PregnancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PregnancyStatus::InProgress => "in-progress",
            PregnancyStatus::Unconfirmed => "unconfirmed",
            PregnancyStatus::EndedBirth => "ended-birth",
            PregnancyStatus::EndedAbortion => "ended-abortion",
        }
    }
}

impl std::fmt::Display for PregnancyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PregnancyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-progress" => Ok(PregnancyStatus::InProgress),
            "unconfirmed" => Ok(PregnancyStatus::Unconfirmed),
            "ended-birth" => Ok(PregnancyStatus::EndedBirth),
            "ended-abortion" => Ok(PregnancyStatus::EndedAbortion),
            other => Err(format!(
                "unknown pregnancy status '{other}' (expected in-progress, unconfirmed, ended-birth or ended-abortion)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&PregnancyStatus::EndedBirth).unwrap();
        assert_eq!(json, "\"ended-birth\"");
    }

    #[test]
    fn from_str_round_trips_every_status() {
        for status in [
            PregnancyStatus::InProgress,
            PregnancyStatus::Unconfirmed,
            PregnancyStatus::EndedBirth,
            PregnancyStatus::EndedAbortion,
        ] {
            assert_eq!(status.as_str().parse::<PregnancyStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("open".parse::<PregnancyStatus>().is_err());
    }
}
