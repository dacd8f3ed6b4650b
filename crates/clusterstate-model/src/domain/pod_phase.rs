use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Coarse lifecycle phase reported by the API server for a pod.
///
/// Parsing never fails: values this layer does not recognize are kept verbatim in [`PodPhase::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
    Other(String),
}

impl PodPhase {
    pub fn as_str(&self) -> &str {
        match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
            PodPhase::Other(s) => s,
        }
    }

    /// Returns `true` for the phases in which a pod still occupies its node.
    pub fn is_active(&self) -> bool {
        matches!(self, PodPhase::Pending | PodPhase::Running)
    }
}

impl Default for PodPhase {
    fn default() -> Self {
        PodPhase::Pending
    }
}

impl From<String> for PodPhase {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => PodPhase::Pending,
            "Running" => PodPhase::Running,
            "Succeeded" => PodPhase::Succeeded,
            "Failed" => PodPhase::Failed,
            "Unknown" => PodPhase::Unknown,
            _ => PodPhase::Other(s),
        }
    }
}

impl From<&str> for PodPhase {
    fn from(s: &str) -> Self {
        PodPhase::from(s.to_string())
    }
}

impl From<PodPhase> for String {
    fn from(phase: PodPhase) -> Self {
        match phase {
            PodPhase::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PodPhase {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PodPhase::from(s))
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_phases_parse() {
        assert_eq!(PodPhase::from("Running"), PodPhase::Running);
        assert_eq!(PodPhase::from("Pending"), PodPhase::Pending);
        assert_eq!(PodPhase::from("Unknown"), PodPhase::Unknown);
    }

    #[test]
    fn unrecognized_phase_is_kept() {
        let phase: PodPhase = "Evicted".parse().unwrap();
        assert_eq!(phase, PodPhase::Other("Evicted".to_string()));
        assert_eq!(phase.to_string(), "Evicted");
        assert!(!phase.is_active());
    }

    #[test]
    fn phase_matching_is_case_sensitive() {
        // The API server only ever emits the capitalized form.
        assert_eq!(PodPhase::from("running"), PodPhase::Other("running".into()));
    }

    #[test]
    fn serde_is_plain_string() {
        let json = serde_json::to_string(&PodPhase::Succeeded).unwrap();
        assert_eq!(json, r#""Succeeded""#);

        let back: PodPhase = serde_json::from_str(r#""Terminating""#).unwrap();
        assert_eq!(back, PodPhase::Other("Terminating".into()));
    }
}
