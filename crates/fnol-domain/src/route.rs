//! Route module - the handling decisions a claim can receive

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling decision for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteDecision {
    /// Suspicious wording; send to the investigations unit
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,

    /// Incomplete or unremarkable claim; an adjuster reviews it by hand
    #[serde(rename = "Manual review")]
    ManualReview,

    /// Injury claim; handled by a specialist adjuster
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,

    /// Small, complete, non-injury claim; settled on the fast path
    #[serde(rename = "Fast-track")]
    FastTrack,
}

impl RouteDecision {
    /// Get the display label of the route
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteDecision::InvestigationFlag => "Investigation Flag",
            RouteDecision::ManualReview => "Manual review",
            RouteDecision::SpecialistQueue => "Specialist Queue",
            RouteDecision::FastTrack => "Fast-track",
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
