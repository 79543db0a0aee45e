//! Moon phase data as returned by the remote API.

use serde::{Deserialize, Serialize};

/// One day's moon phase, exactly as the remote API reported it.
///
/// Both fields are opaque pass-through values: the library never validates
/// or reshapes them, it only stores and renders them. Serde names match the
/// wire format so the same struct deserializes the API body and the cache
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRecord {
    /// Human-readable phase name (e.g. "Waning Gibbous").
    pub phase: String,

    /// Phase symbol (e.g. "🌖").
    #[serde(rename = "phaseEmoji")]
    pub phase_emoji: String,
}
