//! Revision Result Value Object
//!
//! Outcome of a periodic technical inspection (revisión técnica).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a vehicle inspection
///
/// - **Passed**: no defects, vehicle may circulate
/// - **Failed**: severe defects, must be repaired and re-inspected
/// - **Conditional**: minor defects, may circulate but must fix and return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum RevisionResult {
    /// No defects found
    Passed = 0,

    /// Severe defects found
    Failed = 1,

    /// Minor defects found, re-inspection required
    Conditional = 2,
}

impl RevisionResult {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Conditional => "conditional",
        }
    }

    /// Check if the vehicle may circulate on this result
    #[inline]
    pub const fn is_passing(&self) -> bool {
        matches!(self, Self::Passed | Self::Conditional)
    }

    /// Check if another inspection is required
    #[inline]
    pub const fn requires_reinspection(&self) -> bool {
        matches!(self, Self::Failed | Self::Conditional)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Passed),
            1 => Some(Self::Failed),
            2 => Some(Self::Conditional),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "passed" => Some(Self::Passed),
            "failed" => Some(Self::Failed),
            "conditional" => Some(Self::Conditional),
            _ => None,
        }
    }
}

impl fmt::Display for RevisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
