//! Marchamo Status Value Object
//!
//! Payment state of an annual road-tax (marchamo) record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status of a marchamo record
///
/// - **Pending**: issued for the year, payment not yet received
/// - **Paid**: payment confirmed
/// - **Overdue**: payment window passed without payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum MarchamoStatus {
    /// Payment not yet received
    #[default]
    Pending = 0,

    /// Payment confirmed
    Paid = 1,

    /// Payment window passed without payment
    Overdue = 2,
}

impl MarchamoStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    /// Check if the record is settled
    #[inline]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Check if payment is still expected
    #[inline]
    pub const fn requires_payment(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Paid),
            2 => Some(Self::Overdue),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for MarchamoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(MarchamoStatus::from_id(0), Some(MarchamoStatus::Pending));
        assert_eq!(MarchamoStatus::from_id(1), Some(MarchamoStatus::Paid));
        assert_eq!(MarchamoStatus::from_id(2), Some(MarchamoStatus::Overdue));
        assert_eq!(MarchamoStatus::from_id(99), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            MarchamoStatus::from_code("pending"),
            Some(MarchamoStatus::Pending)
        );
        assert_eq!(MarchamoStatus::from_code("paid"), Some(MarchamoStatus::Paid));
        assert_eq!(
            MarchamoStatus::from_code("overdue"),
            Some(MarchamoStatus::Overdue)
        );
        assert_eq!(MarchamoStatus::from_code("invalid"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MarchamoStatus::Pending.to_string(), "pending");
        assert_eq!(MarchamoStatus::Paid.to_string(), "paid");
        assert_eq!(MarchamoStatus::Overdue.to_string(), "overdue");
    }

    #[test]
    fn test_is_settled() {
        assert!(!MarchamoStatus::Pending.is_settled());
        assert!(MarchamoStatus::Paid.is_settled());
        assert!(!MarchamoStatus::Overdue.is_settled());
    }

    #[test]
    fn test_requires_payment() {
        assert!(MarchamoStatus::Pending.requires_payment());
        assert!(!MarchamoStatus::Paid.requires_payment());
        assert!(MarchamoStatus::Overdue.requires_payment());
    }

    #[test]
    fn test_default() {
        assert_eq!(MarchamoStatus::default(), MarchamoStatus::Pending);
    }
}
