//! Validity Year Value Object
//!
//! Bounded calendar year attached to marchamo and revisión records.

/// Calendar year a record is valid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValidityYear(i16);

impl ValidityYear {
    pub const MIN: i16 = 1900;
    pub const MAX: i16 = 2100;

    pub fn new(year: i16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Some(Self(year))
        } else {
            None
        }
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

impl From<ValidityYear> for i16 {
    fn from(year: ValidityYear) -> Self {
        year.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_year_bounds() {
        assert!(ValidityYear::new(1900).is_some());
        assert!(ValidityYear::new(2026).is_some());
        assert!(ValidityYear::new(2100).is_some());
        assert!(ValidityYear::new(1899).is_none());
        assert!(ValidityYear::new(2101).is_none());
    }

    #[test]
    fn test_validity_year_value() {
        let year = ValidityYear::new(2026).unwrap();
        assert_eq!(year.value(), 2026);
        assert_eq!(i16::from(year), 2026);
    }

    #[test]
    fn test_validity_year_ordering() {
        let a = ValidityYear::new(2025).unwrap();
        let b = ValidityYear::new(2026).unwrap();
        assert!(a < b);
    }
}
