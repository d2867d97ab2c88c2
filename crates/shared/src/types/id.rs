//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `MemberId` where a
//! `CommunityId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers over the store's synthetic integers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw database identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the inner integer.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(CommunityId, "Unique identifier for a community (tenant).");
typed_id!(MemberId, "Unique identifier for a community member.");
typed_id!(IncomeId, "Unique identifier for an income record.");
typed_id!(ExpenseId, "Unique identifier for an expense record.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_round_trip() {
        let id = MemberId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(MemberId::from_str("42").unwrap(), id);
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let id = IncomeId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: IncomeId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_invalid_id_string_rejected() {
        assert!(CommunityId::from_str("abc").is_err());
    }
}
