//! Typed identifier newtypes backed by positive integers.
//!
//! Ids are assigned by the store as `max(existing) + 1`, so the first record
//! of every collection gets id `1`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Behaviour shared by every record identifier.
pub trait RecordId: Copy + Eq + Ord + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Wrap a raw integer.
    fn from_raw(raw: u64) -> Self;

    /// Access the raw integer.
    fn raw(self) -> u64;

    /// The id following this one.
    #[must_use]
    fn next(self) -> Self {
        Self::from_raw(self.raw() + 1)
    }
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap an existing integer id.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl RecordId for $name {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Unique identifier for a [`Customer`](crate::customer::Customer).
    CustomerId
);

define_id!(
    /// Unique identifier for an [`Admin`](crate::admin::Admin) roster entry.
    AdminId
);

define_id!(
    /// Unique identifier for a catalog [`Service`](crate::service::Service).
    ServiceId
);

define_id!(
    /// Unique identifier for a booking [`Event`](crate::event::Event).
    EventId
);

define_id!(
    /// Unique identifier for a [`Product`](crate::product::Product).
    ProductId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = CustomerId::new(42);
        let parsed: CustomerId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&EventId::new(3)).unwrap();
        assert_eq!(json, "3");
        let parsed: EventId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed.value(), 3);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(ProductId::from_str("abc").is_err());
        assert!(ProductId::from_str("-1").is_err());
    }

    #[test]
    fn should_produce_following_id_when_calling_next() {
        assert_eq!(UserId::new(9).next(), UserId::new(10));
    }
}
