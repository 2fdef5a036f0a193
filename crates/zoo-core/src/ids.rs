//! Typed entity ids.
//!
//! Ids are plain `u32` values on the wire (`#[serde(transparent)]`) so the
//! snapshot file stays readable and hand-editable. The newtypes keep animal,
//! enclosure, and category ids from being mixed up in engine code.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u32>().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identity of an [`crate::entities::Animal`].
    AnimalId
);
entity_id!(
    /// Identity of an [`crate::entities::Enclosure`].
    EnclosureId
);
entity_id!(
    /// Identity of a [`crate::entities::Category`].
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&EnclosureId(42)).unwrap();
        assert_eq!(json, "42");
        let back: EnclosureId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EnclosureId(42));
    }

    #[test]
    fn ids_parse_from_cli_text() {
        assert_eq!(" 7 ".parse::<AnimalId>().unwrap(), AnimalId(7));
        assert!("seven".parse::<AnimalId>().is_err());
    }
}
