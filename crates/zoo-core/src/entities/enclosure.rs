use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Climate, SecurityLevel};
use crate::habitat::HabitatSet;
use crate::ids::EnclosureId;

/// An enclosure animals can be placed in.
///
/// The occupant list is never stored here. It is derived from the animals
/// whose `enclosure_id` points at this enclosure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Enclosure {
    pub id: EnclosureId,
    pub name: String,
    pub climate: Climate,
    #[serde(default)]
    pub habitat: HabitatSet,
    pub security_level: SecurityLevel,
    /// Usable area, in square meters.
    pub size: f64,
}
