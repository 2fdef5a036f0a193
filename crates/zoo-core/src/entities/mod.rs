//! Entity structs for all zoo domain objects.
//!
//! Each entity is one record in the snapshot file. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation. Relationships are weak id references; nothing here owns
//! another entity.

mod animal;
mod category;
mod enclosure;

pub use animal::Animal;
pub use category::Category;
pub use enclosure::Enclosure;
