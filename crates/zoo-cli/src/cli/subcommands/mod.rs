pub mod animal;
pub mod category;
pub mod enclosure;

pub use animal::AnimalCommands;
pub use category::CategoryCommands;
pub use enclosure::EnclosureCommands;
