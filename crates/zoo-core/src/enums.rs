//! Classification enums for animals and enclosures.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `DietaryClass` and `ActivityPattern` end in an `Unknown` catch-all so that
//! stored values this build does not recognize still load and fall through to
//! the default behavior text instead of failing the whole snapshot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// AnimalSize
// ---------------------------------------------------------------------------

/// Body size class of an animal. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnimalSize {
    Microscopic,
    VerySmall,
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl AnimalSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Microscopic => "microscopic",
            Self::VerySmall => "very_small",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::VeryLarge => "very_large",
        }
    }
}

impl fmt::Display for AnimalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DietaryClass
// ---------------------------------------------------------------------------

/// What an animal eats when no designated prey shares its enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietaryClass {
    Carnivore,
    Herbivore,
    Omnivore,
    Insectivore,
    Piscivore,
    #[serde(other)]
    Unknown,
}

impl DietaryClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carnivore => "carnivore",
            Self::Herbivore => "herbivore",
            Self::Omnivore => "omnivore",
            Self::Insectivore => "insectivore",
            Self::Piscivore => "piscivore",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DietaryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityPattern
// ---------------------------------------------------------------------------

/// When an animal is awake.
///
/// ```text
/// diurnal    → day-active
/// nocturnal  → night-active
/// cathemeral → active both day and night
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityPattern {
    Diurnal,
    Nocturnal,
    Cathemeral,
    #[serde(other)]
    Unknown,
}

impl ActivityPattern {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diurnal => "diurnal",
            Self::Nocturnal => "nocturnal",
            Self::Cathemeral => "cathemeral",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActivityPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SecurityLevel
// ---------------------------------------------------------------------------

/// Containment classification shared by animal requirements and enclosures.
///
/// The order is `Low < Medium < High` and is defined by [`SecurityLevel::rank`],
/// never by declaration order or discriminant values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl SecurityLevel {
    /// All levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Position of the level in the total order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Whether an enclosure at this level may hold an animal requiring `required`.
    #[must_use]
    pub const fn satisfies(self, required: Self) -> bool {
        self.rank() >= required.rank()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl PartialOrd for SecurityLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SecurityLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Climate
// ---------------------------------------------------------------------------

/// Climate of an enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Tropical,
    Temperate,
    Arctic,
}

impl Climate {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Temperate => "temperate",
            Self::Arctic => "arctic",
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HabitatType
// ---------------------------------------------------------------------------

/// A single habitat. Enclosures carry a [`crate::habitat::HabitatSet`] of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HabitatType {
    Grassland,
    Forest,
    Savanna,
    Jungle,
    Desert,
    Arctic,
    Aquatic,
}

impl HabitatType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grassland => "grassland",
            Self::Forest => "forest",
            Self::Savanna => "savanna",
            Self::Jungle => "jungle",
            Self::Desert => "desert",
            Self::Arctic => "arctic",
            Self::Aquatic => "aquatic",
        }
    }
}

impl fmt::Display for HabitatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssignMode
// ---------------------------------------------------------------------------

/// How an auto-assignment run treats existing placements.
///
/// ```text
/// finish → keep enclosures and placements, place only unassigned animals
/// reset  → discard every enclosure and placement, then re-plan from scratch
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignMode {
    Finish,
    Reset,
}

impl AssignMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finish => "finish",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for AssignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
