use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A named grouping of animals. Not consulted by placement or verification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
