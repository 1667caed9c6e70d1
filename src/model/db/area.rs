use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// A `[longitude, latitude]` pair.
pub type Position = [f64; 2];

/// Core area data: a named polygon boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaCore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<Position>,
}

/// An area from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub area: AreaCore,
}

impl Area {
    /// Assign a fresh ID to the given area data.
    pub fn new(area: AreaCore) -> Self {
        Self { id: Id::new(), area }
    }
}

impl Deref for Area {
    type Target = AreaCore;

    fn deref(&self) -> &Self::Target {
        &self.area
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Area {
        pub fn example() -> Self {
            Self::new(AreaCore {
                name: Some("Old Town".to_string()),
                coordinates: vec![
                    [-3.1883, 55.9533],
                    [-3.1750, 55.9533],
                    [-3.1750, 55.9480],
                    [-3.1883, 55.9480],
                    [-3.1883, 55.9533],
                ],
            })
        }
    }
}
