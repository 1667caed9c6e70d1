use serde::{Deserialize, Serialize};

use crate::model::{
    db::area::{Area, AreaCore, Position},
    mongodb::{hex_id, Id},
};

/// An area as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Polygon boundary; each entry must be exactly `[longitude, latitude]`.
    #[serde(default)]
    pub coordinates: Vec<Position>,
}

impl From<AreaSpec> for Area {
    fn from(spec: AreaSpec) -> Self {
        Area::new(AreaCore {
            name: spec.name,
            coordinates: spec.coordinates,
        })
    }
}

/// An area as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaDescription {
    #[serde(with = "hex_id")]
    pub id: Id,
    #[serde(flatten)]
    pub area: AreaCore,
}

impl From<Area> for AreaDescription {
    fn from(area: Area) -> Self {
        Self {
            id: area.id,
            area: area.area,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use rocket::serde::json::{json, serde_json};

    #[test]
    fn coordinates_must_be_pairs() {
        let ok = serde_json::from_value::<AreaSpec>(json!({
            "name": "Square",
            "coordinates": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        }))
        .unwrap();
        assert_eq!(ok.coordinates.len(), 3);
        assert_eq!(ok.coordinates[1], [1.0, 0.0]);

        let bad = serde_json::from_value::<AreaSpec>(json!({ "coordinates": [[0.0, 0.0, 5.0]] }));
        assert!(bad.is_err());
    }

    #[test]
    fn empty_area_is_accepted() {
        let spec = serde_json::from_value::<AreaSpec>(json!({})).unwrap();
        let area: Area = spec.into();
        assert!(area.name.is_none());
        assert!(area.coordinates.is_empty());

        let value = serde_json::to_value(AreaDescription::from(area)).unwrap();
        assert_eq!(value["coordinates"], json!([]));
        assert!(value.get("_id").is_none());
    }
}
