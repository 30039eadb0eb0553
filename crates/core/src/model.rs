//! Car and engine records.
//!
//! Field names on the wire follow the public JSON contract of the dealership API
//! (`ID`, `FuelType`, `NoOfCylinder`, ...), not Rust naming. Missing fields
//! decode to their zero value.

use serde::{Deserialize, Serialize};

use crate::id::{CarId, EngineId};

/// An engine, stored in its own table.
///
/// The engine store owns identity: `engine_id` is always assigned server-side on
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Engine {
    #[serde(rename = "id")]
    pub engine_id: EngineId,
    #[serde(rename = "Displacement")]
    pub displacement: i64,
    #[serde(rename = "NoOfCylinder")]
    pub cylinder_count: i64,
    #[serde(rename = "Range")]
    pub range: i64,
}

impl Engine {
    /// An engine that only carries its identity (how a car row references it).
    pub fn reference(engine_id: EngineId) -> Self {
        Self {
            engine_id,
            ..Self::default()
        }
    }
}

/// A car. The row only keeps `engine.engine_id`; the other engine fields are
/// populated only when explicitly joined in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    #[serde(rename = "ID")]
    pub id: CarId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "FuelType")]
    pub fuel_type: String,
    #[serde(rename = "Engine")]
    pub engine: Engine,
}

impl Car {
    /// Replace the identity, keeping every other field.
    pub fn with_id(mut self, id: CarId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn car_json_uses_public_field_names() {
        let id: CarId = "f96f3281-fca7-4610-a48c-4ae197d6fd2a".parse().unwrap();
        let car = Car {
            id,
            name: "Model 3".to_string(),
            year: 2018,
            brand: "Tesla".to_string(),
            fuel_type: "electric".to_string(),
            engine: Engine {
                engine_id: EngineId::from_uuid(*id.as_uuid()),
                displacement: 500,
                cylinder_count: 2,
                range: 200,
            },
        };

        let v = serde_json::to_value(&car).unwrap();
        assert_eq!(v["ID"], "f96f3281-fca7-4610-a48c-4ae197d6fd2a");
        assert_eq!(v["FuelType"], "electric");
        assert_eq!(v["Engine"]["id"], "f96f3281-fca7-4610-a48c-4ae197d6fd2a");
        assert_eq!(v["Engine"]["NoOfCylinder"], 2);
        assert_eq!(v["Engine"]["Range"], 200);
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let car: Car = serde_json::from_value(json!({ "Name": "X4", "Brand": "Porsche" })).unwrap();
        assert!(car.id.is_nil());
        assert_eq!(car.year, 0);
        assert_eq!(car.engine, Engine::default());
    }

    #[test]
    fn malformed_id_fails_to_decode() {
        let res = serde_json::from_value::<Car>(json!({ "ID": "nope" }));
        assert!(res.is_err());
    }

    #[test]
    fn with_id_overrides_identity_only() {
        let car = Car {
            name: "Q2".to_string(),
            engine: Engine::reference(EngineId::new()),
            ..Car::default()
        };
        let id = CarId::new();
        let moved = car.clone().with_id(id);
        assert_eq!(moved.id, id);
        assert_eq!(moved.name, car.name);
        assert_eq!(moved.engine, car.engine);
    }
}
