//! Sparse inbound payloads
//!
//! A payload field is either absent (key omitted), explicitly null, or set.
//! Absence is the only "leave unchanged" signal; null is rejected by
//! validation. `shipType` and `prodDate` stay in their wire forms so a bad
//! category or date is reported as a validation failure.

use serde::{Deserialize, Deserializer};

/// Tri-state payload field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }
}

// Only called when the key is present; `#[serde(default)]` covers absence.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

/// Ship fields as sent by a client for create or edit.
///
/// `id` and `rating` keys are not part of the payload and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipPayload {
    pub name: Patch<String>,
    pub planet: Patch<String>,
    pub ship_type: Patch<String>,
    /// Milliseconds since the Unix epoch
    pub prod_date: Patch<i64>,
    pub is_used: Patch<bool>,
    pub speed: Patch<f64>,
    pub crew_size: Patch<i64>,
}

impl ShipPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Value(name.into());
        self
    }

    pub fn planet(mut self, planet: impl Into<String>) -> Self {
        self.planet = Patch::Value(planet.into());
        self
    }

    pub fn ship_type(mut self, ship_type: impl Into<String>) -> Self {
        self.ship_type = Patch::Value(ship_type.into());
        self
    }

    pub fn prod_date(mut self, millis: i64) -> Self {
        self.prod_date = Patch::Value(millis);
        self
    }

    pub fn is_used(mut self, is_used: bool) -> Self {
        self.is_used = Patch::Value(is_used);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Patch::Value(speed);
        self
    }

    pub fn crew_size(mut self, crew_size: i64) -> Self {
        self.crew_size = Patch::Value(crew_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_omitted_keys_are_absent() {
        let payload: ShipPayload = serde_json::from_value(json!({"name": "Eagle"})).unwrap();
        assert_eq!(payload.name, Patch::Value("Eagle".to_string()));
        assert!(payload.planet.is_absent());
        assert!(payload.is_used.is_absent());
    }

    #[test]
    fn test_explicit_null_is_distinct_from_absent() {
        let payload: ShipPayload =
            serde_json::from_value(json!({"planet": null, "speed": 0.3})).unwrap();
        assert_eq!(payload.planet, Patch::Null);
        assert_eq!(payload.speed, Patch::Value(0.3));
        assert!(payload.name.is_absent());
    }

    #[test]
    fn test_id_and_rating_keys_ignored() {
        let payload: ShipPayload =
            serde_json::from_value(json!({"id": 99, "rating": 100.0})).unwrap();
        assert_eq!(payload, ShipPayload::default());
    }

    #[test]
    fn test_wire_names() {
        let payload: ShipPayload = serde_json::from_value(json!({
            "shipType": "MERCHANT",
            "prodDate": 1000,
            "isUsed": true,
            "crewSize": 12
        }))
        .unwrap();
        assert_eq!(payload.ship_type, Patch::Value("MERCHANT".to_string()));
        assert_eq!(payload.prod_date, Patch::Value(1000));
        assert_eq!(payload.is_used, Patch::Value(true));
        assert_eq!(payload.crew_size, Patch::Value(12));
    }
}
