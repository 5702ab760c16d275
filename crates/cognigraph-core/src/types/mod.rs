//! # Core Type Definitions
//!
//! This module contains all core types for the CogniGraph entity graph:
//! - Entity identifiers (`EntityId`) and unordered edge keys (`EdgeKey`)
//! - Attribute payloads (`AttributeValue`, `Attributes`)
//! - Relationship records (`Relationship`)
//! - Error types (`CogniGraphError`)
//!
//! ## Ordering
//!
//! Identifiers implement `Ord` so that every collection in the graph can be a
//! `BTreeMap`/`BTreeSet`, which makes neighbor iteration order deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

// =============================================================================
// ENTITY IDENTIFIERS
// =============================================================================

/// Opaque identifier of a cognitive entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create a new entity id from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Key of an undirected edge: the endpoint pair stored in ascending order.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so one key exists per
/// unordered pair. A self-loop has `low == high`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    low: EntityId,
    high: EntityId,
}

impl EdgeKey {
    /// Build the normalized key for the pair `(a, b)`.
    #[must_use]
    pub fn new(a: EntityId, b: EntityId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller endpoint.
    #[must_use]
    pub fn low(&self) -> &EntityId {
        &self.low
    }

    /// The larger endpoint.
    #[must_use]
    pub fn high(&self) -> &EntityId {
        &self.high
    }

    /// Whether both endpoints are the same entity.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }

    /// Given one endpoint, return the other. `None` if `entity` is not an endpoint.
    #[must_use]
    pub fn other(&self, entity: &EntityId) -> Option<&EntityId> {
        if *entity == self.low {
            Some(&self.high)
        } else if *entity == self.high {
            Some(&self.low)
        } else {
            None
        }
    }
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// A dynamically-typed attribute value supplied by the caller.
///
/// Serialized untagged, so `null`, `true`, `3`, `3.5`, `"Neuron"`, `[...]` and
/// `{"k": ...}` map directly onto the matching variant. Variant order matters:
/// integers that fit `i64` stay `Integer`, everything else numeric is `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<AttributeValue>),
    Map(BTreeMap<String, AttributeValue>),
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(items: Vec<AttributeValue>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, AttributeValue>> for AttributeValue {
    fn from(m: BTreeMap<String, AttributeValue>) -> Self {
        Self::Map(m)
    }
}

/// Attribute record of an entity: name -> value.
pub type Attributes = BTreeMap<String, AttributeValue>;

// =============================================================================
// RELATIONSHIP
// =============================================================================

/// The data carried by one undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Free-form type label, e.g. `"ConnectsTo"`.
    pub relationship_type: String,
    /// Connection strength. Any `f64` is accepted, including non-finite values.
    pub weight: f64,
}

impl Relationship {
    /// Create a new relationship record.
    #[must_use]
    pub fn new(relationship_type: impl Into<String>, weight: f64) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            weight,
        }
    }

    /// Add `delta` to the weight in place.
    pub fn reinforce(&mut self, delta: f64) {
        self.weight += delta;
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in CogniGraph.
///
/// Graph mutations never fail; only lookups of absent entities and the
/// configuration/script layer produce errors.
#[derive(Debug, Error)]
pub enum CogniGraphError {
    /// The requested entity is not present in the graph.
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A configuration value could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_is_unordered() {
        let ab = EdgeKey::new(EntityId::new("a"), EntityId::new("b"));
        let ba = EdgeKey::new(EntityId::new("b"), EntityId::new("a"));
        assert_eq!(ab, ba);
        assert_eq!(ab.low().as_str(), "a");
        assert_eq!(ab.high().as_str(), "b");
    }

    #[test]
    fn edge_key_other_endpoint() {
        let key = EdgeKey::new(EntityId::new("x"), EntityId::new("y"));
        assert_eq!(key.other(&EntityId::new("x")), Some(&EntityId::new("y")));
        assert_eq!(key.other(&EntityId::new("y")), Some(&EntityId::new("x")));
        assert_eq!(key.other(&EntityId::new("z")), None);
    }

    #[test]
    fn self_loop_key() {
        let key = EdgeKey::new(EntityId::new("n"), EntityId::new("n"));
        assert!(key.is_self_loop());
        assert_eq!(key.other(&EntityId::new("n")), Some(&EntityId::new("n")));
    }

    #[test]
    fn relationship_reinforce_adds_delta() {
        let mut rel = Relationship::new("ConnectsTo", 0.5);
        rel.reinforce(0.25);
        assert_eq!(rel.weight, 0.75);
        assert_eq!(rel.relationship_type, "ConnectsTo");
    }

    #[test]
    fn relationship_preserves_non_finite_weight() {
        let mut rel = Relationship::new("Odd", f64::INFINITY);
        rel.reinforce(1.0);
        assert!(rel.weight.is_infinite());
    }

    #[test]
    fn attribute_value_deserializes_untagged() {
        let json = r#"{"type":"Neuron","firing":true,"rate":2.5,"meta":{"layer":"L4"}}"#;
        let attrs: Attributes = serde_json::from_str(json).expect("parse");

        assert_eq!(attrs.get("type"), Some(&AttributeValue::from("Neuron")));
        assert_eq!(attrs.get("firing"), Some(&AttributeValue::Bool(true)));
        assert_eq!(attrs.get("rate"), Some(&AttributeValue::Number(2.5)));
        let mut meta = BTreeMap::new();
        meta.insert("layer".to_string(), AttributeValue::from("L4"));
        assert_eq!(attrs.get("meta"), Some(&AttributeValue::Map(meta)));
    }

    #[test]
    fn integer_attribute_stays_integer() {
        let json = r#"{"rank":3,"big":9007199254740993,"neg":-4}"#;
        let attrs: Attributes = serde_json::from_str(json).expect("parse");

        assert_eq!(attrs.get("rank"), Some(&AttributeValue::Integer(3)));
        assert_eq!(
            attrs.get("big"),
            Some(&AttributeValue::Integer(9_007_199_254_740_993))
        );
        assert_eq!(attrs.get("neg"), Some(&AttributeValue::Integer(-4)));
        assert_eq!(serde_json::to_string(&attrs).expect("write"), json_sorted(json));
    }

    #[test]
    fn list_and_null_attributes_round_trip() {
        let json = r#"{"n":null,"tags":["x",1,[true]]}"#;
        let attrs: Attributes = serde_json::from_str(json).expect("parse");

        assert_eq!(attrs.get("n"), Some(&AttributeValue::Null));
        assert_eq!(
            attrs.get("tags"),
            Some(&AttributeValue::List(vec![
                AttributeValue::from("x"),
                AttributeValue::Integer(1),
                AttributeValue::List(vec![AttributeValue::Bool(true)]),
            ]))
        );
        assert_eq!(serde_json::to_string(&attrs).expect("write"), json);
    }

    #[test]
    fn float_attribute_stays_float() {
        let attrs: Attributes = serde_json::from_str(r#"{"rate":3.0}"#).expect("parse");
        assert_eq!(attrs.get("rate"), Some(&AttributeValue::Number(3.0)));
        assert_eq!(serde_json::to_string(&attrs).expect("write"), r#"{"rate":3.0}"#);
    }

    /// Re-serialize through a BTreeMap so key order matches `Attributes` output.
    fn json_sorted(json: &str) -> String {
        let map: BTreeMap<String, serde_json::Value> = serde_json::from_str(json).expect("parse");
        serde_json::to_string(&map).expect("write")
    }

    #[test]
    fn not_found_error_names_entity() {
        let err = CogniGraphError::EntityNotFound(EntityId::new("ghost"));
        assert_eq!(err.to_string(), "Entity not found: ghost");
    }
}
