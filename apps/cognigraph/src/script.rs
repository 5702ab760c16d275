//! # Operation Scripts
//!
//! A script is a JSON array of operations applied in order to one
//! in-memory [`EntityGraph`]:
//!
//! ```json
//! [
//!   {"op": "add_entity", "id": "entity1", "attributes": {"type": "Neuron"}},
//!   {"op": "add_relationship", "from": "entity1", "to": "entity2",
//!    "relationship_type": "ConnectsTo", "weight": 0.8},
//!   {"op": "stimulate", "id": "entity1"},
//!   {"op": "relationships", "id": "entity1"}
//! ]
//! ```
//!
//! Mutations produce no output. Each query produces one [`QueryOutput`].
//! Omitted weights and rates come from the runner's [`GraphConfig`].

use cognigraph_core::{
    Attributes, CogniGraphError, EntityGraph, EntityId, GraphConfig, GraphStore, LearningRate,
    PlasticityEngine,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// OPERATIONS
// =============================================================================

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum Operation {
    AddEntity {
        id: EntityId,
        #[serde(default)]
        attributes: Attributes,
    },
    AddRelationship {
        from: EntityId,
        to: EntityId,
        relationship_type: String,
        #[serde(default)]
        weight: Option<f64>,
    },
    Stimulate {
        id: EntityId,
        #[serde(default)]
        learning_rate: Option<f64>,
    },
    Attributes {
        id: EntityId,
    },
    Relationships {
        id: EntityId,
    },
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One relationship as seen from the queried entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipJson {
    pub neighbor: EntityId,
    pub relationship_type: String,
    #[serde(with = "ieee_weight")]
    pub weight: f64,
}

/// JSON has no NaN or infinity, so non-finite weights are written as the
/// strings `"NaN"`, `"inf"` and `"-inf"` and read back from them.
mod ieee_weight {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(weight: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if weight.is_finite() {
            serializer.serialize_f64(*weight)
        } else if weight.is_nan() {
            serializer.serialize_str("NaN")
        } else if weight.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid weight: {other}"))),
            },
        }
    }
}

/// Result of a query operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum QueryOutput {
    Attributes {
        id: EntityId,
        attributes: Attributes,
    },
    Relationships {
        id: EntityId,
        relationships: Vec<RelationshipJson>,
    },
}

// =============================================================================
// RUNNER
// =============================================================================

/// Parse a script from JSON text.
pub fn parse_script(json: &str) -> Result<Vec<Operation>, CogniGraphError> {
    serde_json::from_str(json).map_err(|e| CogniGraphError::SerializationError(e.to_string()))
}

/// Applies operations to an owned graph.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    graph: EntityGraph,
    config: GraphConfig,
}

impl ScriptRunner {
    /// Create a runner over an empty graph.
    #[must_use]
    pub fn new(config: GraphConfig) -> Self {
        Self {
            graph: EntityGraph::new(),
            config,
        }
    }

    /// The graph in its current state.
    #[must_use]
    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    /// Apply a single operation.
    pub fn apply(&mut self, operation: &Operation) -> Result<Option<QueryOutput>, CogniGraphError> {
        match operation {
            Operation::AddEntity { id, attributes } => {
                self.graph.add_entity(id.clone(), attributes.clone());
                Ok(None)
            }
            Operation::AddRelationship {
                from,
                to,
                relationship_type,
                weight,
            } => {
                self.graph.add_relationship(
                    from.clone(),
                    to.clone(),
                    relationship_type,
                    weight.unwrap_or(self.config.default_weight),
                );
                Ok(None)
            }
            Operation::Stimulate { id, learning_rate } => {
                let rate = learning_rate.map_or(self.config.learning_rate, LearningRate::new);
                PlasticityEngine::stimulate(&mut self.graph, id, rate)?;
                Ok(None)
            }
            Operation::Attributes { id } => Ok(Some(QueryOutput::Attributes {
                id: id.clone(),
                attributes: self.graph.get_entity_attributes(id)?.clone(),
            })),
            Operation::Relationships { id } => {
                let relationships = self
                    .graph
                    .get_relationships(id)?
                    .into_iter()
                    .map(|(neighbor, relationship_type, weight)| RelationshipJson {
                        neighbor,
                        relationship_type,
                        weight,
                    })
                    .collect();
                Ok(Some(QueryOutput::Relationships {
                    id: id.clone(),
                    relationships,
                }))
            }
        }
    }

    /// Apply operations in order, collecting query outputs.
    ///
    /// Stops at the first failing operation; earlier mutations are kept.
    pub fn run(&mut self, operations: &[Operation]) -> Result<Vec<QueryOutput>, CogniGraphError> {
        let mut outputs = Vec::new();
        for (index, operation) in operations.iter().enumerate() {
            match self.apply(operation) {
                Ok(Some(output)) => outputs.push(output),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(index, error = %e, "script operation failed");
                    return Err(e);
                }
            }
        }
        tracing::info!(
            operations = operations.len(),
            entities = self.graph.entity_count(),
            relationships = self.graph.relationship_count(),
            "script complete"
        );
        Ok(outputs)
    }
}

/// The Neuron/Concept walkthrough used by `cognigraph demo`.
#[must_use]
pub fn demo_script() -> Vec<Operation> {
    let type_attr = |value: &str| {
        let mut attrs = Attributes::new();
        attrs.insert("type".to_string(), value.into());
        attrs
    };

    vec![
        Operation::AddEntity {
            id: EntityId::new("entity1"),
            attributes: type_attr("Neuron"),
        },
        Operation::AddEntity {
            id: EntityId::new("entity2"),
            attributes: type_attr("Concept"),
        },
        Operation::AddRelationship {
            from: EntityId::new("entity1"),
            to: EntityId::new("entity2"),
            relationship_type: "ConnectsTo".to_string(),
            weight: Some(0.8),
        },
        Operation::Stimulate {
            id: EntityId::new("entity1"),
            learning_rate: None,
        },
        Operation::Attributes {
            id: EntityId::new("entity1"),
        },
        Operation::Relationships {
            id: EntityId::new("entity1"),
        },
    ]
}
