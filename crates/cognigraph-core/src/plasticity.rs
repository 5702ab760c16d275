//! # Plasticity Engine
//!
//! Consolidates weight-reinforcement operations for the CogniGraph CORE.
//!
//! One plasticity step adds a fixed learning rate to every relationship
//! touching the stimulated entity. Weights are never clamped or decayed.

use crate::graph::{EntityGraph, GraphStore};
use crate::primitives::DEFAULT_LEARNING_RATE;
use crate::{CogniGraphError, EntityId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Amount added to each incident edge per plasticity step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearningRate(pub f64);

impl LearningRate {
    /// Create a new learning rate.
    #[must_use]
    pub const fn new(rate: f64) -> Self {
        Self(rate)
    }

    /// Get the raw rate.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for LearningRate {
    fn default() -> Self {
        Self(DEFAULT_LEARNING_RATE)
    }
}

/// The PlasticityEngine applies learning-rate reinforcement to a graph.
pub struct PlasticityEngine;

impl PlasticityEngine {
    /// Stimulate a single entity and return how many relationships were reinforced.
    pub fn stimulate(
        graph: &mut EntityGraph,
        entity: &EntityId,
        rate: LearningRate,
    ) -> Result<usize, CogniGraphError> {
        let touched = graph.neighbors(entity)?.len();
        graph.simulate_neuroplasticity(entity, rate.value())?;
        Ok(touched)
    }

    /// Stimulate each entity in order.
    ///
    /// Stops at the first unknown entity; steps already applied are kept.
    /// Returns the total number of reinforcements performed.
    pub fn stimulate_sequence(
        graph: &mut EntityGraph,
        entities: &[EntityId],
        rate: LearningRate,
    ) -> Result<usize, CogniGraphError> {
        let mut total = 0usize;
        for entity in entities {
            total = total.saturating_add(Self::stimulate(graph, entity, rate)?);
        }
        debug!(steps = entities.len(), total, "stimulate_sequence");
        Ok(total)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn id(s: &str) -> EntityId {
        EntityId::new(s)
    }

    fn weight(graph: &EntityGraph, a: &str, b: &str) -> f64 {
        graph
            .get_relationship(&id(a), &id(b))
            .map(|r| r.weight)
            .unwrap_or(f64::NAN)
    }

    #[test]
    fn default_rate_is_one_tenth() {
        assert_eq!(LearningRate::default().value(), 0.1);
    }

    #[test]
    fn stimulate_reports_touched_edges() {
        let mut graph = EntityGraph::new();
        graph.add_relationship(id("a"), id("b"), "R", 1.0);
        graph.add_relationship(id("a"), id("c"), "R", 1.0);

        let touched =
            PlasticityEngine::stimulate(&mut graph, &id("a"), LearningRate::new(0.5))
                .expect("stimulate");

        assert_eq!(touched, 2);
        assert!((weight(&graph, "a", "b") - 1.5).abs() < EPS);
        assert!((weight(&graph, "c", "a") - 1.5).abs() < EPS);
    }

    #[test]
    fn shared_edge_reinforced_from_both_ends() {
        let mut graph = EntityGraph::new();
        graph.add_relationship(id("a"), id("b"), "R", 0.0);

        let total = PlasticityEngine::stimulate_sequence(
            &mut graph,
            &[id("a"), id("b")],
            LearningRate::default(),
        )
        .expect("sequence");

        assert_eq!(total, 2);
        assert!((weight(&graph, "a", "b") - 0.2).abs() < EPS);
    }

    #[test]
    fn sequence_stops_at_unknown_entity() {
        let mut graph = EntityGraph::new();
        graph.add_relationship(id("a"), id("b"), "R", 1.0);

        let result = PlasticityEngine::stimulate_sequence(
            &mut graph,
            &[id("a"), id("ghost"), id("b")],
            LearningRate::new(1.0),
        );

        assert!(matches!(result, Err(CogniGraphError::EntityNotFound(_))));
        // The step for "a" stands; "b" was never reached.
        assert!((weight(&graph, "a", "b") - 2.0).abs() < EPS);
    }
}
