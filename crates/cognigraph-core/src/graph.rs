//! # Entity Graph
//!
//! The in-memory storage for CogniGraph CORE.
//!
//! This module implements the `GraphStore` trait on `EntityGraph`, an
//! undirected simple graph: at most one relationship per unordered pair of
//! entities, self-loops allowed.
//! All data structures use `BTreeMap`/`BTreeSet` for deterministic ordering.

use crate::primitives::{DEFAULT_LEARNING_RATE, DEFAULT_WEIGHT};
use crate::{Attributes, CogniGraphError, EdgeKey, EntityId, Relationship};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

// =============================================================================
// GRAPHSTORE TRAIT
// =============================================================================

/// The GraphStore trait defines the entity graph operations.
///
/// Insertions always succeed. Operations that require an existing entity
/// return `CogniGraphError::EntityNotFound` when it is absent.
pub trait GraphStore {
    /// Insert an entity, or merge `attributes` into an existing one.
    ///
    /// Keys present in `attributes` overwrite stored values; stored keys not
    /// mentioned are kept.
    fn add_entity(&mut self, entity_id: EntityId, attributes: Attributes);

    /// Insert or replace the relationship between `entity1` and `entity2`.
    ///
    /// Missing endpoints are created with empty attributes. When both ids are
    /// equal a self-loop is stored.
    fn add_relationship(
        &mut self,
        entity1: EntityId,
        entity2: EntityId,
        relationship_type: &str,
        weight: f64,
    );

    /// Add `learning_rate` to the weight of every relationship touching `entity_id`.
    fn simulate_neuroplasticity(
        &mut self,
        entity_id: &EntityId,
        learning_rate: f64,
    ) -> Result<(), CogniGraphError>;

    /// Get the attribute record of an entity.
    fn get_entity_attributes(&self, entity_id: &EntityId) -> Result<&Attributes, CogniGraphError>;

    /// Get `(neighbor, relationship_type, weight)` for every neighbor, in
    /// ascending neighbor id order.
    fn get_relationships(
        &self,
        entity_id: &EntityId,
    ) -> Result<Vec<(EntityId, String, f64)>, CogniGraphError>;

    /// Get the ids of all direct neighbors, in ascending order.
    fn neighbors(&self, entity_id: &EntityId) -> Result<Vec<EntityId>, CogniGraphError>;

    /// Get the relationship stored for the unordered pair `(a, b)`.
    fn get_relationship(&self, a: &EntityId, b: &EntityId) -> Option<&Relationship>;

    /// Check if an entity exists in the graph.
    fn contains_entity(&self, entity_id: &EntityId) -> bool;

    /// Get the total number of entities.
    fn entity_count(&self) -> usize;

    /// Get the total number of relationships (unordered pairs).
    fn relationship_count(&self) -> usize;
}

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// The main in-memory entity graph.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    /// Node storage: EntityId -> attribute record
    entities: BTreeMap<EntityId, Attributes>,

    /// Adjacency: entity -> neighbors (symmetric; a self-loop lists the entity itself)
    adjacency: BTreeMap<EntityId, BTreeSet<EntityId>>,

    /// Edge storage: one record per unordered pair
    relationships: BTreeMap<EdgeKey, Relationship>,
}

impl EntityGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity with no attributes.
    pub fn add_entity_bare(&mut self, entity_id: EntityId) {
        self.add_entity(entity_id, Attributes::new());
    }

    /// Insert a relationship with [`DEFAULT_WEIGHT`].
    pub fn add_relationship_default(
        &mut self,
        entity1: EntityId,
        entity2: EntityId,
        relationship_type: &str,
    ) {
        self.add_relationship(entity1, entity2, relationship_type, DEFAULT_WEIGHT);
    }

    /// Run one plasticity step with [`DEFAULT_LEARNING_RATE`].
    pub fn simulate_neuroplasticity_default(
        &mut self,
        entity_id: &EntityId,
    ) -> Result<(), CogniGraphError> {
        self.simulate_neuroplasticity(entity_id, DEFAULT_LEARNING_RATE)
    }

    /// Get all entities with their attributes in deterministic order.
    pub fn entities(&self) -> impl Iterator<Item = (&EntityId, &Attributes)> {
        self.entities.iter()
    }

    /// Get all relationships in deterministic order, each pair once.
    pub fn relationships(&self) -> impl Iterator<Item = (&EdgeKey, &Relationship)> {
        self.relationships.iter()
    }

    fn require(&self, entity_id: &EntityId) -> Result<(), CogniGraphError> {
        if self.entities.contains_key(entity_id) {
            Ok(())
        } else {
            Err(CogniGraphError::EntityNotFound(entity_id.clone()))
        }
    }

    /// Neighbors of an entity known to exist; isolated entities have none.
    fn neighbors_internal(&self, entity_id: &EntityId) -> impl Iterator<Item = &EntityId> {
        self.adjacency.get(entity_id).into_iter().flatten()
    }
}

impl GraphStore for EntityGraph {
    fn add_entity(&mut self, entity_id: EntityId, attributes: Attributes) {
        debug!(entity = %entity_id, keys = attributes.len(), "add_entity");
        self.entities.entry(entity_id).or_default().extend(attributes);
    }

    fn add_relationship(
        &mut self,
        entity1: EntityId,
        entity2: EntityId,
        relationship_type: &str,
        weight: f64,
    ) {
        debug!(
            from = %entity1,
            to = %entity2,
            relationship_type,
            weight,
            "add_relationship"
        );

        self.entities.entry(entity1.clone()).or_default();
        self.entities.entry(entity2.clone()).or_default();

        self.adjacency
            .entry(entity1.clone())
            .or_default()
            .insert(entity2.clone());
        self.adjacency
            .entry(entity2.clone())
            .or_default()
            .insert(entity1.clone());

        self.relationships.insert(
            EdgeKey::new(entity1, entity2),
            Relationship::new(relationship_type, weight),
        );
    }

    fn simulate_neuroplasticity(
        &mut self,
        entity_id: &EntityId,
        learning_rate: f64,
    ) -> Result<(), CogniGraphError> {
        self.require(entity_id)?;

        let Some(neighbors) = self.adjacency.get(entity_id) else {
            trace!(entity = %entity_id, "simulate_neuroplasticity: no neighbors");
            return Ok(());
        };

        for neighbor in neighbors {
            let key = EdgeKey::new(entity_id.clone(), neighbor.clone());
            if let Some(relationship) = self.relationships.get_mut(&key) {
                relationship.reinforce(learning_rate);
            }
        }

        debug!(
            entity = %entity_id,
            learning_rate,
            edges = neighbors.len(),
            "simulate_neuroplasticity"
        );
        Ok(())
    }

    fn get_entity_attributes(&self, entity_id: &EntityId) -> Result<&Attributes, CogniGraphError> {
        trace!(entity = %entity_id, "get_entity_attributes");
        self.entities
            .get(entity_id)
            .ok_or_else(|| CogniGraphError::EntityNotFound(entity_id.clone()))
    }

    fn get_relationships(
        &self,
        entity_id: &EntityId,
    ) -> Result<Vec<(EntityId, String, f64)>, CogniGraphError> {
        self.require(entity_id)?;
        trace!(entity = %entity_id, "get_relationships");

        Ok(self
            .neighbors_internal(entity_id)
            .filter_map(|neighbor| {
                self.get_relationship(entity_id, neighbor).map(|rel| {
                    (
                        neighbor.clone(),
                        rel.relationship_type.clone(),
                        rel.weight,
                    )
                })
            })
            .collect())
    }

    fn neighbors(&self, entity_id: &EntityId) -> Result<Vec<EntityId>, CogniGraphError> {
        self.require(entity_id)?;
        Ok(self.neighbors_internal(entity_id).cloned().collect())
    }

    fn get_relationship(&self, a: &EntityId, b: &EntityId) -> Option<&Relationship> {
        self.relationships.get(&EdgeKey::new(a.clone(), b.clone()))
    }

    fn contains_entity(&self, entity_id: &EntityId) -> bool {
        self.entities.contains_key(entity_id)
    }

    fn entity_count(&self) -> usize {
        self.entities.len()
    }

    fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
