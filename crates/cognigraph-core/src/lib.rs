//! # cognigraph-core
//!
//! The entity graph for CogniGraph - THE LOGIC.
//!
//! This crate stores cognitive entities with arbitrary attribute maps and the
//! undirected, typed, weighted relationships between them. Its one mutation
//! beyond insertion is the neuroplasticity step: every relationship touching
//! an entity is reinforced by a learning rate.
//!
//! ## Architectural Constraints
//!
//! - In-memory only: no persistence, no async, no network dependencies
//! - Simple graph: at most one relationship per unordered pair of entities
//! - Deterministic: neighbor lists come back in ascending `EntityId` order
//!
//! ## Example
//!
//! ```
//! use cognigraph_core::{AttributeValue, Attributes, EntityGraph, EntityId, GraphStore};
//!
//! let mut graph = EntityGraph::new();
//! let mut attrs = Attributes::new();
//! attrs.insert("type".into(), AttributeValue::from("Neuron"));
//! graph.add_entity(EntityId::new("entity1"), attrs);
//! graph.add_relationship(EntityId::new("entity1"), EntityId::new("entity2"), "ConnectsTo", 0.8);
//! graph.simulate_neuroplasticity_default(&EntityId::new("entity1")).expect("known entity");
//!
//! let rels = graph.get_relationships(&EntityId::new("entity1")).expect("known entity");
//! assert!((rels[0].2 - 0.9).abs() < 1e-9);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod graph;
pub mod plasticity;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{AttributeValue, Attributes, CogniGraphError, EdgeKey, EntityId, Relationship};

// =============================================================================
// RE-EXPORTS: Graph Engine
// =============================================================================

pub use config::GraphConfig;
pub use graph::{EntityGraph, GraphStore};
pub use plasticity::{LearningRate, PlasticityEngine};
