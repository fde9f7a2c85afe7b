//! Dependent random-entity generation for the AIMS/AMOS aviation domain.
//!
//! This crate derives each entity from its parent entities while keeping
//! the cross-entity business rules intact (temporal containment,
//! referential consistency, no-overlap correction), with a configurable
//! good/noisy/bad quality mix for negative testing.

pub mod errors;
pub mod facts;
pub mod factory;
pub mod generator;
pub mod output;
pub mod passes;
pub mod quality;
pub mod report;

pub use errors::GenerationError;
pub use facts::AirportFacts;
pub use generator::{AircraftGenerator, Dataset};
pub use quality::{Quality, QualityWeights};
pub use report::GenerationReport;
