//! Core contracts for Aerogen.
//!
//! This crate defines the configuration surface, the AIMS/AMOS domain
//! records, and the record-to-row conversion shared by every sink.

pub mod aims;
pub mod amos;
pub mod config;
pub mod record;

pub use aims::{FlightSlot, MaintenanceSlot, Manufacturer, Reporter, Slot};
pub use amos::{
    Attachment, EventKind, ForecastedOrder, FrequencyUnit, MaintenanceEvent, MelCategory,
    OperationalInterruption, ReportKind, TechnicalLogbookOrder, WorkOrder, WorkOrderKind,
    WorkPackage,
};
pub use config::{ConfigError, GeneratorConfig};
pub use record::{Record, TableRows};
