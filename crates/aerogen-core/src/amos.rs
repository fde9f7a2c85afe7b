//! AMOS (maintenance operations) records: maintenance events, work orders,
//! work packages, and attachments.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

use crate::record::{Record, duration_secs, text, timestamp};

/// Kind of a maintenance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Delay,
    Safety,
    AircraftOnGround,
    Maintenance,
    Revision,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Delay => "Delay",
            EventKind::Safety => "Safety",
            EventKind::AircraftOnGround => "AircraftOnGround",
            EventKind::Maintenance => "Maintenance",
            EventKind::Revision => "Revision",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unplanned or planned maintenance occurrence on one aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceEvent {
    pub maintenance_id: String,
    pub aircraft_registration: String,
    pub airport: String,
    /// ATA subsystem code.
    pub subsystem: String,
    pub start_time: NaiveDateTime,
    pub duration: TimeDelta,
    pub kind: EventKind,
}

impl MaintenanceEvent {
    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time + self.duration
    }
}

impl Record for MaintenanceEvent {
    const KIND: &'static str = "maintenance_events";

    fn header() -> &'static [&'static str] {
        &[
            "maintenance_id",
            "aircraft_registration",
            "airport",
            "subsystem",
            "start_time",
            "duration",
            "kind",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(&self.maintenance_id),
            text(&self.aircraft_registration),
            text(&self.airport),
            text(&self.subsystem),
            timestamp(&self.start_time),
            duration_secs(&self.duration),
            text(self.kind),
        ]
    }
}

/// A maintenance event raised by a delayed flight.
///
/// Inherits its flight's identifier, delay code, departure airport, and
/// scheduled departure time.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationalInterruption {
    pub event: MaintenanceEvent,
    pub flight_id: String,
    pub departure: NaiveDateTime,
    pub delay_code: String,
}

impl Record for OperationalInterruption {
    const KIND: &'static str = "operational_interruptions";

    fn header() -> &'static [&'static str] {
        &[
            "maintenance_id",
            "aircraft_registration",
            "airport",
            "subsystem",
            "start_time",
            "duration",
            "kind",
            "flight_id",
            "departure",
            "delay_code",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut values = self.event.values();
        values.push(text(&self.flight_id));
        values.push(timestamp(&self.departure));
        values.push(text(&self.delay_code));
        values
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkOrderKind {
    Forecast,
    TechnicalLogBook,
}

impl WorkOrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderKind::Forecast => "Forecast",
            WorkOrderKind::TechnicalLogBook => "TechnicalLogBook",
        }
    }
}

impl fmt::Display for WorkOrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by both work order variants, inherited from the
/// originating maintenance event.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrder {
    pub work_order_id: i64,
    pub aircraft_registration: String,
    pub execution_date: NaiveDateTime,
    pub execution_place: String,
    pub work_package_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    Flights,
    Days,
    Miles,
}

impl FrequencyUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyUnit::Flights => "Flights",
            FrequencyUnit::Days => "Days",
            FrequencyUnit::Miles => "Miles",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proactively planned maintenance task.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastedOrder {
    pub order: WorkOrder,
    pub deadline: NaiveDateTime,
    pub planned: NaiveDateTime,
    pub frequency: i64,
    pub frequency_units: FrequencyUnit,
    pub forecasted_man_hours: i64,
}

impl Record for ForecastedOrder {
    const KIND: &'static str = "forecasted_orders";

    fn header() -> &'static [&'static str] {
        &[
            "work_order_id",
            "aircraft_registration",
            "execution_date",
            "execution_place",
            "work_package_id",
            "kind",
            "deadline",
            "planned",
            "frequency",
            "frequency_units",
            "forecasted_man_hours",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(self.order.work_order_id),
            text(&self.order.aircraft_registration),
            timestamp(&self.order.execution_date),
            text(&self.order.execution_place),
            text(self.order.work_package_id),
            text(WorkOrderKind::Forecast),
            timestamp(&self.deadline),
            timestamp(&self.planned),
            text(self.frequency),
            text(self.frequency_units),
            text(self.forecasted_man_hours),
        ]
    }
}

/// Minimum-equipment-list severity class, bounding repair deferral time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MelCategory {
    A,
    B,
    C,
    D,
}

impl MelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MelCategory::A => "A",
            MelCategory::B => "B",
            MelCategory::C => "C",
            MelCategory::D => "D",
        }
    }
}

impl fmt::Display for MelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Pirep,
    Marep,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Pirep => "PIREP",
            ReportKind::Marep => "MAREP",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reactively logged maintenance task.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalLogbookOrder {
    pub order: WorkOrder,
    pub reporter_class: ReportKind,
    pub reporter_id: i64,
    pub reporting_date: NaiveDateTime,
    pub due: NaiveDateTime,
    pub deferred: bool,
    pub mel_category: MelCategory,
}

impl Record for TechnicalLogbookOrder {
    const KIND: &'static str = "tlb_orders";

    fn header() -> &'static [&'static str] {
        &[
            "work_order_id",
            "aircraft_registration",
            "execution_date",
            "execution_place",
            "work_package_id",
            "kind",
            "reporter_class",
            "reporter_id",
            "reporting_date",
            "due",
            "deferred",
            "mel_category",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(self.order.work_order_id),
            text(&self.order.aircraft_registration),
            timestamp(&self.order.execution_date),
            text(&self.order.execution_place),
            text(self.order.work_package_id),
            text(WorkOrderKind::TechnicalLogBook),
            text(self.reporter_class),
            text(self.reporter_id),
            timestamp(&self.reporting_date),
            timestamp(&self.due),
            text(self.deferred),
            text(self.mel_category),
        ]
    }
}

/// Grouping container for work orders executed together.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkPackage {
    pub work_package_id: i64,
    pub execution_date: NaiveDateTime,
    pub execution_place: String,
}

impl Record for WorkPackage {
    const KIND: &'static str = "work_packages";

    fn header() -> &'static [&'static str] {
        &["work_package_id", "execution_date", "execution_place"]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(self.work_package_id),
            timestamp(&self.execution_date),
            text(&self.execution_place),
        ]
    }
}

/// Document attached to a maintenance event or interruption.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// Opaque file reference.
    pub file: String,
    /// `maintenance_id` of the documented event.
    pub event: String,
}

impl Record for Attachment {
    const KIND: &'static str = "attachments";

    fn header() -> &'static [&'static str] {
        &["file", "event"]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![text(&self.file), text(&self.event)]
    }
}
