//! AIMS (flight operations) records: fleet lookup data, personnel, and
//! scheduled slots.

use chrono::NaiveDateTime;

use crate::record::{Record, opt_text, opt_timestamp, text, timestamp};

/// Fleet member lookup entry, keyed by registration code.
#[derive(Debug, Clone, PartialEq)]
pub struct Manufacturer {
    pub aircraft_reg_code: String,
    pub manufacturer_serial_number: String,
    pub aircraft_model: String,
    pub aircraft_manufacturer: String,
}

impl Record for Manufacturer {
    const KIND: &'static str = "manufacturers";

    fn header() -> &'static [&'static str] {
        &[
            "aircraft_reg_code",
            "manufacturer_serial_number",
            "aircraft_model",
            "aircraft_manufacturer",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(&self.aircraft_reg_code),
            text(&self.manufacturer_serial_number),
            text(&self.aircraft_model),
            text(&self.aircraft_manufacturer),
        ]
    }
}

/// Maintenance personnel entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Reporter {
    pub reporter_id: i64,
    pub airport: String,
}

impl Record for Reporter {
    const KIND: &'static str = "maintenance_personnel";

    fn header() -> &'static [&'static str] {
        &["reporter_id", "airport"]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![text(self.reporter_id), text(&self.airport)]
    }
}

/// Fields shared by every scheduled time block of an aircraft.
///
/// Invariant: `scheduled_departure < scheduled_arrival`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub aircraft_registration: String,
    pub scheduled_departure: NaiveDateTime,
    pub scheduled_arrival: NaiveDateTime,
}

/// A scheduled flight.
///
/// Cancelled flights carry no actual times and no delay code; for the
/// rest, actual times are the scheduled times shifted by one delay.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSlot {
    pub slot: Slot,
    pub flight_id: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub actual_departure: Option<NaiveDateTime>,
    pub actual_arrival: Option<NaiveDateTime>,
    pub cancelled: bool,
    pub delay_code: Option<String>,
    pub passengers: i64,
    pub cabin_crew: i64,
    pub flight_crew: i64,
}

impl Record for FlightSlot {
    const KIND: &'static str = "flight_slots";

    fn header() -> &'static [&'static str] {
        &[
            "aircraft_registration",
            "scheduled_departure",
            "scheduled_arrival",
            "kind",
            "flight_id",
            "departure_airport",
            "arrival_airport",
            "actual_departure",
            "actual_arrival",
            "cancelled",
            "delay_code",
            "passengers",
            "cabin_crew",
            "flight_crew",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(&self.slot.aircraft_registration),
            timestamp(&self.slot.scheduled_departure),
            timestamp(&self.slot.scheduled_arrival),
            text("Flight"),
            text(&self.flight_id),
            text(&self.departure_airport),
            text(&self.arrival_airport),
            opt_timestamp(&self.actual_departure),
            opt_timestamp(&self.actual_arrival),
            text(self.cancelled),
            opt_text(&self.delay_code),
            text(self.passengers),
            text(self.cabin_crew),
            text(self.flight_crew),
        ]
    }
}

/// A scheduled maintenance block.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceSlot {
    pub slot: Slot,
    pub programmed: bool,
}

impl Record for MaintenanceSlot {
    const KIND: &'static str = "maintenance_slots";

    fn header() -> &'static [&'static str] {
        &[
            "aircraft_registration",
            "scheduled_departure",
            "scheduled_arrival",
            "kind",
            "programmed",
        ]
    }

    fn values(&self) -> Vec<Option<String>> {
        vec![
            text(&self.slot.aircraft_registration),
            timestamp(&self.slot.scheduled_departure),
            timestamp(&self.slot.scheduled_arrival),
            text("Maintenance"),
            text(self.programmed),
        ]
    }
}
