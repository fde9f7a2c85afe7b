//! Entity factories.
//!
//! One factory per entity kind. Each composes primitive facts with
//! references to already-generated parent entities and enforces the
//! business rule linking the new entity to its parents. Factories assume
//! valid, fully-populated parents; a missing required parent field is a
//! precondition violation and fails the run.

use chrono::TimeDelta;

use aerogen_core::aims::{FlightSlot, MaintenanceSlot, Manufacturer, Reporter, Slot};
use aerogen_core::amos::{
    Attachment, EventKind, ForecastedOrder, MaintenanceEvent, OperationalInterruption,
    TechnicalLogbookOrder, WorkOrder, WorkPackage,
};
use aerogen_core::config::GeneratorConfig;

use crate::errors::GenerationError;
use crate::facts::AirportFacts;
use crate::quality::Quality;

/// Longest allowed Revision event, in days, independent of its slot's span.
const MAX_REVISION_DAYS: i64 = 31;

/// Shortest scheduled block; keeps `departure < arrival` strict.
const MIN_BLOCK_MINUTES: i64 = 30;

pub fn manufacturer(facts: &mut AirportFacts, quality: Quality) -> Manufacturer {
    Manufacturer {
        aircraft_reg_code: facts.registration_code(quality),
        manufacturer_serial_number: facts.serial_number(quality),
        aircraft_model: facts.aircraft_model(quality),
        aircraft_manufacturer: facts.aircraft_manufacturer(quality),
    }
}

pub fn reporter(facts: &mut AirportFacts, quality: Quality) -> Reporter {
    Reporter {
        reporter_id: facts.random_int(9999),
        airport: facts.airport_code(quality),
    }
}

/// Build one flight slot on an aircraft from the fleet.
///
/// Bad quality widens every numeric bound by a 5-10x factor, re-randomizes
/// the registration (severing the manufacturer link), and swaps the actual
/// departure/arrival pair to plant arrival-before-departure rows.
pub fn flight_slot(
    facts: &mut AirportFacts,
    config: &GeneratorConfig,
    manufacturer: &Manufacturer,
    quality: Quality,
) -> FlightSlot {
    let multiplier = match quality {
        Quality::Good | Quality::Noisy => 1,
        Quality::Bad => facts.int_between(5, 10),
    };

    let max_duration = config.max_flight_duration_hours * multiplier;
    let max_delay = config.max_delay_minutes * multiplier;

    let (route_origin, route_destination) = facts.flight_route();
    let origin = match quality {
        Quality::Good => route_origin,
        _ => facts.airport_code(quality),
    };
    let destination = match quality {
        Quality::Good => route_destination,
        _ => facts.airport_code(quality),
    };

    let flight_number = facts.flight_number(quality);
    let passengers = facts.int_between(
        config.min_passengers * multiplier,
        config.max_passengers * multiplier,
    );
    let cabin_crew = facts.int_between(
        config.min_cabin_crew * multiplier,
        config.max_cabin_crew * multiplier,
    );
    let flight_crew = facts.int_between(
        config.min_flight_crew * multiplier,
        config.max_flight_crew * multiplier,
    );

    let scheduled_departure = facts.flight_timestamp(quality);
    let block = TimeDelta::minutes(facts.int_between(MIN_BLOCK_MINUTES, max_duration * 60));
    let scheduled_arrival = scheduled_departure + block;

    let mut aircraft_registration = manufacturer.aircraft_reg_code.clone();

    let cancelled = facts.coin();
    let (mut actual_departure, mut actual_arrival, delay_code) = if cancelled {
        (None, None, None)
    } else {
        let delay = TimeDelta::minutes(facts.random_int(max_delay));
        (
            Some(scheduled_departure + delay),
            Some(scheduled_arrival + delay),
            Some(facts.delay_code(quality)),
        )
    };

    let flight_id = format!(
        "{}-{}-{}-{}-{}",
        scheduled_departure.format("%d%m%y"),
        origin,
        destination,
        flight_number,
        aircraft_registration,
    );

    if quality == Quality::Bad {
        std::mem::swap(&mut actual_departure, &mut actual_arrival);
        aircraft_registration = facts.registration_code(quality);
    }

    FlightSlot {
        slot: Slot {
            aircraft_registration,
            scheduled_departure,
            scheduled_arrival,
        },
        flight_id,
        departure_airport: origin,
        arrival_airport: destination,
        actual_departure,
        actual_arrival,
        cancelled,
        delay_code,
        passengers,
        cabin_crew,
        flight_crew,
    }
}

pub fn maintenance_slot(
    facts: &mut AirportFacts,
    config: &GeneratorConfig,
    manufacturer: &Manufacturer,
    quality: Quality,
) -> MaintenanceSlot {
    let scheduled_departure = facts.flight_timestamp(quality);
    let span = TimeDelta::minutes(facts.int_between(
        MIN_BLOCK_MINUTES,
        config.max_maintenance_slot_days * 24 * 60,
    ));

    MaintenanceSlot {
        slot: Slot {
            aircraft_registration: manufacturer.aircraft_reg_code.clone(),
            scheduled_departure,
            scheduled_arrival: scheduled_departure + span,
        },
        programmed: facts.coin(),
    }
}

/// Derive an operational interruption from a delayed flight.
///
/// The interruption inherits the flight's identifier, delay code,
/// departure airport, and scheduled departure as its start time.
pub fn operational_interruption(
    facts: &mut AirportFacts,
    max_id: i64,
    flight: &FlightSlot,
    quality: Quality,
) -> Result<OperationalInterruption, GenerationError> {
    if flight.cancelled {
        return Err(GenerationError::Precondition(format!(
            "flight '{}' is cancelled and cannot raise an interruption",
            flight.flight_id
        )));
    }
    let delay_code = flight.delay_code.clone().ok_or_else(|| {
        GenerationError::Precondition(format!(
            "flight '{}' has no delay code",
            flight.flight_id
        ))
    })?;

    let start_time = flight.slot.scheduled_departure;
    let airport = match quality {
        Quality::Good => flight.departure_airport.clone(),
        Quality::Noisy => facts.noisy(&flight.departure_airport, 2),
        Quality::Bad => facts.airport_code(quality),
    };

    let kind = facts.flight_event_kind();
    let duration = facts.event_duration(kind, quality);
    let maintenance_id = facts.maintenance_id(max_id, start_time + duration, quality);

    Ok(OperationalInterruption {
        event: MaintenanceEvent {
            maintenance_id,
            aircraft_registration: flight.slot.aircraft_registration.clone(),
            airport,
            subsystem: facts.ata_code(quality),
            start_time,
            duration,
            kind,
        },
        flight_id: flight.flight_id.clone(),
        departure: flight.slot.scheduled_departure,
        delay_code,
    })
}

/// Derive a maintenance event from a maintenance slot.
///
/// The airport is chosen independently of the slot. A Revision must fit
/// inside the slot: its duration is the slot span minus a random
/// sub-duration, clamped to the 31-day kind bound.
pub fn maintenance_event(
    facts: &mut AirportFacts,
    max_id: i64,
    slot: &MaintenanceSlot,
    quality: Quality,
) -> Result<MaintenanceEvent, GenerationError> {
    let span = slot.slot.scheduled_arrival - slot.slot.scheduled_departure;
    if span <= TimeDelta::zero() {
        return Err(GenerationError::Precondition(format!(
            "maintenance slot for '{}' has arrival <= departure",
            slot.slot.aircraft_registration
        )));
    }

    let kind = facts.maintenance_event_kind();
    let duration = match kind {
        EventKind::Revision => {
            let slack = TimeDelta::minutes(facts.random_int(span.num_minutes() / 2));
            let fitted = (span - slack).min(TimeDelta::days(MAX_REVISION_DAYS));
            match quality {
                Quality::Bad => facts.corrupt_duration(fitted),
                _ => fitted,
            }
        }
        other => facts.event_duration(other, quality),
    };

    let start_time = slot.slot.scheduled_departure;
    let maintenance_id = facts.maintenance_id(max_id, start_time + duration, quality);

    Ok(MaintenanceEvent {
        maintenance_id,
        aircraft_registration: slot.slot.aircraft_registration.clone(),
        airport: facts.airport_code(quality),
        subsystem: facts.ata_code(quality),
        start_time,
        duration,
        kind,
    })
}

/// Fields every work order inherits from its originating event: the
/// aircraft, the place, and an execution date inside the event window.
fn work_order_base(
    facts: &mut AirportFacts,
    max_id: i64,
    event: &MaintenanceEvent,
) -> Result<WorkOrder, GenerationError> {
    if event.maintenance_id.is_empty() {
        return Err(GenerationError::Precondition(
            "maintenance event has no identifier".to_string(),
        ));
    }

    let execution_date = facts.timestamp_between(event.start_time, event.end_time());

    Ok(WorkOrder {
        work_order_id: facts.random_int(max_id),
        aircraft_registration: event.aircraft_registration.clone(),
        execution_date,
        execution_place: event.airport.clone(),
        work_package_id: facts.random_int(9999),
    })
}

pub fn forecasted_order(
    facts: &mut AirportFacts,
    max_id: i64,
    event: &MaintenanceEvent,
    _quality: Quality,
) -> Result<ForecastedOrder, GenerationError> {
    let order = work_order_base(facts, max_id, event)?;
    let planned = event.end_time();
    let deadline = facts.timestamp_between(order.execution_date, planned);

    Ok(ForecastedOrder {
        order,
        deadline,
        planned,
        frequency: facts.random_int(100),
        frequency_units: facts.frequency_unit(),
        forecasted_man_hours: facts.random_int(20),
    })
}

pub fn technical_logbook_order(
    facts: &mut AirportFacts,
    max_id: i64,
    event: &MaintenanceEvent,
    personnel: &[Reporter],
    quality: Quality,
) -> Result<TechnicalLogbookOrder, GenerationError> {
    let order = work_order_base(facts, max_id, event)?;
    let mel_category = facts.mel_category();
    let due = order.execution_date + facts.mel_deadline(mel_category, quality);

    let reporter_id = if personnel.is_empty() {
        facts.random_int(9999)
    } else {
        facts.pick(personnel).reporter_id
    };

    Ok(TechnicalLogbookOrder {
        order,
        reporter_class: facts.report_kind(),
        reporter_id,
        reporting_date: event.start_time,
        due,
        deferred: facts.coin(),
        mel_category,
    })
}

/// Work package derived from its order when present, independently random
/// otherwise.
pub fn work_package(
    facts: &mut AirportFacts,
    max_id: i64,
    order: Option<&WorkOrder>,
    quality: Quality,
) -> WorkPackage {
    match order {
        Some(order) => WorkPackage {
            work_package_id: order.work_package_id,
            execution_date: order.execution_date,
            execution_place: order.execution_place.clone(),
        },
        None => WorkPackage {
            work_package_id: facts.random_int(max_id),
            execution_date: facts.flight_timestamp(quality),
            execution_place: facts.airport_code(quality),
        },
    }
}

pub fn attachment(facts: &mut AirportFacts, event: &MaintenanceEvent) -> Attachment {
    Attachment {
        file: facts.file_reference(),
        event: event.maintenance_id.clone(),
    }
}
