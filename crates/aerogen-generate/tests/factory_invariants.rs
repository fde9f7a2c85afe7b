use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use aerogen_core::aims::{FlightSlot, MaintenanceSlot, Manufacturer, Reporter, Slot};
use aerogen_core::amos::{EventKind, MaintenanceEvent, MelCategory};
use aerogen_core::config::GeneratorConfig;
use aerogen_generate::quality::Quality;
use aerogen_generate::{AirportFacts, GenerationError, factory};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 6, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

fn fleet_member(facts: &mut AirportFacts) -> Manufacturer {
    factory::manufacturer(facts, Quality::Good)
}

fn sample_event() -> MaintenanceEvent {
    MaintenanceEvent {
        maintenance_id: "12_2015-06-03 10:00:00".to_string(),
        aircraft_registration: "XY-ABC".to_string(),
        airport: "MAD".to_string(),
        subsystem: "2100".to_string(),
        start_time: at(1, 10),
        duration: TimeDelta::days(2),
        kind: EventKind::Maintenance,
    }
}

#[test]
fn good_flight_slots_keep_scheduling_invariants() {
    let config = GeneratorConfig::default();
    let mut facts = AirportFacts::with_seed(11);
    let member = fleet_member(&mut facts);

    for _ in 0..200 {
        let flight = factory::flight_slot(&mut facts, &config, &member, Quality::Good);

        assert!(flight.slot.scheduled_departure < flight.slot.scheduled_arrival);
        assert_eq!(flight.slot.aircraft_registration, member.aircraft_reg_code);
        assert_ne!(flight.departure_airport, flight.arrival_airport);

        if flight.cancelled {
            assert!(flight.actual_departure.is_none());
            assert!(flight.actual_arrival.is_none());
            assert!(flight.delay_code.is_none());
        } else {
            let actual_departure = flight.actual_departure.expect("actual departure");
            let actual_arrival = flight.actual_arrival.expect("actual arrival");
            assert!(actual_departure >= flight.slot.scheduled_departure);
            assert!(actual_arrival >= flight.slot.scheduled_arrival);

            let delay = actual_departure - flight.slot.scheduled_departure;
            assert!(delay <= TimeDelta::minutes(config.max_delay_minutes));
            assert_eq!(actual_arrival - flight.slot.scheduled_arrival, delay);
            assert!(flight.delay_code.is_some());
        }

        let parts: Vec<&str> = flight.flight_id.split('-').collect();
        assert_eq!(parts[1], flight.departure_airport);
        assert_eq!(parts[2], flight.arrival_airport);
    }
}

#[test]
fn bad_flight_slots_swap_actual_times() {
    let config = GeneratorConfig::default();
    let mut facts = AirportFacts::with_seed(12);
    let member = fleet_member(&mut facts);

    let mut non_cancelled = 0;
    for _ in 0..200 {
        let flight = factory::flight_slot(&mut facts, &config, &member, Quality::Bad);
        if flight.cancelled {
            continue;
        }
        non_cancelled += 1;
        let actual_departure = flight.actual_departure.expect("actual departure");
        let actual_arrival = flight.actual_arrival.expect("actual arrival");
        assert!(actual_departure > actual_arrival, "swap must be present");
        // the registration is re-randomized away from the fleet member
        assert_ne!(flight.slot.aircraft_registration, member.aircraft_reg_code);
    }
    assert!(non_cancelled > 0);
}

#[test]
fn interruption_inherits_from_its_flight() {
    let config = GeneratorConfig::default();
    let mut facts = AirportFacts::with_seed(13);
    let member = fleet_member(&mut facts);

    let mut checked = 0;
    for _ in 0..100 {
        let flight = factory::flight_slot(&mut facts, &config, &member, Quality::Good);
        if flight.delay_code.is_none() {
            continue;
        }
        let interruption =
            factory::operational_interruption(&mut facts, 999, &flight, Quality::Good)
                .expect("interruption from delayed flight");

        assert_eq!(interruption.flight_id, flight.flight_id);
        assert_eq!(
            interruption.delay_code,
            flight.delay_code.clone().expect("delay code")
        );
        assert_eq!(interruption.event.airport, flight.departure_airport);
        assert_eq!(interruption.event.start_time, flight.slot.scheduled_departure);
        assert_eq!(interruption.departure, flight.slot.scheduled_departure);
        assert!(matches!(
            interruption.event.kind,
            EventKind::Delay | EventKind::Safety
        ));
        if interruption.event.kind == EventKind::Delay {
            assert!(interruption.event.duration <= TimeDelta::minutes(59));
        }
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn interruption_requires_a_delay_code() {
    let mut facts = AirportFacts::with_seed(14);
    let flight = FlightSlot {
        slot: Slot {
            aircraft_registration: "XY-ABC".to_string(),
            scheduled_departure: at(1, 10),
            scheduled_arrival: at(1, 12),
        },
        flight_id: "010615-MAD-LIS-1234-XY-ABC".to_string(),
        departure_airport: "MAD".to_string(),
        arrival_airport: "LIS".to_string(),
        actual_departure: Some(at(1, 10)),
        actual_arrival: Some(at(1, 12)),
        cancelled: false,
        delay_code: None,
        passengers: 120,
        cabin_crew: 3,
        flight_crew: 2,
    };

    let result = factory::operational_interruption(&mut facts, 999, &flight, Quality::Good);
    assert!(matches!(result, Err(GenerationError::Precondition(_))));
}

#[test]
fn interruption_rejects_cancelled_flights() {
    let mut facts = AirportFacts::with_seed(15);
    let flight = FlightSlot {
        slot: Slot {
            aircraft_registration: "XY-ABC".to_string(),
            scheduled_departure: at(1, 10),
            scheduled_arrival: at(1, 12),
        },
        flight_id: "010615-MAD-LIS-1234-XY-ABC".to_string(),
        departure_airport: "MAD".to_string(),
        arrival_airport: "LIS".to_string(),
        actual_departure: None,
        actual_arrival: None,
        cancelled: true,
        delay_code: None,
        passengers: 120,
        cabin_crew: 3,
        flight_crew: 2,
    };

    let result = factory::operational_interruption(&mut facts, 999, &flight, Quality::Good);
    assert!(matches!(result, Err(GenerationError::Precondition(_))));
}

#[test]
fn maintenance_events_fit_their_slot() {
    let config = GeneratorConfig::default();
    let mut facts = AirportFacts::with_seed(16);
    let member = fleet_member(&mut facts);

    for _ in 0..200 {
        let slot = factory::maintenance_slot(&mut facts, &config, &member, Quality::Good);
        let event = factory::maintenance_event(&mut facts, 999, &slot, Quality::Good)
            .expect("event from slot");

        assert_eq!(event.start_time, slot.slot.scheduled_departure);
        assert_eq!(event.aircraft_registration, slot.slot.aircraft_registration);
        assert!(matches!(
            event.kind,
            EventKind::AircraftOnGround | EventKind::Maintenance | EventKind::Revision
        ));
        if event.kind == EventKind::Revision {
            let span = slot.slot.scheduled_arrival - slot.slot.scheduled_departure;
            assert!(event.duration <= span);
            assert!(event.duration <= TimeDelta::days(31));
        }
    }
}

#[test]
fn maintenance_event_rejects_an_inverted_slot() {
    let mut facts = AirportFacts::with_seed(17);
    let slot = MaintenanceSlot {
        slot: Slot {
            aircraft_registration: "XY-ABC".to_string(),
            scheduled_departure: at(2, 10),
            scheduled_arrival: at(1, 10),
        },
        programmed: true,
    };

    let result = factory::maintenance_event(&mut facts, 999, &slot, Quality::Good);
    assert!(matches!(result, Err(GenerationError::Precondition(_))));
}

#[test]
fn forecasted_orders_are_contained_in_their_event() {
    let mut facts = AirportFacts::with_seed(18);
    let event = sample_event();

    for _ in 0..100 {
        let order = factory::forecasted_order(&mut facts, 999, &event, Quality::Good)
            .expect("forecasted order");

        assert_eq!(order.order.aircraft_registration, event.aircraft_registration);
        assert_eq!(order.order.execution_place, event.airport);
        assert!(order.order.execution_date >= event.start_time);
        assert!(order.order.execution_date <= event.end_time());
        assert_eq!(order.planned, event.end_time());
        assert!(order.deadline >= order.order.execution_date);
        assert!(order.deadline <= order.planned);
        assert!(order.forecasted_man_hours <= 20);
    }
}

#[test]
fn logbook_orders_apply_the_mel_deferral_window() {
    let mut facts = AirportFacts::with_seed(19);
    let event = sample_event();
    let personnel = vec![
        Reporter {
            reporter_id: 17,
            airport: "MAD".to_string(),
        },
        Reporter {
            reporter_id: 23,
            airport: "LIS".to_string(),
        },
    ];

    for _ in 0..100 {
        let order =
            factory::technical_logbook_order(&mut facts, 999, &event, &personnel, Quality::Good)
                .expect("logbook order");

        assert_eq!(order.reporting_date, event.start_time);
        assert!(order.order.execution_date >= event.start_time);
        assert!(order.order.execution_date <= event.end_time());
        assert!(personnel
            .iter()
            .any(|reporter| reporter.reporter_id == order.reporter_id));

        let expected = match order.mel_category {
            MelCategory::A => TimeDelta::days(3),
            MelCategory::B => TimeDelta::days(10),
            MelCategory::C => TimeDelta::days(30),
            MelCategory::D => TimeDelta::days(120),
        };
        assert_eq!(order.due - order.order.execution_date, expected);
    }
}

#[test]
fn work_packages_derive_from_their_order() {
    let mut facts = AirportFacts::with_seed(20);
    let event = sample_event();
    let order = factory::forecasted_order(&mut facts, 999, &event, Quality::Good)
        .expect("forecasted order");

    let derived = factory::work_package(&mut facts, 999, Some(&order.order), Quality::Good);
    assert_eq!(derived.work_package_id, order.order.work_package_id);
    assert_eq!(derived.execution_date, order.order.execution_date);
    assert_eq!(derived.execution_place, order.order.execution_place);

    let independent = factory::work_package(&mut facts, 999, None, Quality::Good);
    assert!(independent.work_package_id <= 999);
}

#[test]
fn attachments_reference_their_event() {
    let mut facts = AirportFacts::with_seed(21);
    let event = sample_event();

    let attachment = factory::attachment(&mut facts, &event);
    assert_eq!(attachment.event, event.maintenance_id);
    assert_eq!(attachment.file.len(), 36); // uuid text form
}
