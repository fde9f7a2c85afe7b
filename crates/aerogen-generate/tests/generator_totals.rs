use std::collections::HashMap;

use aerogen_core::config::GeneratorConfig;
use aerogen_generate::AircraftGenerator;

fn small_config() -> GeneratorConfig {
    GeneratorConfig {
        seed: 42,
        size: 10,
        fleet_size: 5,
        personnel_list_size: 25,
        ..GeneratorConfig::default()
    }
}

#[test]
fn base_size_drives_every_unset_kind() {
    let generator = AircraftGenerator::new(small_config()).expect("valid config");
    let dataset = generator.populate().expect("populate");

    assert_eq!(dataset.flight_slots.len(), 10);
    assert_eq!(dataset.maintenance_slots.len(), 10);
    assert_eq!(dataset.manufacturers.len(), 5);
    assert_eq!(dataset.maintenance_personnel.len(), 25);

    // one work order per maintenance event, split across the two kinds
    assert_eq!(
        dataset.forecasted_orders.len() + dataset.tlb_orders.len(),
        dataset.maintenance_events.len()
    );
}

#[test]
fn size_overrides_take_precedence() {
    let config = GeneratorConfig {
        flight_slots_size: Some(3),
        maintenance_slots_size: Some(4),
        ..small_config()
    };
    let generator = AircraftGenerator::new(config).expect("valid config");
    let dataset = generator.populate().expect("populate");

    assert_eq!(dataset.flight_slots.len(), 3);
    assert_eq!(dataset.maintenance_slots.len(), 4);
}

#[test]
fn totals_cover_every_entity_kind() {
    let generator = AircraftGenerator::new(small_config()).expect("valid config");
    let dataset = generator.populate().expect("populate");

    assert_eq!(dataset.total_entities(), 10);

    let summed: usize = dataset.counts().iter().map(|(_, len)| len).sum();
    assert_eq!(dataset.total_instances(), summed);

    let tables = dataset.tables();
    assert_eq!(tables.len(), dataset.total_entities());
    let materialized: usize = tables.iter().map(|table| table.rows.len()).sum();
    assert_eq!(dataset.total_instances(), materialized);
}

#[test]
fn same_seed_reproduces_the_dataset() {
    let first = AircraftGenerator::new(small_config())
        .expect("valid config")
        .populate()
        .expect("populate");
    let second = AircraftGenerator::new(small_config())
        .expect("valid config")
        .populate()
        .expect("populate");

    assert_eq!(first, second);
}

#[test]
fn good_runs_never_invert_actual_times() {
    let config = GeneratorConfig {
        size: 300,
        ..small_config()
    };
    let generator = AircraftGenerator::new(config).expect("valid config");
    let dataset = generator.populate().expect("populate");

    for flight in &dataset.flight_slots {
        if flight.cancelled {
            continue;
        }
        let departure = flight.actual_departure.expect("actual departure");
        let arrival = flight.actual_arrival.expect("actual arrival");
        assert!(departure <= arrival);
    }
}

#[test]
fn bad_runs_reliably_plant_the_swap() {
    let config = GeneratorConfig {
        prob_good: 0.0,
        prob_noisy: 0.0,
        prob_bad: 1.0,
        size: 100,
        ..small_config()
    };
    let generator = AircraftGenerator::new(config).expect("valid config");
    let dataset = generator.populate().expect("populate");

    let mut swapped = 0;
    for flight in &dataset.flight_slots {
        if flight.cancelled {
            continue;
        }
        let departure = flight.actual_departure.expect("actual departure");
        let arrival = flight.actual_arrival.expect("actual arrival");
        assert!(departure > arrival);
        swapped += 1;
    }
    assert!(swapped > 0);
}

#[test]
fn attachments_partition_across_interruptions() {
    let config = GeneratorConfig {
        maintenance_slots_size: Some(0),
        max_attach_size: 2,
        ..small_config()
    };
    let generator = AircraftGenerator::new(config).expect("valid config");
    let dataset = generator.populate().expect("populate");

    assert!(dataset.maintenance_events.is_empty());
    assert!(!dataset.operational_interruptions.is_empty());
    assert_eq!(
        dataset.attachments.len(),
        2 * dataset.operational_interruptions.len()
    );

    let mut per_event: HashMap<&str, usize> = HashMap::new();
    for attachment in &dataset.attachments {
        *per_event.entry(attachment.event.as_str()).or_insert(0) += 1;
    }
    assert_eq!(per_event.len(), dataset.operational_interruptions.len());
    for interruption in &dataset.operational_interruptions {
        assert_eq!(
            per_event.get(interruption.event.maintenance_id.as_str()),
            Some(&2)
        );
    }
}

#[test]
fn every_work_order_stays_inside_its_event() {
    let config = GeneratorConfig {
        size: 100,
        ..small_config()
    };
    let generator = AircraftGenerator::new(config).expect("valid config");
    let dataset = generator.populate().expect("populate");

    let windows: Vec<_> = dataset
        .maintenance_events
        .iter()
        .map(|event| (event.start_time, event.end_time()))
        .collect();

    for order in dataset
        .forecasted_orders
        .iter()
        .map(|order| &order.order)
        .chain(dataset.tlb_orders.iter().map(|order| &order.order))
    {
        assert!(windows.iter().any(|(start, end)| {
            order.execution_date >= *start && order.execution_date <= *end
        }));
    }
}

#[test]
fn work_packages_respect_the_per_order_cap() {
    let config = GeneratorConfig {
        max_work_packages: 3,
        size: 50,
        ..small_config()
    };
    let generator = AircraftGenerator::new(config).expect("valid config");
    let dataset = generator.populate().expect("populate");

    let orders = dataset.forecasted_orders.len() + dataset.tlb_orders.len();
    assert!(dataset.work_packages.len() >= orders);
    assert!(dataset.work_packages.len() <= orders * 3);

    // every derived package carries an id owned by some order
    for package in &dataset.work_packages {
        assert!(
            dataset
                .forecasted_orders
                .iter()
                .map(|order| &order.order)
                .chain(dataset.tlb_orders.iter().map(|order| &order.order))
                .any(|order| order.work_package_id == package.work_package_id)
        );
    }
}
