//! Generation orchestrator: drives the ordered pipeline and accumulates
//! every produced collection.

use std::time::Instant;

use tracing::info;

use aerogen_core::aims::{FlightSlot, MaintenanceSlot, Manufacturer, Reporter};
use aerogen_core::amos::{
    Attachment, ForecastedOrder, MaintenanceEvent, OperationalInterruption,
    TechnicalLogbookOrder, WorkPackage,
};
use aerogen_core::config::GeneratorConfig;
use aerogen_core::record::TableRows;

use crate::errors::GenerationError;
use crate::facts::AirportFacts;
use crate::factory;
use crate::passes::{resolve_overlaps, split_revisions};
use crate::quality::QualityWeights;

/// Terminal state of one generation run: every collection the pipeline
/// produced, keyed by entity kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub manufacturers: Vec<Manufacturer>,
    pub maintenance_personnel: Vec<Reporter>,
    pub flight_slots: Vec<FlightSlot>,
    pub maintenance_slots: Vec<MaintenanceSlot>,
    pub operational_interruptions: Vec<OperationalInterruption>,
    pub maintenance_events: Vec<MaintenanceEvent>,
    pub forecasted_orders: Vec<ForecastedOrder>,
    pub tlb_orders: Vec<TechnicalLogbookOrder>,
    pub work_packages: Vec<WorkPackage>,
    pub attachments: Vec<Attachment>,
}

impl Dataset {
    /// Uniform view consumed by both sinks: one table per entity kind.
    pub fn tables(&self) -> Vec<TableRows> {
        vec![
            TableRows::of(&self.manufacturers),
            TableRows::of(&self.maintenance_personnel),
            TableRows::of(&self.flight_slots),
            TableRows::of(&self.maintenance_slots),
            TableRows::of(&self.operational_interruptions),
            TableRows::of(&self.maintenance_events),
            TableRows::of(&self.forecasted_orders),
            TableRows::of(&self.tlb_orders),
            TableRows::of(&self.work_packages),
            TableRows::of(&self.attachments),
        ]
    }

    /// Instance count per entity kind, without materializing rows.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        use aerogen_core::record::Record;
        vec![
            (Manufacturer::KIND, self.manufacturers.len()),
            (Reporter::KIND, self.maintenance_personnel.len()),
            (FlightSlot::KIND, self.flight_slots.len()),
            (MaintenanceSlot::KIND, self.maintenance_slots.len()),
            (
                OperationalInterruption::KIND,
                self.operational_interruptions.len(),
            ),
            (MaintenanceEvent::KIND, self.maintenance_events.len()),
            (ForecastedOrder::KIND, self.forecasted_orders.len()),
            (TechnicalLogbookOrder::KIND, self.tlb_orders.len()),
            (WorkPackage::KIND, self.work_packages.len()),
            (Attachment::KIND, self.attachments.len()),
        ]
    }

    pub fn total_instances(&self) -> usize {
        self.counts().iter().map(|(_, len)| len).sum()
    }

    pub fn total_entities(&self) -> usize {
        self.counts().len()
    }
}

/// Drives the ordered generation pipeline. Single-threaded and
/// order-dependent: later stages consume fully-built earlier-stage
/// entities by reference.
#[derive(Debug, Clone)]
pub struct AircraftGenerator {
    config: GeneratorConfig,
    weights: QualityWeights,
    facts: AirportFacts,
}

impl AircraftGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        let weights = QualityWeights::new(config.prob_good, config.prob_noisy, config.prob_bad)?;
        let facts = AirportFacts::with_seed(config.seed);
        Ok(Self {
            config,
            weights,
            facts,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline once and hand back the terminal state.
    pub fn populate(mut self) -> Result<Dataset, GenerationError> {
        let start = Instant::now();
        let config = self.config.clone();
        let weights = self.weights;
        let facts = &mut self.facts;
        let mut dataset = Dataset::default();

        for _ in 0..config.fleet_size {
            let quality = facts.quality(&weights);
            dataset
                .manufacturers
                .push(factory::manufacturer(facts, quality));
        }
        info!(count = dataset.manufacturers.len(), "generated fleet");

        for _ in 0..config.personnel_list_size {
            let quality = facts.quality(&weights);
            dataset
                .maintenance_personnel
                .push(factory::reporter(facts, quality));
        }
        info!(
            count = dataset.maintenance_personnel.len(),
            "generated maintenance personnel"
        );

        for _ in 0..config.flight_slots_size() {
            let quality = facts.quality(&weights);
            let fleet_member = facts.pick(&dataset.manufacturers).clone();
            dataset
                .flight_slots
                .push(factory::flight_slot(facts, &config, &fleet_member, quality));
        }
        info!(count = dataset.flight_slots.len(), "generated flight slots");

        for _ in 0..config.maintenance_slots_size() {
            let quality = facts.quality(&weights);
            let fleet_member = facts.pick(&dataset.manufacturers).clone();
            dataset.maintenance_slots.push(factory::maintenance_slot(
                facts,
                &config,
                &fleet_member,
                quality,
            ));
        }
        info!(
            count = dataset.maintenance_slots.len(),
            "generated maintenance slots"
        );

        // production data is mostly non-overlapping; fixes apply with the
        // good-quality probability
        let fixed = resolve_overlaps(&mut dataset.flight_slots, weights.good(), facts);
        info!(fixed, "resolved flight slot overlaps");

        for flight in &dataset.flight_slots {
            // only a delayed flight introduces an interruption
            if flight.delay_code.is_none() {
                continue;
            }
            let quality = facts.quality(&weights);
            dataset
                .operational_interruptions
                .push(factory::operational_interruption(
                    facts,
                    config.size as i64,
                    flight,
                    quality,
                )?);
        }
        info!(
            count = dataset.operational_interruptions.len(),
            "generated operational interruptions"
        );

        let mut maintenance_events = Vec::with_capacity(dataset.maintenance_slots.len());
        for slot in &dataset.maintenance_slots {
            let quality = facts.quality(&weights);
            maintenance_events.push(factory::maintenance_event(
                facts,
                config.size as i64,
                slot,
                quality,
            )?);
        }
        dataset.maintenance_events = split_revisions(maintenance_events);
        info!(
            count = dataset.maintenance_events.len(),
            "generated maintenance events"
        );

        // one order per maintenance event; interruptions produce none
        let order_id_bound = dataset.maintenance_events.len().max(1) as i64;
        for event in &dataset.maintenance_events {
            let quality = facts.quality(&weights);
            if facts.chance(config.proba_forecast_order) {
                dataset.forecasted_orders.push(factory::forecasted_order(
                    facts,
                    order_id_bound,
                    event,
                    quality,
                )?);
            } else {
                dataset.tlb_orders.push(factory::technical_logbook_order(
                    facts,
                    order_id_bound,
                    event,
                    &dataset.maintenance_personnel,
                    quality,
                )?);
            }
        }
        info!(
            forecasted = dataset.forecasted_orders.len(),
            technical_logbook = dataset.tlb_orders.len(),
            "generated work orders"
        );

        let orders = dataset
            .forecasted_orders
            .iter()
            .map(|order| order.order.clone())
            .chain(dataset.tlb_orders.iter().map(|order| order.order.clone()))
            .collect::<Vec<_>>();
        for order in &orders {
            let quality = facts.quality(&weights);
            let count = facts.int_between(1, config.max_work_packages as i64);
            for _ in 0..count {
                dataset.work_packages.push(factory::work_package(
                    facts,
                    config.size as i64,
                    Some(order),
                    quality,
                ));
            }
        }
        info!(count = dataset.work_packages.len(), "generated work packages");

        let events = dataset
            .operational_interruptions
            .iter()
            .map(|interruption| interruption.event.clone())
            .chain(dataset.maintenance_events.iter().cloned())
            .collect::<Vec<_>>();
        for event in &events {
            for _ in 0..config.max_attach_size {
                dataset.attachments.push(factory::attachment(facts, event));
            }
        }
        info!(count = dataset.attachments.len(), "generated attachments");

        info!(
            total_instances = dataset.total_instances(),
            total_entities = dataset.total_entities(),
            duration_ms = start.elapsed().as_millis() as u64,
            "population complete"
        );

        Ok(dataset)
    }
}
