use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Telleverk for utflating, samlet på eget Registry slik at en embedder
/// kan eksportere dem sammen med sine egne.
pub struct Metrics {
    registry: Registry,
    plans_flattened: IntCounter,
    laps_emitted: IntCounter,
    leaves_skipped: IntCounter,
    plans_truncated: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let plans_flattened = counter(
            &registry,
            "pacegraph_plans_flattened_total",
            "Antall planer flatet ut",
        );
        let laps_emitted = counter(
            &registry,
            "pacegraph_laps_emitted_total",
            "Antall lap sluppet ut",
        );
        let leaves_skipped = counter(
            &registry,
            "pacegraph_leaves_skipped_total",
            "Antall blad hoppet over (ubrukelig tempo/varighet)",
        );
        let plans_truncated = counter(
            &registry,
            "pacegraph_plans_truncated_total",
            "Antall planer kuttet ved max_laps",
        );
        Self {
            registry,
            plans_flattened,
            laps_emitted,
            leaves_skipped,
            plans_truncated,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    // Statiske navn/help, kan ikke feile i praksis.
    let c = IntCounter::new(name, help).expect("ugyldig metric-navn");
    registry
        .register(Box::new(c.clone()))
        .expect("metric allerede registrert");
    c
}

static GLOBAL: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn global() -> &'static Metrics {
    &GLOBAL
}

pub fn plans_flattened_total(m: &Metrics) -> &IntCounter {
    &m.plans_flattened
}

pub fn laps_emitted_total(m: &Metrics) -> &IntCounter {
    &m.laps_emitted
}

pub fn leaves_skipped_total(m: &Metrics) -> &IntCounter {
    &m.leaves_skipped
}

pub fn plans_truncated_total(m: &Metrics) -> &IntCounter {
    &m.plans_truncated
}
