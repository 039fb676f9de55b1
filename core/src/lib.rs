//! PaceGraph core: flater ut planlagte økter (intervalltrær med
//! repeat-blokker) til flate lap-serier for graf-rendering.
//!
//! Dataflyt: WorkoutPlan (hentet eksternt) -> flatten -> Lap-serie ->
//! graf/tabell (eksternt). Kjernen er ren beregning uten I/O; JSON-grensen
//! her i rota er det frontenden snakker med.

pub mod chart;
pub mod cli;
pub mod flatten;
pub mod metrics;
pub mod models;
pub mod pace;
#[cfg(feature = "python")]
pub mod py;
pub mod report;
pub mod storage;
pub mod types;

pub use chart::{gradient_color, lap_bars, LapBar};
pub use flatten::{flatten_plan, flatten_plan_with_stats};
pub use models::{classify_all, Interval, LeafDuration, LeafInterval, PlanNode, WorkoutPlan};
pub use pace::{RoundTo, REST_PACE_MIN_PER_KM};
pub use report::{plan_report, PlanReport};
pub use storage::{load_cfg, save_cfg};
pub use types::{FlattenCfg, FlattenStats, Lap, RepeatMode, UnknownDuration};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("ugyldig {what}-JSON ved {path}: {source}")]
    Parse {
        what: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("ugyldig cfg-JSON: {0}")]
    CfgParse(#[source] serde_json::Error),
    #[error("klarte ikke å serialisere resultatet: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Parse med sti i feilmeldingen, så frontenden ser hvilket felt som røk.
fn parse_with_path<T: DeserializeOwned>(what: &'static str, s: &str) -> Result<T, PlanError> {
    let mut de = serde_json::Deserializer::from_str(s);
    serde_path_to_error::deserialize(&mut de).map_err(|e| PlanError::Parse {
        what,
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

/// JSON-grensen mot frontenden: plan-JSON (+ valgfri cfg-JSON) inn,
/// PlanReport som JSON ut (camelCase-felter, klare for graf-komponenten).
pub fn flatten_plan_json(plan_json: &str, cfg_json: Option<&str>) -> Result<String, PlanError> {
    let plan: WorkoutPlan = parse_with_path("plan", plan_json)?;
    let cfg = match cfg_json {
        Some(s) => serde_json::from_str(s).map_err(PlanError::CfgParse)?,
        None => FlattenCfg::default(),
    };
    let rep = report::plan_report(&plan, &cfg);
    serde_json::to_string(&rep).map_err(PlanError::Serialize)
}

/// Søylegeometri for en allerede utflatet lap-serie.
pub fn lap_bars_json(laps_json: &str) -> Result<String, PlanError> {
    let laps: Vec<Lap> = parse_with_path("laps", laps_json)?;
    serde_json::to_string(&chart::lap_bars(&laps)).map_err(PlanError::Serialize)
}
