use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::{lap_bars, LapBar};
use crate::flatten::flatten_plan_with_stats;
use crate::metrics;
use crate::models::WorkoutPlan;
use crate::pace::RoundTo;
use crate::types::{FlattenCfg, Lap};

/// Samlet visningsmodell for én plan: lap-serien, ferdig søylegeometri og
/// totaler. Bygges på nytt per visning og lagres aldri.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub workout_id: Option<String>,
    pub workout_name: Option<String>,
    pub workout_date: Option<NaiveDate>,
    pub laps: Vec<Lap>,
    pub bars: Vec<LapBar>,
    pub total_distance_in_kilometers: f64,
    pub total_duration_in_seconds: f64,
    /// None når total distanse er 0 (ingen deling på null).
    pub avg_pace_in_min_km: Option<f64>,
}

pub fn plan_report(plan: &WorkoutPlan, cfg: &FlattenCfg) -> PlanReport {
    let (laps, stats) = flatten_plan_with_stats(plan, cfg);

    // Telemetri hører hjemme her, ikke i den rene utflatingen.
    let m = metrics::global();
    metrics::plans_flattened_total(m).inc();
    metrics::laps_emitted_total(m).inc_by(stats.emitted as u64);
    metrics::leaves_skipped_total(m).inc_by(stats.skipped as u64);
    if stats.truncated {
        metrics::plans_truncated_total(m).inc();
    }

    let total_km: f64 = laps.iter().map(|l| l.lap_distance_in_kilometers).sum();
    let total_s: f64 = laps.iter().map(|l| l.lap_duration_in_seconds).sum();
    let avg_pace = if total_km > 0.0 {
        Some(((total_s / 60.0) / total_km).round_to(2))
    } else {
        None
    };

    PlanReport {
        workout_id: plan.workout_id.clone(),
        workout_name: plan.workout_name.clone(),
        workout_date: plan.workout_date,
        bars: lap_bars(&laps),
        total_distance_in_kilometers: total_km.round_to(3),
        total_duration_in_seconds: total_s.round_to(1),
        avg_pace_in_min_km: avg_pace,
        laps,
    }
}
