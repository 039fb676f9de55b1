use crate::models::{classify_all, LeafDuration, LeafInterval, PlanNode, WorkoutPlan};
use crate::pace::leaf_pace;
use crate::types::{FlattenCfg, FlattenStats, Lap, RepeatMode, UnknownDuration};

/// Varighet som antas når cfg sier assume_60s og bladet mangler brukbar
/// durationType/durationValue.
pub const FALLBACK_DURATION_S: f64 = 60.0;

/// Hardt tak på rekursjonsdybde. Planer fra API-et er 2-3 nivåer; alt
/// dypere er garbage og hoppes over i stedet for å risikere stack overflow.
pub const MAX_DEPTH: usize = 32;

/// Flater ut plantreet til en ordnet lap-serie, venstre-til-høyre og
/// dybde-først, med repeat-blokker fullt utrullet. Ren funksjon: leser
/// bare input og bygger en fersk liste per kall.
pub fn flatten_plan(plan: &WorkoutPlan, cfg: &FlattenCfg) -> Vec<Lap> {
    flatten_plan_with_stats(plan, cfg).0
}

/// Som flatten_plan, men med telleverk for logg/telemetri.
pub fn flatten_plan_with_stats(plan: &WorkoutPlan, cfg: &FlattenCfg) -> (Vec<Lap>, FlattenStats) {
    let nodes = classify_all(&plan.intervals);
    let mut laps = Vec::new();
    let mut stats = FlattenStats::default();
    walk(&nodes, cfg, 0, &mut laps, &mut stats);
    if stats.truncated {
        log::warn!(
            "lap-serie kuttet ved max_laps={} (emitted={}, skipped={})",
            cfg.max_laps,
            stats.emitted,
            stats.skipped
        );
    }
    (laps, stats)
}

/// Returnerer false når taket er nådd og hele utflatingen skal stoppe.
fn walk(
    nodes: &[PlanNode],
    cfg: &FlattenCfg,
    depth: usize,
    out: &mut Vec<Lap>,
    stats: &mut FlattenStats,
) -> bool {
    for node in nodes {
        match node {
            PlanNode::Repeat(block) => {
                if depth + 1 >= MAX_DEPTH {
                    log::warn!("hopper over repeat-blokk dypere enn {MAX_DEPTH} nivåer");
                    stats.skipped += 1;
                    continue;
                }
                // Hver repetisjon besøker barna rekursivt på nytt, så
                // nestede blokker komponerer: ytre xN rundt indre xM gir NxM.
                for _ in 0..block.repeat {
                    if !walk(&block.children, cfg, depth + 1, out, stats) {
                        return false;
                    }
                }
            }
            PlanNode::Leaf(leaf) => {
                let reps = match cfg.repeat_mode {
                    RepeatMode::StepsOnly => 1,
                    RepeatMode::LeafRepeat => leaf.repeat,
                };
                match lap_for_leaf(leaf, cfg) {
                    Some(lap) => {
                        for _ in 0..reps {
                            if out.len() >= cfg.max_laps {
                                stats.truncated = true;
                                return false;
                            }
                            out.push(lap);
                            stats.emitted += 1;
                        }
                    }
                    None => stats.skipped += 1,
                }
            }
        }
    }
    true
}

/// Høyst ett lap per blad. Tempo først; uten tempo finnes det ingenting
/// å plotte og bladet droppes stille.
fn lap_for_leaf(leaf: &LeafInterval, cfg: &FlattenCfg) -> Option<Lap> {
    let pace = leaf_pace(leaf)?;
    let duration = match leaf.duration {
        Some(d) => d,
        None => match cfg.unknown_duration {
            UnknownDuration::Skip => return None,
            UnknownDuration::Assume60s => LeafDuration::TimeS(FALLBACK_DURATION_S),
        },
    };
    let (dist_km, dur_s) = match duration {
        LeafDuration::DistanceM(m) => {
            let km = m / 1000.0;
            (km, km * pace * 60.0)
        }
        LeafDuration::TimeS(s) => (s / (pace * 60.0), s),
    };
    let lap = Lap {
        lap_distance_in_kilometers: dist_km,
        lap_duration_in_seconds: dur_s,
        lap_pace_in_min_km: pace,
        avg_heart_rate: 0.0,
    };
    // Negative/null durationValue o.l. ender her og droppes.
    lap.is_plottable().then_some(lap)
}
