use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::pace::RoundTo;
use crate::types::Lap;

// Gradient-endepunkter for søylefarge (RGB). Raskeste halvdel av
// tempo-spennet går blå -> lilla, tregeste lilla -> rød.
pub const GRADIENT_FAST: [u8; 3] = [59, 130, 246];
pub const GRADIENT_MID: [u8; 3] = [139, 92, 246];
pub const GRADIENT_SLOW: [u8; 3] = [239, 68, 68];

/// Ferdig søylegeometri for graf-rendereren: bredde som andel av total
/// distanse, høyde invertert etter tempo (raskest = 1.0), farge fra
/// to-segments gradient normalisert mot denne renderens eget min/maks-tempo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapBar {
    pub width_frac: f64,
    pub height_frac: f64,
    pub color: String,
}

pub fn lap_bars(laps: &[Lap]) -> Vec<LapBar> {
    let total_km: f64 = laps.iter().map(|l| l.lap_distance_in_kilometers).sum();
    if total_km <= 0.0 {
        // Tom eller degenerert serie: heller tom liste enn NaN-bredder.
        return Vec::new();
    }

    let paces = || laps.iter().map(|l| OrderedFloat(l.lap_pace_in_min_km));
    let (min_pace, max_pace) = match (paces().min(), paces().max()) {
        (Some(lo), Some(hi)) => (lo.0, hi.0),
        _ => return Vec::new(),
    };
    let range = max_pace - min_pace;

    laps.iter()
        .map(|l| {
            let t = if range <= f64::EPSILON {
                // Alle lap i samme tempo: legg alt midt i gradienten.
                0.5
            } else {
                (l.lap_pace_in_min_km - min_pace) / range
            };
            LapBar {
                width_frac: (l.lap_distance_in_kilometers / total_km).round_to(4),
                height_frac: (min_pace / l.lap_pace_in_min_km).round_to(4),
                color: gradient_color(t),
            }
        })
        .collect()
}

/// t i [0,1], 0 = raskest. Normaliseres per render, ikke mot global skala.
pub fn gradient_color(t: f64) -> String {
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t <= 0.5 {
        (GRADIENT_FAST, GRADIENT_MID, t * 2.0)
    } else {
        (GRADIENT_MID, GRADIENT_SLOW, (t - 0.5) * 2.0)
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp_channel(from[0], to[0], local),
        lerp_channel(from[1], to[1], local),
        lerp_channel(from[2], to[2], local)
    )
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}
