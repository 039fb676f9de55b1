use crate::models::LeafInterval;

/// Fast visningstempo for pauser (min/km). Sentinel som gir jevn, "treg"
/// søylehøyde i grafen, ikke et fysiologisk estimat.
pub const REST_PACE_MIN_PER_KM: f64 = 10.0;
pub const MPS_TO_KMH: f64 = 3.6;

// --- RoundTo trait (offentlig, brukt av chart og report) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// m/s -> min/km. None for fart <= 0 (ingenting å plotte).
pub fn pace_from_speed(speed_mps: f64) -> Option<f64> {
    if !speed_mps.is_finite() || speed_mps <= 0.0 {
        return None;
    }
    Some(60.0 / (speed_mps * MPS_TO_KMH))
}

/// Tempo for ett blad: pauser får sentinel-tempoet, ellers snittet av
/// målfart lav/høy. None betyr at bladet ikke kan gi noe lap.
pub fn leaf_pace(leaf: &LeafInterval) -> Option<f64> {
    if leaf.rest {
        return Some(REST_PACE_MIN_PER_KM);
    }
    pace_from_speed((leaf.target_low + leaf.target_high) / 2.0)
}
