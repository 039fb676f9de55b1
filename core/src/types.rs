use serde::{Deserialize, Serialize};

/// Default-tak på antall lap per plan. En patologisk plan (repeat i repeat
/// med store repeatValue) kan ellers gi kombinatorisk store serier som
/// gjør rendering treg.
pub const MAX_LAPS_DEFAULT: usize = 500;

/// Syntetisert lap fra ett blad-intervall. Ren visningsmodell for graf,
/// ikke et registrert lap fra en gjennomført økt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
    pub lap_distance_in_kilometers: f64,
    pub lap_duration_in_seconds: f64,
    pub lap_pace_in_min_km: f64,
    /// Alltid 0 for planer; puls finnes bare i data fra gjennomførte økter.
    #[serde(default)]
    pub avg_heart_rate: f64,
}

impl Lap {
    /// Invariant for alt som slippes ut: strengt positive, endelige verdier.
    pub fn is_plottable(&self) -> bool {
        let vals = [
            self.lap_distance_in_kilometers,
            self.lap_duration_in_seconds,
            self.lap_pace_in_min_km,
        ];
        vals.iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Hvordan repeatValue på et blad utenfor steps-wrapper behandles.
/// Kildesidene var uenige; begge varianter er bevart som cfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Kun steps-grenser ruller ut (primærkontrakt).
    StepsOnly,
    /// Bladets eget repeatValue multipliserer lap-et.
    LeafRepeat,
}

/// Hva som skjer med blad uten gjenkjent durationType/durationValue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownDuration {
    /// Hopp over bladet (primærkontrakt).
    Skip,
    /// Anta 60 sekunder TIME og regn distanse bakover.
    #[serde(rename = "assume_60s")]
    Assume60s,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenCfg {
    pub repeat_mode: RepeatMode,
    pub unknown_duration: UnknownDuration,
    pub max_laps: usize,
}

impl Default for FlattenCfg {
    fn default() -> Self {
        Self {
            repeat_mode: RepeatMode::StepsOnly,
            unknown_duration: UnknownDuration::Skip,
            max_laps: MAX_LAPS_DEFAULT,
        }
    }
}

/// Telleverk fra én utflating, til logg/telemetri.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    pub emitted: usize,
    pub skipped: usize,
    pub truncated: bool,
}
