use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Planlagt økt slik API-et leverer den (fetch-by-id eller fetch-by-date).
/// Alle felt er valgfrie på wire-nivå; kun `intervals` mates til utflatingen,
/// id/navn/dato følger med videre til rapporten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    #[serde(default)]
    pub workout_id: Option<String>,
    #[serde(default)]
    pub workout_name: Option<String>,
    #[serde(default)]
    pub workout_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_steps")]
    pub intervals: Vec<Interval>,
}

/// Én node i plantreet. Grenvalget styres av `steps` (ikke av `type`,
/// som bare er informativt fra API-et).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    #[serde(default)]
    pub step_order: Option<i64>,
    #[serde(default, rename = "type", alias = "stepType")]
    pub step_type: Option<String>,
    #[serde(default, alias = "workoutSteps", deserialize_with = "lenient_steps")]
    pub steps: Vec<Interval>,
    // Garmin-eksporter bruker numberOfIterations for det samme feltet
    #[serde(default, alias = "numberOfIterations")]
    pub repeat_value: Option<f64>,
    #[serde(default)]
    pub duration_type: Option<String>,
    #[serde(default)]
    pub duration_value: Option<f64>,
    #[serde(default, alias = "intensityType")]
    pub intensity: Option<String>,
    #[serde(default)]
    pub target_value_low: Option<f64>,
    #[serde(default)]
    pub target_value_high: Option<f64>,
}

/// Tolerant parsing av steg-lister: ikke-array blir tom liste, og
/// elementer som ikke lar seg tolke som Interval hoppes over.
/// Delvis gyldige trær skal aldri velte hele planen.
fn lenient_steps<'de, D>(d: D) -> Result<Vec<Interval>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    match v {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|it| serde_json::from_value(it).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Internt tre: eksplisitt blad/repeat-gren i stedet for én struct med
/// valgfrie felt. Klassifiseringen skjer én gang, før utflating.
#[derive(Debug, Clone)]
pub enum PlanNode {
    Leaf(LeafInterval),
    Repeat(RepeatBlock),
}

#[derive(Debug, Clone)]
pub struct RepeatBlock {
    /// Antall ganger barna kjøres (minst 1).
    pub repeat: u32,
    pub children: Vec<PlanNode>,
}

#[derive(Debug, Clone)]
pub struct LeafInterval {
    /// Oppløst varighet, eller None når durationType/-Value ikke er brukbar.
    pub duration: Option<LeafDuration>,
    /// intensity == "REST" (uavhengig av store/små bokstaver)
    pub rest: bool,
    /// Målfart m/s, fraværende grense telles som 0.
    pub target_low: f64,
    pub target_high: f64,
    /// Bladets eget repeatValue (brukes bare i leaf_repeat-modus).
    pub repeat: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeafDuration {
    /// meter
    DistanceM(f64),
    /// sekunder
    TimeS(f64),
}

impl Interval {
    pub fn classify(&self) -> PlanNode {
        if self.steps.is_empty() {
            PlanNode::Leaf(LeafInterval {
                duration: self.leaf_duration(),
                rest: self.is_rest(),
                target_low: self.target_value_low.unwrap_or(0.0),
                target_high: self.target_value_high.unwrap_or(0.0),
                repeat: norm_repeat(self.repeat_value),
            })
        } else {
            PlanNode::Repeat(RepeatBlock {
                repeat: norm_repeat(self.repeat_value),
                children: classify_all(&self.steps),
            })
        }
    }

    fn is_rest(&self) -> bool {
        matches!(&self.intensity, Some(s) if s.trim().eq_ignore_ascii_case("rest"))
    }

    fn leaf_duration(&self) -> Option<LeafDuration> {
        let value = self.duration_value?;
        match self.duration_type.as_deref().map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("DISTANCE") => Some(LeafDuration::DistanceM(value)),
            Some(t) if t.eq_ignore_ascii_case("TIME") => Some(LeafDuration::TimeS(value)),
            _ => None,
        }
    }
}

pub fn classify_all(intervals: &[Interval]) -> Vec<PlanNode> {
    intervals.iter().map(Interval::classify).collect()
}

/// repeatValue: fraværende, 0 eller negativt betyr 1.
fn norm_repeat(v: Option<f64>) -> u32 {
    match v {
        Some(r) if r.is_finite() && r >= 1.0 => r as u32,
        _ => 1,
    }
}
