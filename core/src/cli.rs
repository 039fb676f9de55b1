use crate::models::WorkoutPlan;
use crate::report::plan_report;
use crate::types::FlattenCfg;

pub fn print_plan_report(plan: &WorkoutPlan, cfg: &FlattenCfg) {
    let rep = plan_report(plan, cfg);

    println!("--- Plan Report ---");
    if let Some(name) = &rep.workout_name {
        println!("Økt: {name}");
    }
    if let Some(date) = rep.workout_date {
        println!("Dato: {date}");
    }
    for (i, lap) in rep.laps.iter().enumerate() {
        println!(
            "{:>3}  {:>6.3} km  {:>7.1} s  {:>5.2} min/km",
            i + 1,
            lap.lap_distance_in_kilometers,
            lap.lap_duration_in_seconds,
            lap.lap_pace_in_min_km
        );
    }
    println!(
        "Totalt: {:.3} km / {:.1} s",
        rep.total_distance_in_kilometers, rep.total_duration_in_seconds
    );
    if let Some(p) = rep.avg_pace_in_min_km {
        println!("Snittempo: {p:.2} min/km");
    }
}
