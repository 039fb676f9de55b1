use pacegraph_core::chart::{gradient_color, lap_bars};
use pacegraph_core::types::Lap;

fn lap(dist_km: f64, pace: f64) -> Lap {
    Lap {
        lap_distance_in_kilometers: dist_km,
        lap_duration_in_seconds: dist_km * pace * 60.0,
        lap_pace_in_min_km: pace,
        avg_heart_rate: 0.0,
    }
}

#[test]
fn widths_are_shares_of_total_distance() {
    let bars = lap_bars(&[lap(1.0, 5.0), lap(3.0, 6.0)]);
    assert_eq!(bars.len(), 2);
    assert!((bars[0].width_frac - 0.25).abs() < 1e-9);
    assert!((bars[1].width_frac - 0.75).abs() < 1e-9);

    let sum: f64 = bars.iter().map(|b| b.width_frac).sum();
    assert!((sum - 1.0).abs() < 1e-3, "bredder skal summere til 1: {sum}");
}

#[test]
fn fastest_lap_is_tallest_and_bluest_slowest_is_red() {
    let bars = lap_bars(&[lap(1.0, 4.0), lap(1.0, 7.0), lap(0.2, 10.0)]);
    // raskest: t=0 -> ren blå, full høyde
    assert_eq!(bars[0].color, "#3b82f6");
    assert!((bars[0].height_frac - 1.0).abs() < 1e-9);
    // tregest: t=1 -> ren rød, lavest søyle
    assert_eq!(bars[2].color, "#ef4444");
    assert!((bars[2].height_frac - 0.4).abs() < 1e-9);
    // høyde er invertert tempo: 4/7
    assert!((bars[1].height_frac - 4.0 / 7.0).abs() < 1e-4);
}

#[test]
fn uniform_pace_pins_mid_gradient_and_full_height() {
    let bars = lap_bars(&[lap(1.0, 5.5), lap(2.0, 5.5)]);
    for b in &bars {
        assert_eq!(b.color, "#8b5cf6", "likt tempo skal lande midt i gradienten");
        assert!((b.height_frac - 1.0).abs() < 1e-9);
    }
}

#[test]
fn degenerate_series_gives_empty_bars_not_nan() {
    assert!(lap_bars(&[]).is_empty());

    // håndlagde null-lap (kan ikke komme fra utflatingen, men API-et er pub)
    let zero = Lap {
        lap_distance_in_kilometers: 0.0,
        lap_duration_in_seconds: 0.0,
        lap_pace_in_min_km: 5.0,
        avg_heart_rate: 0.0,
    };
    assert!(lap_bars(&[zero]).is_empty(), "total 0 km skal gi tom liste");
}

#[test]
fn gradient_endpoints_and_clamp() {
    assert_eq!(gradient_color(0.0), "#3b82f6");
    assert_eq!(gradient_color(0.5), "#8b5cf6");
    assert_eq!(gradient_color(1.0), "#ef4444");
    // utenfor [0,1] klemmes inn
    assert_eq!(gradient_color(-2.0), gradient_color(0.0));
    assert_eq!(gradient_color(9.0), gradient_color(1.0));
}
