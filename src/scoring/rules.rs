//! Points tables and per-result scoring rules.
//!
//! Every function here is total: any integer position is accepted and
//! positions outside a table score 0.

/// Grand Prix points for P1..P10
pub const RACE_POINTS: [i32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Sprint points for P1..P8
pub const SPRINT_POINTS: [i32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Qualifying and sprint qualifying points for P1..P6
pub const QUALIFYING_POINTS: [i32; 6] = [12, 8, 6, 4, 2, 1];

pub const FASTEST_LAP_POINTS: i32 = 1;

/// Fastest lap only counts for drivers classified inside this position
pub const FASTEST_LAP_CUTOFF: i32 = 10;

pub const DNF_PENALTY: i32 = -5;

fn lookup(table: &[i32], position: i32) -> i32 {
    usize::try_from(position)
        .ok()
        .and_then(|p| p.checked_sub(1))
        .and_then(|idx| table.get(idx))
        .copied()
        .unwrap_or(0)
}

/// Grand Prix points, including the fastest lap point when it applies.
pub fn race_points(position: i32, fastest_lap_eligible: bool) -> i32 {
    lookup(&RACE_POINTS, position) + fastest_lap_points(position, fastest_lap_eligible)
}

/// The fastest lap point on its own: +1 for a top-10 finisher, else 0.
pub fn fastest_lap_points(position: i32, fastest_lap: bool) -> i32 {
    if fastest_lap && position <= FASTEST_LAP_CUTOFF {
        FASTEST_LAP_POINTS
    } else {
        0
    }
}

pub fn sprint_points(position: i32) -> i32 {
    lookup(&SPRINT_POINTS, position)
}

/// Points for a qualifying or sprint qualifying position
pub fn qualifying_points(position: i32) -> i32 {
    lookup(&QUALIFYING_POINTS, position)
}

pub fn dnf_penalty(finished: bool) -> i32 {
    if finished {
        0
    } else {
        DNF_PENALTY
    }
}

/// Places gained from the reference grid position; losing places costs nothing.
pub fn position_gain_points(reference_position: i32, finish_position: i32) -> i32 {
    let gained = i64::from(reference_position) - i64::from(finish_position);
    gained.clamp(0, i64::from(i32::MAX)) as i32
}

/// Sum points exactly, then clamp into `i32`. The result does not depend on
/// the order of `points`.
pub fn clamped_sum(points: impl IntoIterator<Item = i32>) -> i32 {
    let sum: i64 = points.into_iter().map(i64::from).sum();
    sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
