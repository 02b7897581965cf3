//! Constructor teammate matchups.
//!
//! Teammates are drivers of the same real-world constructor, not members of
//! the same fantasy team.

use serde::{Deserialize, Serialize};

use crate::league::types::{Driver, Placement};

pub const TEAMMATE_BONUS: i32 = 2;

/// Outcome of comparing one result against the driver's teammates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    /// Teammates with a result in the same race and session
    pub teammates_compared: u32,
    /// Teammates beaten, nonzero only when all of them were beaten
    pub teammates_beaten: u32,
    pub bonus: i32,
}

impl Matchup {
    pub fn won(&self) -> bool {
        self.bonus > 0
    }
}

/// Other drivers racing for the same constructor.
pub fn teammates<'a>(driver: &'a Driver, drivers: &'a [Driver]) -> impl Iterator<Item = &'a Driver> {
    drivers.iter().filter(move |d| {
        !driver.constructor.is_empty() && d.id != driver.id && d.constructor == driver.constructor
    })
}

/// Award the teammate bonus when `result` is strictly ahead of every
/// teammate who has a result in the same race of `session_results`.
///
/// No teammate with a result means no bonus, and a tie is not a win.
pub fn teammate_bonus<R, P>(
    driver: &Driver,
    result: &R,
    session_results: &[P],
    drivers: &[Driver],
) -> Matchup
where
    R: Placement + ?Sized,
    P: Placement,
{
    let race_id = result.race_id();
    let position = result.position();

    let mut compared = 0;
    let mut beat_all = true;

    for teammate in teammates(driver, drivers) {
        let teammate_result = session_results
            .iter()
            .find(|r| r.race_id() == race_id && r.driver_id() == teammate.id);

        if let Some(teammate_result) = teammate_result {
            compared += 1;
            if teammate_result.position() <= position {
                beat_all = false;
            }
        }
    }

    if compared > 0 && beat_all {
        Matchup {
            teammates_compared: compared,
            teammates_beaten: compared,
            bonus: TEAMMATE_BONUS,
        }
    } else {
        Matchup {
            teammates_compared: compared,
            teammates_beaten: 0,
            bonus: 0,
        }
    }
}
