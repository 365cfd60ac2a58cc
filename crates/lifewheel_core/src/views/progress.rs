//! Per-sphere progress aggregation.

use crate::model::goal::Goal;
use crate::model::sphere::{Sphere, SPHERES};
use serde::Serialize;

/// Number of leading spheres drawn on the balance wheel.
///
/// The wheel and its score only cover `SPHERES[..4]`; the remaining eight
/// spheres are shown by `sphere_overview` alone.
pub const WHEEL_SPHERE_COUNT: usize = 4;

/// Aggregated progress of one sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SphereProgress {
    pub sphere: &'static Sphere,
    /// `0..=100`.
    pub progress: u8,
}

/// Balance wheel segments plus the score shown in its center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceWheel {
    pub segments: Vec<SphereProgress>,
    /// Score in tenths, `0..=100` (displayed as `0.0..=10.0`).
    pub score_tenths: u8,
}

impl BalanceWheel {
    /// Center score on a `0.0..=10.0` scale.
    pub fn score(&self) -> f64 {
        f64::from(self.score_tenths) / 10.0
    }
}

/// Mean progress of goals in `sphere`, rounded half up.
///
/// Returns `0` when the sphere has no goals.
pub fn sphere_progress(goals: &[Goal], sphere: &str) -> u8 {
    let (sum, count) = goals
        .iter()
        .filter(|goal| goal.sphere == sphere)
        .fold((0u64, 0u64), |(sum, count), goal| {
            (sum + u64::from(goal.progress.value()), count + 1)
        });

    if count == 0 {
        return 0;
    }
    // Integer round-half-up of sum / count; bounded by the max progress.
    ((2 * sum + count) / (2 * count)).min(100) as u8
}

/// Progress of every sphere in table order.
pub fn sphere_overview(goals: &[Goal]) -> Vec<SphereProgress> {
    SPHERES
        .iter()
        .map(|sphere| SphereProgress {
            sphere,
            progress: sphere_progress(goals, sphere.name),
        })
        .collect()
}

/// Wheel view over the first `WHEEL_SPHERE_COUNT` spheres.
///
/// Score is `round(sum / WHEEL_SPHERE_COUNT)` tenths.
pub fn balance_wheel(goals: &[Goal]) -> BalanceWheel {
    let segments = SPHERES[..WHEEL_SPHERE_COUNT]
        .iter()
        .map(|sphere| SphereProgress {
            sphere,
            progress: sphere_progress(goals, sphere.name),
        })
        .collect::<Vec<_>>();

    let sum = segments
        .iter()
        .map(|segment| u64::from(segment.progress))
        .sum::<u64>();
    let count = WHEEL_SPHERE_COUNT as u64;
    let score_tenths = ((2 * sum + count) / (2 * count)).min(100) as u8;

    BalanceWheel {
        segments,
        score_tenths,
    }
}
