//! Sprint calendar and state-to-sprint assignment.
//!
//! Five two-week sprints are laid out around today: three completed, one
//! active, one planned. Finished work lands in a random past sprint,
//! in-flight work in the active one, so a freshly seeded project looks like
//! it has been running for a quarter.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, RngCore};
use tracing::{info, warn};

use crate::models::is_completion_state;
use crate::remote::{IterationOutcome, TrackingStore};

/// Sprint numbers that count as finished history.
pub const PAST_SPRINTS: std::ops::RangeInclusive<u32> = 1..=3;

/// Sprint number currently underway.
pub const CURRENT_SPRINT: u32 = 4;

/// States that put an item into the current sprint.
const IN_FLIGHT_STATES: [&str; 4] = ["Committed", "Active", "In Progress", "Doing"];

/// One iteration with its date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintWindow {
    pub name: String,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
}

/// The five sprint windows anchored on `today`.
pub fn sprint_schedule(today: DateTime<Utc>) -> Vec<SprintWindow> {
    let offsets: [(i64, i64); 5] = [(-84, -71), (-70, -57), (-56, -43), (-7, 7), (8, 22)];
    offsets
        .iter()
        .enumerate()
        .map(|(i, &(start, finish))| SprintWindow {
            name: format!("Sprint {}", i + 1),
            start: today + Duration::days(start),
            finish: today + Duration::days(finish),
        })
        .collect()
}

/// Iteration path an item in `state` belongs to. Completed work goes to a
/// random past sprint, in-flight work to the current sprint, everything
/// else stays on the project root backlog.
pub fn sprint_for_state(project: &str, state: &str, rng: &mut dyn RngCore) -> String {
    if is_completion_state(state) {
        let sprint = rng.gen_range(PAST_SPRINTS);
        format!("{project}\\Sprint {sprint}")
    } else if IN_FLIGHT_STATES.contains(&state) {
        format!("{project}\\Sprint {CURRENT_SPRINT}")
    } else {
        project.to_string()
    }
}

/// Create or re-date the five sprint iterations. A sprint that cannot be
/// set up is logged and skipped so the rest still go through. Returns how
/// many were set up.
pub async fn ensure_sprints<S>(store: &S, project: &str, today: DateTime<Utc>) -> usize
where
    S: TrackingStore + ?Sized,
{
    info!("setting up sprints with historical dates");

    let mut ensured = 0;
    for window in sprint_schedule(today) {
        match store
            .ensure_iteration(project, &window.name, window.start, window.finish)
            .await
        {
            Ok(outcome) => {
                ensured += 1;
                let verb = match outcome {
                    IterationOutcome::Created => "created",
                    IterationOutcome::Updated => "updated",
                };
                info!(
                    "{} {}: {} - {}",
                    verb,
                    window.name,
                    window.start.format("%b %d"),
                    window.finish.format("%b %d, %Y")
                );
            }
            Err(err) => {
                warn!("could not create or update {}: {}", window.name, err);
            }
        }
    }

    info!("sprint setup complete");
    ensured
}
