//! # Participant Commands

use tracing::{debug, info};

use tally_core::validation::validate_participant_name;
use tally_core::CourseId;

use crate::error::ApiResult;
use crate::state::{AppState, Snapshot};

/// Enrolls a participant in a course with a score of zero.
///
/// The course id is checked by the foreign key, not up front: an unknown
/// course comes back as `VALIDATION_ERROR` "Invalid reference".
pub async fn add_participant(
    state: &AppState,
    course_id: CourseId,
    name: &str,
) -> ApiResult<Snapshot> {
    let name = validate_participant_name(name)?;
    debug!(course_id, name = %name, "add_participant command");

    let participant = state.db().participants().insert(course_id, &name).await?;
    info!(id = participant.id, course_id, "Participant added");

    state.refresh().await?;
    Ok(state.snapshot().await)
}
