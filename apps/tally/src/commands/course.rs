//! # Course Commands
//!
//! Creating and selecting courses.

use tracing::{debug, info};

use tally_core::validation::validate_course_name;
use tally_core::CourseId;

use crate::error::ApiResult;
use crate::state::{AppState, Snapshot};

/// Adds a course and publishes the reloaded snapshot.
///
/// ## Arguments
/// * `name` - Course name, trimmed before storing
///
/// ## Returns
/// The snapshot containing the new course, or `VALIDATION_ERROR` for a
/// blank name. Nothing is written on error.
pub async fn add_course(state: &AppState, name: &str) -> ApiResult<Snapshot> {
    let name = validate_course_name(name)?;
    debug!(name = %name, "add_course command");

    let course = state.db().courses().insert(&name).await?;
    info!(id = course.id, name = %course.name, "Course added");

    state.refresh().await?;
    Ok(state.snapshot().await)
}

/// Marks a course as the one whose participants are shown.
///
/// UI state only; storage is not touched.
pub async fn select_course(state: &AppState, course_id: CourseId) -> ApiResult<Snapshot> {
    debug!(course_id, "select_course command");
    state.view_mut().await.select_course(course_id)?;
    Ok(state.snapshot().await)
}

/// Reloads everything from storage.
pub async fn refresh(state: &AppState) -> ApiResult<Snapshot> {
    debug!("refresh command");
    state.refresh().await?;
    Ok(state.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::empty_state;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_add_course_appears_in_snapshot() {
        let state = empty_state().await;

        let snapshot = add_course(&state, "  Mathematik ").await.unwrap();
        assert_eq!(snapshot.courses.len(), 1);
        assert_eq!(snapshot.courses[0].name, "Mathematik");

        let snapshot = add_course(&state, "Physik").await.unwrap();
        let ids: Vec<_> = snapshot.courses.iter().map(|c| c.id).collect();
        assert_eq!(snapshot.courses[1].name, "Physik");
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn test_blank_course_name_is_rejected() {
        let state = empty_state().await;

        let err = add_course(&state, "   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.db().courses().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_select_course() {
        let state = empty_state().await;
        let snapshot = add_course(&state, "Kunst").await.unwrap();
        let id = snapshot.courses[0].id;

        let snapshot = select_course(&state, id).await.unwrap();
        assert_eq!(snapshot.selected_course_id, Some(id));

        let err = select_course(&state, id + 100).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(state.snapshot().await.selected_course_id, Some(id));
    }

    #[tokio::test]
    async fn test_refresh_sees_outside_writes() {
        let state = empty_state().await;
        state.db().courses().insert("Musik").await.unwrap();

        let snapshot = refresh(&state).await.unwrap();
        assert_eq!(snapshot.courses[0].name, "Musik");
    }
}
