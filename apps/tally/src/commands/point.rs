//! # Point Commands
//!
//! Awarding points and reading a participant's point history.

use serde::Serialize;
use tracing::{debug, info};

use tally_core::{CoreError, ParticipantId, Point};

use crate::error::ApiResult;
use crate::state::{AppState, Snapshot};

/// Points awarded to one participant, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub participant_id: ParticipantId,
    pub score: i64,
    pub points: Vec<Point>,
}

/// Awards one point to a participant.
///
/// Not idempotent: every call adds another point.
pub async fn add_point(state: &AppState, participant_id: ParticipantId) -> ApiResult<Snapshot> {
    debug!(participant_id, "add_point command");

    let point = state.db().points().add(participant_id).await?;
    info!(participant_id, point_id = point.id, "Point added");

    state.refresh().await?;
    Ok(state.snapshot().await)
}

/// Lists the points a participant has received.
pub async fn participant_history(
    state: &AppState,
    participant_id: ParticipantId,
) -> ApiResult<History> {
    debug!(participant_id, "participant_history command");

    state
        .db()
        .participants()
        .get_by_id(participant_id)
        .await?
        .ok_or(CoreError::ParticipantNotFound(participant_id))?;

    let points = state.db().points().list_for_participant(participant_id).await?;

    Ok(History {
        participant_id,
        score: points.len() as i64,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::course::add_course;
    use crate::commands::participant::add_participant;
    use crate::commands::tests::empty_state;
    use crate::error::ErrorCode;

    async fn state_with_participant() -> (AppState, ParticipantId) {
        let state = empty_state().await;
        let course_id = add_course(&state, "Sport").await.unwrap().courses[0].id;
        let snapshot = add_participant(&state, course_id, "Alice").await.unwrap();
        let id = snapshot.participants_by_course[&course_id][0].id;
        (state, id)
    }

    #[tokio::test]
    async fn test_add_point_twice_adds_two() {
        let (state, id) = state_with_participant().await;

        add_point(&state, id).await.unwrap();
        let snapshot = add_point(&state, id).await.unwrap();

        let score = snapshot
            .participants_by_course
            .values()
            .flatten()
            .find(|p| p.id == id)
            .map(|p| p.score);
        assert_eq!(score, Some(2));
    }

    #[tokio::test]
    async fn test_unknown_participant_is_rejected() {
        let (state, _) = state_with_participant().await;
        let before = state.snapshot().await;

        let err = add_point(&state, 999).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.snapshot().await, before);
        assert_eq!(state.db().points().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_history() {
        let (state, id) = state_with_participant().await;
        add_point(&state, id).await.unwrap();
        add_point(&state, id).await.unwrap();

        let history = participant_history(&state, id).await.unwrap();
        assert_eq!(history.participant_id, id);
        assert_eq!(history.score, 2);
        assert!(history.points[0].timestamp >= history.points[1].timestamp);

        let err = participant_history(&state, 999).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Participant not found: 999");
    }
}
