//! # Layout Commands
//!
//! Pane visibility and width. Neither touches storage.

use tracing::debug;

use tally_core::validation::{validate_pane_width, validate_window_width};

use crate::error::ApiResult;
use crate::state::{AppState, Snapshot};

/// Shows or hides the course list pane.
pub async fn toggle_pane_visibility(state: &AppState) -> ApiResult<Snapshot> {
    let visible = state.view_mut().await.toggle_left_pane();
    debug!(visible, "toggle_pane_visibility command");
    Ok(state.snapshot().await)
}

/// Records the participant pane width measured by the presentation layer.
///
/// A window width sent along re-evaluates the course pane breakpoint.
/// Both widths are checked before either is stored.
pub async fn report_pane_width(
    state: &AppState,
    width: f64,
    window_width: Option<f64>,
) -> ApiResult<Snapshot> {
    let width = validate_pane_width(width)?;
    let window_width = window_width.map(validate_window_width).transpose()?;
    debug!(width, ?window_width, "report_pane_width command");

    let mut view = state.view_mut().await;
    view.set_right_pane_width(width);
    if let Some(window_width) = window_width {
        view.set_window_width(window_width);
    }
    drop(view);

    Ok(state.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::empty_state;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_toggle_pane_visibility() {
        let state = empty_state().await;

        let snapshot = toggle_pane_visibility(&state).await.unwrap();
        assert!(!snapshot.layout.left_pane_visible);
        assert!(!snapshot.layout.course_pane_shown);

        let snapshot = toggle_pane_visibility(&state).await.unwrap();
        assert!(snapshot.layout.left_pane_visible);
    }

    #[tokio::test]
    async fn test_report_pane_width_sets_columns() {
        let state = empty_state().await;

        let snapshot = report_pane_width(&state, 730.0, None).await.unwrap();
        assert_eq!(snapshot.layout.right_pane_width, 730.0);
        assert_eq!(snapshot.layout.columns, 6);

        let snapshot = report_pane_width(&state, 30.0, None).await.unwrap();
        assert_eq!(snapshot.layout.columns, 1);
    }

    #[tokio::test]
    async fn test_negative_width_is_rejected() {
        let state = empty_state().await;
        let before = state.snapshot().await;

        let err = report_pane_width(&state, -1.0, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.snapshot().await, before);

        let err = report_pane_width(&state, 300.0, Some(f64::NAN)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_window_width_moves_breakpoint() {
        let state = empty_state().await;
        assert!(state.snapshot().await.layout.course_pane_shown);

        let snapshot = report_pane_width(&state, 400.0, Some(600.0)).await.unwrap();
        assert!(!snapshot.layout.course_pane_shown);
        assert!(snapshot.layout.left_pane_visible);

        // Pane width alone keeps the last window width
        let snapshot = report_pane_width(&state, 380.0, None).await.unwrap();
        assert!(!snapshot.layout.course_pane_shown);

        let snapshot = report_pane_width(&state, 700.0, Some(1280.0)).await.unwrap();
        assert!(snapshot.layout.course_pane_shown);
    }
}
