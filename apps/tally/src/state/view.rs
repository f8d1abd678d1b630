//! # View State
//!
//! The in-memory picture the presentation layer renders from.
//!
//! ## Refresh Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ViewState Lifecycle                                  │
//! │                                                                         │
//! │  Intent                  Storage                    ViewState           │
//! │  ──────                  ───────                    ─────────           │
//! │                                                                         │
//! │  addPoint(3) ──────────► INSERT INTO points ──┐                         │
//! │                                               │ (awaited)               │
//! │                          courses().list() ◄───┘                         │
//! │                          list_with_scores() ──────► replace(..)         │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                                   snapshot() ──► JSON   │
//! │                                                                         │
//! │  selectCourse(1) ──────────────────────────────────► selected = 1       │
//! │  togglePaneVisibility ─────────────────────────────► visible = !visible │
//! │  reportPaneWidth(480) ─────────────────────────────► width = 480        │
//! │                                                                         │
//! │  NOTE: Data is always replaced wholesale. UI fields never hit storage.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tally_core::{Course, CoreError, CoreResult, CourseId, ParticipantsByCourse, TileLayout};

/// Courses, scores and UI state held between intents.
#[derive(Debug, Clone)]
pub struct ViewState {
    courses: Vec<Course>,
    participants_by_course: ParticipantsByCourse,
    selected_course_id: Option<CourseId>,
    left_pane_visible: bool,
    right_pane_width: f64,
    window_width: f64,
    layout: TileLayout,
}

/// Serializable copy of [`ViewState`] handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub courses: Vec<Course>,
    pub participants_by_course: ParticipantsByCourse,
    pub selected_course_id: Option<CourseId>,
    pub layout: LayoutSnapshot,
}

/// Pane and grid state derived from the reported widths.
///
/// `course_pane_shown` follows the last window width reported with
/// `reportPaneWidth`, or the configured width until one arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub left_pane_visible: bool,
    pub course_pane_shown: bool,
    pub right_pane_width: f64,
    pub columns: u32,
}

impl ViewState {
    /// Creates an empty view. The right pane starts at half the window.
    pub fn new(layout: TileLayout, window_width: f64) -> Self {
        ViewState {
            courses: Vec::new(),
            participants_by_course: ParticipantsByCourse::new(),
            selected_course_id: None,
            left_pane_visible: true,
            right_pane_width: window_width / 2.0,
            window_width,
            layout,
        }
    }

    /// Replaces the stored data with freshly loaded rows.
    ///
    /// A selection pointing at a course that is gone is cleared.
    pub fn replace(&mut self, courses: Vec<Course>, participants_by_course: ParticipantsByCourse) {
        self.courses = courses;
        self.participants_by_course = participants_by_course;

        if let Some(id) = self.selected_course_id {
            if !self.has_course(id) {
                self.selected_course_id = None;
            }
        }
    }

    /// Marks a course as selected. Unknown ids are rejected.
    pub fn select_course(&mut self, id: CourseId) -> CoreResult<()> {
        if !self.has_course(id) {
            return Err(CoreError::CourseNotFound(id));
        }
        self.selected_course_id = Some(id);
        Ok(())
    }

    /// Flips the course list pane. Returns the new visibility.
    pub fn toggle_left_pane(&mut self) -> bool {
        self.left_pane_visible = !self.left_pane_visible;
        self.left_pane_visible
    }

    /// Stores the measured width of the participant pane.
    pub fn set_right_pane_width(&mut self, width: f64) {
        self.right_pane_width = width;
    }

    /// Stores the window width the breakpoint is checked against.
    pub fn set_window_width(&mut self, width: f64) {
        self.window_width = width;
    }

    pub fn selected_course_id(&self) -> Option<CourseId> {
        self.selected_course_id
    }

    pub fn right_pane_width(&self) -> f64 {
        self.right_pane_width
    }

    fn has_course(&self, id: CourseId) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    /// Clones the current state for serialization.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            courses: self.courses.clone(),
            participants_by_course: self.participants_by_course.clone(),
            selected_course_id: self.selected_course_id,
            layout: LayoutSnapshot {
                left_pane_visible: self.left_pane_visible,
                course_pane_shown: self
                    .layout
                    .shows_course_pane(self.window_width, self.left_pane_visible),
                right_pane_width: self.right_pane_width,
                columns: self.layout.columns_for_width(self.right_pane_width),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{group_by_course, ParticipantScore};

    fn course(id: CourseId, name: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
        }
    }

    fn score(id: i64, course_id: CourseId, score: i64) -> ParticipantScore {
        ParticipantScore {
            id,
            name: format!("P{}", id),
            course_id,
            score,
        }
    }

    #[test]
    fn test_new_view_defaults() {
        let view = ViewState::new(TileLayout::default(), 1024.0);
        let snapshot = view.snapshot();

        assert!(snapshot.courses.is_empty());
        assert_eq!(snapshot.selected_course_id, None);
        assert!(snapshot.layout.left_pane_visible);
        assert!(snapshot.layout.course_pane_shown);
        assert_eq!(snapshot.layout.right_pane_width, 512.0);
        assert_eq!(snapshot.layout.columns, 4);
    }

    #[test]
    fn test_select_course() {
        let mut view = ViewState::new(TileLayout::default(), 1024.0);
        view.replace(vec![course(1, "Demokurs")], ParticipantsByCourse::new());

        assert!(view.select_course(1).is_ok());
        assert_eq!(view.selected_course_id(), Some(1));

        assert!(matches!(view.select_course(9), Err(CoreError::CourseNotFound(9))));
        assert_eq!(view.selected_course_id(), Some(1));
    }

    #[test]
    fn test_replace_drops_stale_selection() {
        let mut view = ViewState::new(TileLayout::default(), 1024.0);
        view.replace(vec![course(1, "A"), course(2, "B")], ParticipantsByCourse::new());
        view.select_course(2).unwrap();

        view.replace(vec![course(1, "A"), course(2, "B")], ParticipantsByCourse::new());
        assert_eq!(view.selected_course_id(), Some(2));

        view.replace(vec![course(1, "A")], ParticipantsByCourse::new());
        assert_eq!(view.selected_course_id(), None);
    }

    #[test]
    fn test_pane_state() {
        let mut view = ViewState::new(TileLayout::default(), 600.0);
        // Below the breakpoint the course pane stays hidden
        assert!(!view.snapshot().layout.course_pane_shown);

        assert!(!view.toggle_left_pane());
        assert!(view.toggle_left_pane());

        view.set_right_pane_width(250.0);
        assert_eq!(view.right_pane_width(), 250.0);
        assert_eq!(view.snapshot().layout.columns, 2);

        // Rotating to landscape crosses the breakpoint
        view.set_window_width(900.0);
        assert!(view.snapshot().layout.course_pane_shown);
        view.set_window_width(500.0);
        assert!(!view.snapshot().layout.course_pane_shown);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut view = ViewState::new(TileLayout::default(), 1024.0);
        view.replace(
            vec![course(1, "Demokurs")],
            group_by_course(vec![score(1, 1, 3), score(2, 1, 0)]),
        );

        let json = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(json["courses"][0]["name"], "Demokurs");
        assert_eq!(json["participantsByCourse"]["1"][0]["score"], 3);
        assert_eq!(json["participantsByCourse"]["1"][1]["courseId"], 1);
        assert!(json["selectedCourseId"].is_null());
        assert_eq!(json["layout"]["leftPaneVisible"], true);
        assert_eq!(json["layout"]["columns"], 4);
    }
}
