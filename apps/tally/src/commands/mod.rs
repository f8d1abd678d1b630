//! # Commands Module
//!
//! Every intent the presentation layer can send.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (Intent, Reply, dispatch)
//! ├── course.rs       ◄─── addCourse, selectCourse, refresh
//! ├── participant.rs  ◄─── addParticipant
//! ├── point.rs        ◄─── addPoint, participantHistory
//! └── layout.rs       ◄─── togglePaneVisibility, reportPaneWidth
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Intent Flow                                          │
//! │                                                                         │
//! │  {"intent":"addPoint","participantId":3}                                │
//! │         │                                                               │
//! │         │ serde_json::from_str::<Intent>                                │
//! │         ▼                                                               │
//! │  dispatch(&state, Intent::AddPoint { participant_id: 3 })               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  point::add_point ── INSERT ── await ── refresh ── snapshot             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"type":"snapshot","courses":[...],"participantsByCourse":{...},...}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations validate first, write second and refresh last. A failure at
//! any step returns before the view is replaced.

pub mod course;
pub mod layout;
pub mod participant;
pub mod point;

use serde::{Deserialize, Serialize};

use tally_core::{CourseId, ParticipantId};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, Snapshot};
use point::History;

/// A request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum Intent {
    #[serde(rename_all = "camelCase")]
    SelectCourse { course_id: CourseId },

    AddCourse { name: String },

    #[serde(rename_all = "camelCase")]
    AddParticipant { course_id: CourseId, name: String },

    #[serde(rename_all = "camelCase")]
    AddPoint { participant_id: ParticipantId },

    #[serde(rename_all = "camelCase")]
    ParticipantHistory { participant_id: ParticipantId },

    TogglePaneVisibility,

    #[serde(rename_all = "camelCase")]
    ReportPaneWidth {
        width: f64,
        #[serde(default)]
        window_width: Option<f64>,
    },

    Refresh,
}

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Reply {
    Snapshot(Snapshot),
    History(History),
    Error(ApiError),
}

/// Routes an intent to its command.
pub async fn dispatch(state: &AppState, intent: Intent) -> ApiResult<Reply> {
    let snapshot = match intent {
        Intent::SelectCourse { course_id } => course::select_course(state, course_id).await?,
        Intent::AddCourse { name } => course::add_course(state, &name).await?,
        Intent::AddParticipant { course_id, name } => {
            participant::add_participant(state, course_id, &name).await?
        }
        Intent::AddPoint { participant_id } => point::add_point(state, participant_id).await?,
        Intent::ParticipantHistory { participant_id } => {
            return Ok(Reply::History(
                point::participant_history(state, participant_id).await?,
            ));
        }
        Intent::TogglePaneVisibility => layout::toggle_pane_visibility(state).await?,
        Intent::ReportPaneWidth {
            width,
            window_width,
        } => layout::report_pane_width(state, width, window_width).await?,
        Intent::Refresh => course::refresh(state).await?,
    };
    Ok(Reply::Snapshot(snapshot))
}
