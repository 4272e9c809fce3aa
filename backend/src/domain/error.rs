//! Published error identifiers.
//!
//! Each id names one domain error condition. Clients match on these strings,
//! so they form a wire contract: never rename a published id. The format is
//! `[Subject]_[Operation]_[Problem]`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
pub enum ErrorId {
    /// `GET /project/{id}` referenced a missing project.
    #[serde(rename = "Project_Get_NoProjectExistsWithId")]
    ProjectGetNoProjectExistsWithId,
    /// `DELETE /project/{id}` referenced a missing project.
    #[serde(rename = "Project_Delete_NoProjectExistsWithId")]
    ProjectDeleteNoProjectExistsWithId,
    /// `PUT /project/{id}` referenced a missing project.
    #[serde(rename = "Project_Save_NoProjectExistsWithId")]
    ProjectSaveNoProjectExistsWithId,
    /// `GET /project/{projectId}/task/{id}` referenced a missing project.
    #[serde(rename = "Task_Get_NoProjectExistsWithId")]
    TaskGetNoProjectExistsWithId,
    /// `GET /project/{projectId}/task/{id}` referenced a missing task.
    #[serde(rename = "Task_Get_NoTaskExistsWithId")]
    TaskGetNoTaskExistsWithId,
    /// `POST /project/{projectId}/task` referenced a missing project.
    #[serde(rename = "Task_Create_NoProjectExistsWithId")]
    TaskCreateNoProjectExistsWithId,
    /// `PUT /project/{projectId}/task/{id}` referenced a missing project.
    #[serde(rename = "Task_Save_NoProjectExistsWithId")]
    TaskSaveNoProjectExistsWithId,
    /// `PUT /project/{projectId}/task/{id}` referenced a missing task.
    #[serde(rename = "Task_Save_NoTaskExistsWithId")]
    TaskSaveNoTaskExistsWithId,
    /// `DELETE /project/{projectId}/task/{id}` referenced a missing project.
    #[serde(rename = "Task_Delete_NoProjectExistsWithId")]
    TaskDeleteNoProjectExistsWithId,
    /// `DELETE /project/{projectId}/task/{id}` referenced a missing task.
    #[serde(rename = "Task_Delete_NoTaskExistsWithId")]
    TaskDeleteNoTaskExistsWithId,
}

impl ErrorId {
    /// The published wire string for this id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectGetNoProjectExistsWithId => "Project_Get_NoProjectExistsWithId",
            Self::ProjectDeleteNoProjectExistsWithId => "Project_Delete_NoProjectExistsWithId",
            Self::ProjectSaveNoProjectExistsWithId => "Project_Save_NoProjectExistsWithId",
            Self::TaskGetNoProjectExistsWithId => "Task_Get_NoProjectExistsWithId",
            Self::TaskGetNoTaskExistsWithId => "Task_Get_NoTaskExistsWithId",
            Self::TaskCreateNoProjectExistsWithId => "Task_Create_NoProjectExistsWithId",
            Self::TaskSaveNoProjectExistsWithId => "Task_Save_NoProjectExistsWithId",
            Self::TaskSaveNoTaskExistsWithId => "Task_Save_NoTaskExistsWithId",
            Self::TaskDeleteNoProjectExistsWithId => "Task_Delete_NoProjectExistsWithId",
            Self::TaskDeleteNoTaskExistsWithId => "Task_Delete_NoTaskExistsWithId",
        }
    }
}

impl std::fmt::Display for ErrorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorId::ProjectGetNoProjectExistsWithId, "Project_Get_NoProjectExistsWithId")]
    #[case(ErrorId::TaskSaveNoTaskExistsWithId, "Task_Save_NoTaskExistsWithId")]
    #[case(ErrorId::TaskDeleteNoProjectExistsWithId, "Task_Delete_NoProjectExistsWithId")]
    fn serializes_to_published_string(#[case] id: ErrorId, #[case] expected: &str) {
        let json = serde_json::to_value(id).expect("serialize error id");
        assert_eq!(json, serde_json::Value::String(expected.to_owned()));
        assert_eq!(id.as_str(), expected);
    }

    #[test]
    fn round_trips_through_serde() {
        let id: ErrorId =
            serde_json::from_str("\"Task_Create_NoProjectExistsWithId\"").expect("known id");
        assert_eq!(id, ErrorId::TaskCreateNoProjectExistsWithId);
    }
}
