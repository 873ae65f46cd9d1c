use chrono::{DateTime, NaiveDateTime, Utc};
use entity::event::Model as EventModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `createdBy` is only read on create.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct REvent {
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub all_day: bool,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub project_id: Option<Uuid>,
    pub created_by: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRes {
    pub id: Uuid,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub all_day: bool,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub project_id: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventModel> for EventRes {
    fn from(e: EventModel) -> Self {
        Self {
            id: e.id,
            title: e.title,
            start_time: e.start_time,
            end_time: e.end_time,
            all_day: e.all_day,
            category: e.category,
            description: e.description,
            status: e.status,
            project_id: e.project_id,
            created_by: e.created_by,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
