use chrono::{DateTime, NaiveDate, Utc};
use entity::{project::Model as ProjectModel, team::Model as TeamModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::team::TeamSummary;

/// Every field is written on update; an absent `teamId` unlinks the team.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RProject {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub owner_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRes {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub owner_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub team: Option<TeamSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(ProjectModel, Option<TeamModel>)> for ProjectRes {
    fn from((p, team): (ProjectModel, Option<TeamModel>)) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            status: p.status,
            due_date: p.due_date,
            owner_id: p.owner_id,
            team_id: p.team_id,
            team: team.map(TeamSummary::from),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
