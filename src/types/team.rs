use chrono::{DateTime, Utc};
use entity::{team::Model as TeamModel, user::Model as UserModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::user::UserRes;

/// Body for both create and full-overwrite update.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RTeam {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamMember {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRes {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<UserRes>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamRes {
    pub fn new(team: TeamModel, members: Vec<UserModel>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            description: team.description,
            members: members.into_iter().map(UserRes::from).collect(),
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

/// Team as embedded in a project, without members.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<TeamModel> for TeamSummary {
    fn from(t: TeamModel) -> Self {
        Self { id: t.id, name: t.name, description: t.description }
    }
}
