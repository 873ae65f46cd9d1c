use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeam, TeamRes};
use crate::utils::validate::require;

/// Overwrites name and description; members are managed under `/members`.
#[put("/{id}")]
pub async fn update_team(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    data: web::Json<RTeam>,
) -> ApiResult<TeamRes> {
    let team_id = path.into_inner();
    db.get_team(team_id).await?;

    let data = data.into_inner();
    require("name", &data.name)?;

    let team = db.update_team(team_id, data.name, data.description).await?;
    let members = db.list_team_members(&team).await?;
    Ok(ApiResponse::Ok(TeamRes::new(team, members)))
}
