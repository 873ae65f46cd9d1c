use actix_web::{delete, get, post, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamMember, TeamRes};
use crate::types::user::UserRes;
use crate::utils::validate::require;

#[get("/{id}/members")]
pub async fn list_members(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<UserRes>> {
    let team = db.get_team(path.into_inner()).await?;
    let members = db.list_team_members(&team).await?;
    Ok(ApiResponse::Ok(members.into_iter().map(UserRes::from).collect()))
}

/// Adds the user with the given email. 404 for an unknown team, 400 for an
/// unknown user or an existing member.
#[post("/{id}/members")]
pub async fn add_member(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    data: web::Json<RTeamMember>,
) -> ApiResult<TeamRes> {
    require("email", &data.email)?;

    let (team, members) = db.add_team_member(path.into_inner(), &data.email).await?;
    info!("Added a member to team {} ({} members)", team.id, members.len());
    Ok(ApiResponse::Ok(TeamRes::new(team, members)))
}

/// 404 for an unknown team, 400 when the user is unknown or not a member.
#[delete("/{id}/members")]
pub async fn remove_member(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    data: web::Json<RTeamMember>,
) -> ApiResult<TeamRes> {
    require("email", &data.email)?;

    let (team, members) = db.remove_team_member(path.into_inner(), &data.email).await?;
    info!("Removed a member from team {} ({} members)", team.id, members.len());
    Ok(ApiResponse::Ok(TeamRes::new(team, members)))
}
