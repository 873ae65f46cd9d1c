use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamRes;

#[get("")]
pub async fn list_teams(db: web::Data<Arc<DbService>>) -> ApiResult<Vec<TeamRes>> {
    let teams = db.list_teams_with_members().await?;
    Ok(ApiResponse::Ok(
        teams.into_iter().map(|(team, members)| TeamRes::new(team, members)).collect(),
    ))
}

#[get("/{id}")]
pub async fn get_team(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<TeamRes> {
    let team = db.get_team(path.into_inner()).await?;
    let members = db.list_team_members(&team).await?;
    Ok(ApiResponse::Ok(TeamRes::new(team, members)))
}
