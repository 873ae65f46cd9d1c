use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamSummary;
use crate::types::user::UserRes;
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("")]
pub async fn list_users(db: web::Data<Arc<DbService>>) -> ApiResult<Vec<UserRes>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}

#[get("/{id}")]
pub async fn get_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserRes> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}

#[get("/{id}/teams")]
pub async fn list_user_teams(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<TeamSummary>> {
    let teams = db.list_user_teams(path.into_inner()).await?;
    Ok(ApiResponse::Ok(teams.into_iter().map(TeamSummary::from).collect()))
}
