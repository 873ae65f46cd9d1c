use actix_web::{post, web};
use std::sync::Arc;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeam, TeamRes};
use crate::utils::validate::require;
use tracing::info;

/// New teams start without members.
#[post("")]
pub async fn create_team(
    db: web::Data<Arc<DbService>>,
    data: web::Json<RTeam>,
) -> ApiResult<TeamRes> {
    let data = data.into_inner();
    require("name", &data.name)?;

    let team = db.create_team(data.name, data.description).await?;
    info!("Team {} ({}) created", team.name, team.id);

    Ok(ApiResponse::Ok(TeamRes::new(team, Vec::new())))
}
