use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::service::DbService;
use crate::types::project::{ProjectRes, RProject};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validate::require;

/// A supplied `teamId` must name an existing team.
#[post("")]
pub async fn create_project(
    db: web::Data<Arc<DbService>>,
    data: web::Json<RProject>,
) -> ApiResult<ProjectRes> {
    let data = data.into_inner();
    require("name", &data.name)?;

    let (project, team) = db.create_project(data).await?;
    info!("Project {} saved", project.id);
    Ok(ApiResponse::Ok((project, team).into()))
}
