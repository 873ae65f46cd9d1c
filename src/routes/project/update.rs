use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::project::{ProjectRes, RProject};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validate::require;

/// Full overwrite. Omitting `teamId` unlinks the team. A missing project is
/// reported before any field validation.
#[put("/{id}")]
pub async fn update_project(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    data: web::Json<RProject>,
) -> ApiResult<ProjectRes> {
    let id = path.into_inner();
    db.get_project(id).await?;

    let data = data.into_inner();
    require("name", &data.name)?;

    let project = db.update_project(id, data).await?;
    Ok(ApiResponse::Ok(project.into()))
}
