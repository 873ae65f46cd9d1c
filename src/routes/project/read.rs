use actix_web::{get, web};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::project::ProjectRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_projects(db: web::Data<Arc<DbService>>) -> ApiResult<Vec<ProjectRes>> {
    let projects = db.list_projects().await?;
    debug!("Returning {} projects", projects.len());
    Ok(ApiResponse::Ok(projects.into_iter().map(ProjectRes::from).collect()))
}

#[get("/{id}")]
pub async fn get_project(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<ProjectRes> {
    let project = db.get_project(path.into_inner()).await?;
    Ok(ApiResponse::Ok(project.into()))
}
