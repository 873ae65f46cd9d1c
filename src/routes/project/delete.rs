use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}")]
pub async fn delete_project(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    db.delete_project(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
