use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

#[delete("/{id}")]
pub async fn delete_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    db.delete_user(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
