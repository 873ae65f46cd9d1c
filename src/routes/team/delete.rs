use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}")]
pub async fn delete_team(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let team_id = path.into_inner();
    db.delete_team(team_id).await?;
    info!("Team {} deleted", team_id);
    Ok(ApiResponse::NoContent)
}
