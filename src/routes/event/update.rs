use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::event::{EventRes, REvent};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validate::require;

/// Full overwrite; `createdBy` keeps its original value.
#[put("/{id}")]
pub async fn update_event(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    data: web::Json<REvent>,
) -> ApiResult<EventRes> {
    let id = path.into_inner();
    db.get_event(id).await?;

    let data = data.into_inner();
    require("title", &data.title)?;

    let event = db.update_event(id, data).await?;
    Ok(ApiResponse::Ok(event.into()))
}
