use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::service::DbService;
use crate::types::event::{EventRes, REvent};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validate::require;

#[post("")]
pub async fn create_event(
    db: web::Data<Arc<DbService>>,
    data: web::Json<REvent>,
) -> ApiResult<EventRes> {
    let data = data.into_inner();
    require("title", &data.title)?;

    let event = db.create_event(data).await?;
    info!("Event {} scheduled at {}", event.id, event.start_time);
    Ok(ApiResponse::Ok(event.into()))
}
