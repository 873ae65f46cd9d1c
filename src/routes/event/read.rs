use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::event::EventRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_events(db: web::Data<Arc<DbService>>) -> ApiResult<Vec<EventRes>> {
    let events = db.list_events().await?;
    Ok(ApiResponse::Ok(events.into_iter().map(EventRes::from).collect()))
}

#[get("/{id}")]
pub async fn get_event(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<EventRes> {
    let event = db.get_event(path.into_inner()).await?;
    Ok(ApiResponse::Ok(event.into()))
}
