use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserRoleUpdate, RUserUpdate, UserRes};
use actix_web::{put, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Partial profile update: only name, avatar and phone, and only when present.
#[put("/{id}")]
pub async fn update_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let user_id = path.into_inner();
    info!("Updating profile of user {}", user_id);
    let user = db.update_user_profile(user_id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}

/// Unconditional overwrite; the role is stored as sent.
#[put("/{id}/role")]
pub async fn update_user_role(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserRoleUpdate>,
) -> ApiResult<UserRes> {
    let user = db.update_user_role(path.into_inner(), body.into_inner().role).await?;
    info!("User {} now has role {}", user.id, user.role);
    Ok(ApiResponse::Ok(user.into()))
}
