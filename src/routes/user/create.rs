use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes, DEFAULT_ROLE};
use crate::utils::{password, validate::require};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

/// Administrative create. Unlike signup the role may be chosen, and a missing
/// password is replaced with a random secret.
#[post("")]
pub async fn create_user(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let body = body.into_inner();
    require("email", &body.email)?;

    let secret = match body.password {
        Some(p) if !p.is_empty() => p,
        _ => password::new_placeholder_secret(),
    };
    let password_hash = password::hash(&secret)?;

    let user = db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
            password_hash,
            role: body.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            phone: body.phone,
            avatar: body.avatar,
        })
        .await?;

    info!("Created user {} with role {}", user.id, user.role);
    Ok(ApiResponse::Ok(user.into()))
}
