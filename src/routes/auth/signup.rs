use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSignup, UserRes, DEFAULT_ROLE};
use crate::utils::{password, validate::require};

#[post("/signup")]
pub async fn signup(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RSignup>,
) -> ApiResult<UserRes> {
    let body = body.into_inner();
    require("email", &body.email)?;
    require("password", &body.password)?;

    let password_hash = password::hash(&body.password)?;
    let user = db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            phone: None,
            avatar: None,
        })
        .await?;

    info!("Registered user {}", user.id);
    Ok(ApiResponse::Ok(user.into()))
}
