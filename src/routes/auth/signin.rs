use actix_web::{post, web};
use std::sync::Arc;
use tracing::debug;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RSignin, UserRes};
use crate::utils::password;

/// No token is issued: the user record is the session artifact.
#[post("/signin")]
pub async fn signin(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RSignin>,
) -> ApiResult<UserRes> {
    let Some(user) = db.find_user_by_email(&body.email).await? else {
        debug!("Sign-in for unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !password::verify(&body.password, &user.password_hash)? {
        debug!("Sign-in with wrong password for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    Ok(ApiResponse::Ok(user.into()))
}
