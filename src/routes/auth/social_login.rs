use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSocialLogin, UserRes, DEFAULT_ROLE};
use crate::utils::{password, validate::require};

/// Sign-in through an external identity provider. The provider already vouched
/// for the email, so an unknown email gets a fresh account with an unusable password.
#[post("/social-login")]
pub async fn social_login(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RSocialLogin>,
) -> ApiResult<UserRes> {
    let body = body.into_inner();
    require("email", &body.email)?;

    if let Some(existing) = db.find_user_by_email(&body.email).await? {
        return Ok(ApiResponse::Ok(existing.into()));
    }

    let password_hash = password::hash(&password::new_placeholder_secret())?;
    let user = db
        .create_user(DBUserCreate {
            name: body.name.unwrap_or_else(|| body.email.clone()),
            email: body.email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            phone: None,
            avatar: body.avatar,
        })
        .await?;

    info!("Created user {} from external identity", user.id);
    Ok(ApiResponse::Ok(user.into()))
}
