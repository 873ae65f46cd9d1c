use crate::types::error::AppError;
use actix_web::web;

pub mod auth;
pub mod event;
pub mod health;
pub mod project;
pub mod team;
pub mod user;

/// Malformed bodies get the same error shape as domain failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// An unparsable id is a bad request, not a missing record.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.app_data(path_config());

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .service(auth::signup::signup)
                    .service(auth::signin::signin)
                    .service(auth::social_login::social_login)
            )
            .service(
                web::scope("/users")
                    .service(user::read::list_users)
                    .service(user::create::create_user)
                    .service(user::read::get_user)
                    .service(user::read::list_user_teams)
                    .service(user::update::update_user)
                    .service(user::update::update_user_role)
                    .service(user::delete::delete_user)
            )
            .service(
                web::scope("/teams")
                    .service(team::read::list_teams)
                    .service(team::create::create_team)
                    .service(team::read::get_team)
                    .service(team::update::update_team)
                    .service(team::delete::delete_team)
                    .service(team::members::list_members)
                    .service(team::members::add_member)
                    .service(team::members::remove_member)
            )
            .service(
                web::scope("/projects")
                    .service(project::read::list_projects)
                    .service(project::create::create_project)
                    .service(project::read::get_project)
                    .service(project::update::update_project)
                    .service(project::delete::delete_project)
            )
            .service(
                web::scope("/events")
                    .service(event::read::list_events)
                    .service(event::create::create_event)
                    .service(event::read::get_event)
                    .service(event::update::update_event)
                    .service(event::delete::delete_event)
            )
    );
}
