use actix_web::{web, App};
use std::sync::Arc;
use taskhub::{
    db::service::DbService,
    types::{error::AppError, user::{DBUserCreate, DEFAULT_ROLE}},
    utils::password,
};
use entity::{team::Model as TeamModel, user::Model as UserModel};
use uuid::Uuid;

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(taskhub::routes::configure_routes)
    }

    /// User with `TEST_PASSWORD` and the default role.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<UserModel, AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));

        self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            email,
            password_hash: password::hash(TEST_PASSWORD)?,
            role: DEFAULT_ROLE.to_string(),
            phone: None,
            avatar: None,
        }).await
    }

    #[allow(dead_code)]
    pub async fn create_test_team(&self, name: &str) -> TeamModel {
        self.db.create_team(name.to_string(), Some("Test team".to_string()))
            .await
            .expect("Failed to create team")
    }

    #[allow(dead_code)]
    pub async fn create_team_with_member(&self, member: &UserModel) -> TeamModel {
        let team = self.create_test_team("Test Team").await;
        self.db.add_team_member(team.id, &member.email)
            .await
            .expect("Failed to add member");
        team
    }
}
