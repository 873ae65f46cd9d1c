use sea_orm::ConnectOptions;
use std::sync::Arc;
use taskhub::db::service::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh in-memory SQLite database with all migrations applied.
    pub async fn new() -> TestContext {
        // One pooled connection: every new in-memory connection is a separate database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DbService::connect(options)
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};
    use uuid::Uuid;

    pub fn signup(email: &str, password: &str) -> Value {
        json!({ "name": "Test User", "email": email, "password": password })
    }

    pub fn project(name: &str, team_id: Option<Uuid>) -> Value {
        json!({
            "name": name,
            "description": "Project description",
            "status": "Em Andamento",
            "dueDate": "2025-12-31",
            "ownerId": Uuid::new_v4(),
            "teamId": team_id,
        })
    }

    pub fn event(title: &str, project_id: Option<Uuid>, created_by: Option<Uuid>) -> Value {
        json!({
            "title": title,
            "startTime": "2025-06-01T09:00:00",
            "endTime": "2025-06-01T10:30:00",
            "allDay": false,
            "category": "Reunião",
            "description": "Weekly sync",
            "status": "pending",
            "projectId": project_id,
            "createdBy": created_by,
        })
    }
}
