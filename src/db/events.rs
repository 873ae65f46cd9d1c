use crate::db::service::DbService;
use crate::types::{error::AppError, event::REvent};
use chrono::Utc;
use entity::event::{ActiveModel as EventActive, Entity as Event, Model as EventModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

impl DbService {
    pub async fn list_events(&self) -> Result<Vec<EventModel>, AppError> {
        Ok(Event::find()
            .order_by_asc(entity::event::Column::StartTime)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<EventModel, AppError> {
        Ok(Event::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Event not found".into()))?)
    }

    /// `project_id` and `created_by` are stored as given.
    pub async fn create_event(&self, data: REvent) -> Result<EventModel, AppError> {
        let now = Utc::now();
        Ok(EventActive {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            all_day: Set(data.all_day),
            category: Set(data.category),
            description: Set(data.description),
            status: Set(data.status),
            project_id: Set(data.project_id),
            created_by: Set(data.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Full overwrite of everything except `created_by`.
    pub async fn update_event(&self, id: Uuid, data: REvent) -> Result<EventModel, AppError> {
        let mut am: EventActive = self.get_event(id).await?.into();
        am.title = Set(data.title);
        am.start_time = Set(data.start_time);
        am.end_time = Set(data.end_time);
        am.all_day = Set(data.all_day);
        am.category = Set(data.category);
        am.description = Set(data.description);
        am.status = Set(data.status);
        am.project_id = Set(data.project_id);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<(), AppError> {
        let res = Event::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
