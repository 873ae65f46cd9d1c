use crate::db::service::DbService;
use crate::types::{error::AppError, project::RProject};
use chrono::Utc;
use entity::project::{ActiveModel as ProjectActive, Entity as Project, Model as ProjectModel};
use entity::team::{Entity as Team, Model as TeamModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

impl DbService {
    pub async fn list_projects(&self) -> Result<Vec<(ProjectModel, Option<TeamModel>)>, AppError> {
        Ok(Project::find()
            .find_also_related(Team)
            .order_by_asc(entity::project::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_project(&self, id: Uuid) -> Result<(ProjectModel, Option<TeamModel>), AppError> {
        Ok(Project::find_by_id(id)
            .find_also_related(Team)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Project not found".into()))?)
    }

    /// `None` clears the link; an id that resolves to nothing is a BadRequest.
    async fn resolve_project_team(&self, team_id: Option<Uuid>) -> Result<Option<TeamModel>, AppError> {
        let Some(team_id) = team_id else { return Ok(None) };
        match self.get_team(team_id).await {
            Ok(team) => Ok(Some(team)),
            Err(AppError::NotFound) => Err(AppError::BadRequest(format!("Team {team_id} does not exist"))),
            Err(e) => Err(e),
        }
    }

    pub async fn create_project(&self, data: RProject) -> Result<(ProjectModel, Option<TeamModel>), AppError> {
        let team = self.resolve_project_team(data.team_id).await?;
        let now = Utc::now();

        let project = ProjectActive {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            status: Set(data.status),
            due_date: Set(data.due_date),
            owner_id: Set(data.owner_id),
            team_id: Set(team.as_ref().map(|t| t.id)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok((project, team))
    }

    /// Full overwrite. The project is left untouched if the team does not resolve.
    pub async fn update_project(
        &self,
        id: Uuid,
        data: RProject,
    ) -> Result<(ProjectModel, Option<TeamModel>), AppError> {
        let (current, _) = self.get_project(id).await?;
        let team = self.resolve_project_team(data.team_id).await?;

        let mut am: ProjectActive = current.into();
        am.name = Set(data.name);
        am.description = Set(data.description);
        am.status = Set(data.status);
        am.due_date = Set(data.due_date);
        am.owner_id = Set(data.owner_id);
        am.team_id = Set(team.as_ref().map(|t| t.id));
        am.updated_at = Set(Utc::now());
        let project = am.update(&self.database_connection).await?;

        Ok((project, team))
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<(), AppError> {
        let res = Project::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
