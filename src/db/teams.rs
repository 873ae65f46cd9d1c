use crate::db::service::DbService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::project::Entity as Project;
use entity::team::{ActiveModel as TeamActive, Entity as Team, Model as TeamModel};
use entity::team_member::{ActiveModel as MemberActive, Entity as TeamMember};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

impl DbService {
    pub async fn create_team(&self, name: String, description: Option<String>) -> Result<TeamModel, AppError> {
        let now = Utc::now();
        Ok(TeamActive {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
        }.insert(&self.database_connection).await?)
    }

    pub async fn get_team(&self, id: Uuid) -> Result<TeamModel, AppError> {
        Ok(Team::find_by_id(id).one(&self.database_connection).await?.ok_or(DbErr::RecordNotFound("Team not found".to_string()))?)
    }

    /// All teams with their members. Two queries regardless of team count.
    pub async fn list_teams_with_members(&self) -> Result<Vec<(TeamModel, Vec<UserModel>)>, AppError> {
        let teams = Team::find().order_by_asc(entity::team::Column::CreatedAt).all(&self.database_connection).await?;
        let rows = TeamMember::find()
            .find_also_related(User)
            .order_by_asc(entity::team_member::Column::CreatedAt)
            .all(&self.database_connection).await?;

        let mut by_team: HashMap<Uuid, Vec<UserModel>> = HashMap::new();
        for (membership, user) in rows {
            if let Some(user) = user {
                by_team.entry(membership.team_id).or_default().push(user);
            }
        }
        Ok(teams.into_iter().map(|t| {
            let members = by_team.remove(&t.id).unwrap_or_default();
            (t, members)
        }).collect())
    }

    /// Members of `team`, in the order they joined.
    pub async fn list_team_members(&self, team: &TeamModel) -> Result<Vec<UserModel>, AppError> {
        Ok(team.find_related(User)
            .order_by_asc(entity::team_member::Column::CreatedAt)
            .all(&self.database_connection).await?)
    }

    pub async fn is_team_member(&self, team_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        Ok(TeamMember::find_by_id((team_id, user_id)).one(&self.database_connection).await?.is_some())
    }

    /// Full overwrite of name and description. Membership is untouched.
    pub async fn update_team(&self, team_id: Uuid, name: String, description: Option<String>) -> Result<TeamModel, AppError> {
        let mut am: TeamActive = self.get_team(team_id).await?.into();
        am.name = Set(name);
        am.description = Set(description);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Drops memberships, unlinks projects, then deletes the team.
    pub async fn delete_team(&self, team_id: Uuid) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .exec(&txn).await?;
        Project::update_many()
            .col_expr(entity::project::Column::TeamId, Expr::value(Option::<Uuid>::None))
            .col_expr(entity::project::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::project::Column::TeamId.eq(team_id))
            .exec(&txn).await?;
        let res = Team::delete_by_id(team_id).exec(&txn).await?;
        if res.rows_affected == 0 { txn.rollback().await?; return Err(AppError::NotFound); }
        txn.commit().await?;
        Ok(())
    }

    /// NotFound for a missing team; BadRequest for an unknown email or an existing member.
    pub async fn add_team_member(&self, team_id: Uuid, email: &str) -> Result<(TeamModel, Vec<UserModel>), AppError> {
        let team = self.get_team(team_id).await?;
        let user = self.find_user_by_email(email).await?
            .ok_or_else(|| AppError::BadRequest("User not found".into()))?;
        // The composite key rejects a second membership, including one racing this insert.
        MemberActive {
            team_id: Set(team.id),
            user_id: Set(user.id),
            created_at: Set(Utc::now()),
        }.insert(&self.database_connection).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::BadRequest("User is already a member of this team".into())
            }
            _ => AppError::from(e),
        })?;

        let members = self.list_team_members(&team).await?;
        Ok((team, members))
    }

    /// NotFound for a missing team; BadRequest for an unknown email or a non-member.
    pub async fn remove_team_member(&self, team_id: Uuid, email: &str) -> Result<(TeamModel, Vec<UserModel>), AppError> {
        let team = self.get_team(team_id).await?;
        let user = self.find_user_by_email(email).await?
            .ok_or_else(|| AppError::BadRequest("User not found".into()))?;

        let res = TeamMember::delete_by_id((team.id, user.id)).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::BadRequest("User is not a member of this team".into()));
        }

        let members = self.list_team_members(&team).await?;
        Ok((team, members))
    }
}
