use crate::db::service::DbService;
use crate::{
    types::{
        error::AppError,
        user::{DBUserCreate, RUserUpdate},
    },
    utils::password,
};
use chrono::Utc;
use entity::team::{Entity as Team, Model as TeamModel};
use entity::team_member::Entity as TeamMember;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

impl DbService {
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Fails with `AlreadyExists` when the email is taken.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();

        // The unique index still catches a racing signup; it maps to AlreadyExists too.
        Ok(UserActive {
            id: Set(password::new_id()),
            name: Set(payload.name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            role: Set(payload.role),
            phone: Set(payload.phone),
            avatar: Set(payload.avatar),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_user_profile(
        &self,
        user_id: Uuid,
        patch: RUserUpdate,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(avatar) = patch.avatar {
            am.avatar = Set(Some(avatar));
        }
        if let Some(phone) = patch.phone {
            am.phone = Set(Some(phone));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn update_user_role(&self, user_id: Uuid, role: String) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.role = Set(role);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Removes the user and their memberships.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        TeamMember::delete_many()
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        let res = User::delete_by_id(user_id).exec(&txn).await?;
        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }
        txn.commit().await?;
        Ok(())
    }

    /// Teams the user belongs to, in the order they joined.
    pub async fn list_user_teams(&self, user_id: Uuid) -> Result<Vec<TeamModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user
            .find_related(Team)
            .order_by_asc(entity::team_member::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }
}
