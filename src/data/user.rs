use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::{
    data::timed,
    model::{auth::Role, user::UserRow},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active user with an already-hashed password
    pub async fn create(
        &self,
        practice_id: Uuid,
        email: String,
        password_hash: String,
        role: Role,
        first_name: String,
        last_name: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            practice_id: ActiveValue::Set(practice_id),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            first_name: ActiveValue::Set(Some(first_name)),
            last_name: ActiveValue::Set(Some(last_name)),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        timed("user::create", user.insert(self.db)).await
    }

    /// Lists users joined with the practice name, newest first
    ///
    /// The password hash is never part of the projection.
    pub async fn list(
        &self,
        practice_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<UserRow>, DbErr> {
        let mut query = entity::prelude::User::find()
            .select_only()
            .columns([
                entity::user::Column::Id,
                entity::user::Column::PracticeId,
                entity::user::Column::Email,
                entity::user::Column::Role,
                entity::user::Column::FirstName,
                entity::user::Column::LastName,
                entity::user::Column::IsActive,
                entity::user::Column::CreatedAt,
            ])
            .column_as(entity::practice::Column::Name, "practice_name")
            .join(JoinType::LeftJoin, entity::user::Relation::Practice.def())
            .order_by_desc(entity::user::Column::CreatedAt)
            .limit(limit)
            .offset(offset);

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::user::Column::PracticeId.eq(practice_id));
        }

        timed("user::list", query.into_model::<UserRow>().all(self.db)).await
    }

    /// Gets a user by id, including the password hash
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        timed(
            "user::get_by_id",
            entity::prelude::User::find_by_id(id).one(self.db),
        )
        .await
    }

    /// Gets a user by email, including the password hash
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        timed(
            "user::get_by_email",
            entity::prelude::User::find()
                .filter(entity::user::Column::Email.eq(email))
                .one(self.db),
        )
        .await
    }
}
