use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::{
    data::timed,
    model::practice::{CreatePracticeDto, UpdatePracticeDto},
};

pub struct PracticeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PracticeRepository<'a> {
    /// Creates a new instance of [`PracticeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new practice
    pub async fn create(&self, dto: CreatePracticeDto) -> Result<entity::practice::Model, DbErr> {
        let practice = entity::practice::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(dto.name),
            system_type: ActiveValue::Set(dto.system_type.as_str().to_string()),
            api_credentials: ActiveValue::Set(dto.api_credentials),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        timed("practice::create", practice.insert(self.db)).await
    }

    /// Lists all practices, newest first
    pub async fn list(&self) -> Result<Vec<entity::practice::Model>, DbErr> {
        timed(
            "practice::list",
            entity::prelude::Practice::find()
                .order_by_desc(entity::practice::Column::CreatedAt)
                .all(self.db),
        )
        .await
    }

    /// Gets a practice by id
    pub async fn get(&self, id: Uuid) -> Result<Option<entity::practice::Model>, DbErr> {
        timed(
            "practice::get",
            entity::prelude::Practice::find_by_id(id).one(self.db),
        )
        .await
    }

    /// Updates the provided fields of a practice
    ///
    /// Returns `None` when the practice does not exist. An empty update
    /// returns the stored row unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdatePracticeDto,
    ) -> Result<Option<entity::practice::Model>, DbErr> {
        let Some(practice) = self.get(id).await? else {
            return Ok(None);
        };

        if dto.is_empty() {
            return Ok(Some(practice));
        }

        let mut active: entity::practice::ActiveModel = practice.into();
        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(system_type) = dto.system_type {
            active.system_type = ActiveValue::Set(system_type.as_str().to_string());
        }
        if let Some(api_credentials) = dto.api_credentials {
            active.api_credentials = ActiveValue::Set(Some(api_credentials));
        }

        let updated = timed("practice::update", active.update(self.db)).await?;

        Ok(Some(updated))
    }

    /// Deletes a practice, returning the deleted row
    ///
    /// Returns `None` when the practice does not exist.
    pub async fn delete(&self, id: Uuid) -> Result<Option<entity::practice::Model>, DbErr> {
        let Some(practice) = self.get(id).await? else {
            return Ok(None);
        };

        timed(
            "practice::delete",
            entity::prelude::Practice::delete_by_id(id).exec(self.db),
        )
        .await?;

        Ok(Some(practice))
    }
}
