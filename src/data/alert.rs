use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use crate::{
    data::timed,
    model::alert::{AlertRow, CreateAlertDto, UpdateAlertDto},
};

pub struct AlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertRepository<'a> {
    /// Creates a new instance of [`AlertRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Base select joining the related patient's name and the practice name.
    fn joined() -> Select<entity::alert::Entity> {
        entity::prelude::Alert::find()
            .column_as(entity::patient::Column::FirstName, "first_name")
            .column_as(entity::patient::Column::LastName, "last_name")
            .column_as(entity::practice::Column::Name, "practice_name")
            .join(JoinType::LeftJoin, entity::alert::Relation::Patient.def())
            .join(JoinType::LeftJoin, entity::alert::Relation::Practice.def())
    }

    /// Creates a new alert, unresolved by default
    pub async fn create(&self, dto: CreateAlertDto) -> Result<entity::alert::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let alert = entity::alert::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            practice_id: ActiveValue::Set(dto.practice_id),
            related_claim_id: ActiveValue::Set(dto.related_claim_id),
            related_patient_id: ActiveValue::Set(dto.related_patient_id),
            alert_type: ActiveValue::Set(dto.alert_type),
            message: ActiveValue::Set(dto.message),
            priority: ActiveValue::Set(dto.priority.as_str().to_string()),
            is_resolved: ActiveValue::Set(false),
            details: ActiveValue::Set(dto.details),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        timed("alert::create", alert.insert(self.db)).await
    }

    /// Lists alerts joined with patient and practice names, newest first
    pub async fn list(
        &self,
        practice_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<AlertRow>, DbErr> {
        let mut query = Self::joined()
            .order_by_desc(entity::alert::Column::CreatedAt)
            .limit(limit)
            .offset(offset);

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::alert::Column::PracticeId.eq(practice_id));
        }

        timed("alert::list", query.into_model::<AlertRow>().all(self.db)).await
    }

    /// Gets an alert by id, joined with patient and practice names
    pub async fn get(&self, id: Uuid) -> Result<Option<AlertRow>, DbErr> {
        timed(
            "alert::get",
            Self::joined()
                .filter(entity::alert::Column::Id.eq(id))
                .into_model::<AlertRow>()
                .one(self.db),
        )
        .await
    }

    /// Updates the provided fields of an alert, stamping `updated_at`
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateAlertDto,
    ) -> Result<Option<entity::alert::Model>, DbErr> {
        let Some(alert) = timed(
            "alert::get",
            entity::prelude::Alert::find_by_id(id).one(self.db),
        )
        .await?
        else {
            return Ok(None);
        };

        let mut active: entity::alert::ActiveModel = alert.into();
        if let Some(alert_type) = dto.alert_type {
            active.alert_type = ActiveValue::Set(alert_type);
        }
        if let Some(message) = dto.message {
            active.message = ActiveValue::Set(message);
        }
        if let Some(priority) = dto.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(is_resolved) = dto.is_resolved {
            active.is_resolved = ActiveValue::Set(is_resolved);
        }
        if let Some(details) = dto.details {
            active.details = ActiveValue::Set(Some(details));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = timed("alert::update", active.update(self.db)).await?;

        Ok(Some(updated))
    }

    /// Deletes an alert, returning the deleted row
    pub async fn delete(&self, id: Uuid) -> Result<Option<entity::alert::Model>, DbErr> {
        let Some(alert) = timed(
            "alert::get",
            entity::prelude::Alert::find_by_id(id).one(self.db),
        )
        .await?
        else {
            return Ok(None);
        };

        timed(
            "alert::delete",
            entity::prelude::Alert::delete_by_id(id).exec(self.db),
        )
        .await?;

        Ok(Some(alert))
    }

    /// Unresolved alerts for the dashboard count, optionally scoped
    pub async fn unresolved_in_scope(
        &self,
        practice_id: Option<Uuid>,
    ) -> Result<Vec<entity::alert::Model>, DbErr> {
        let mut query = entity::prelude::Alert::find()
            .filter(entity::alert::Column::IsResolved.eq(false));

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::alert::Column::PracticeId.eq(practice_id));
        }

        timed("alert::unresolved_in_scope", query.all(self.db)).await
    }
}
