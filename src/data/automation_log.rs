use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::{
    data::timed,
    model::automation::{AutomationLogRow, CreateAutomationLogDto},
};

pub struct AutomationLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutomationLogRepository<'a> {
    /// Creates a new instance of [`AutomationLogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an automation run
    pub async fn create(
        &self,
        dto: CreateAutomationLogDto,
    ) -> Result<entity::automation_log::Model, DbErr> {
        let log = entity::automation_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            practice_id: ActiveValue::Set(dto.practice_id),
            automation_type: ActiveValue::Set(dto.automation_type),
            status: ActiveValue::Set(dto.status.as_str().to_string()),
            details: ActiveValue::Set(dto.details),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        timed("automation_log::create", log.insert(self.db)).await
    }

    /// Lists automation logs joined with the practice name, newest first
    pub async fn list(
        &self,
        practice_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<AutomationLogRow>, DbErr> {
        let mut query = entity::prelude::AutomationLog::find()
            .column_as(entity::practice::Column::Name, "practice_name")
            .join(
                JoinType::LeftJoin,
                entity::automation_log::Relation::Practice.def(),
            )
            .order_by_desc(entity::automation_log::Column::CreatedAt)
            .limit(limit)
            .offset(offset);

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::automation_log::Column::PracticeId.eq(practice_id));
        }

        timed(
            "automation_log::list",
            query.into_model::<AutomationLogRow>().all(self.db),
        )
        .await
    }

    /// All automation logs in scope, for the dashboard aggregation
    pub async fn all_in_scope(
        &self,
        practice_id: Option<Uuid>,
    ) -> Result<Vec<entity::automation_log::Model>, DbErr> {
        let mut query = entity::prelude::AutomationLog::find();

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::automation_log::Column::PracticeId.eq(practice_id));
        }

        timed("automation_log::all_in_scope", query.all(self.db)).await
    }
}
