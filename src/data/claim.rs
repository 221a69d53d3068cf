use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use crate::{
    data::timed,
    model::claim::{ClaimRow, ClaimStatus, CreateClaimDto, UpdateClaimDto},
};

pub struct ClaimRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimRepository<'a> {
    /// Creates a new instance of [`ClaimRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Base select joining the patient's name and the practice name onto
    /// each claim row.
    fn joined() -> Select<entity::claim::Entity> {
        entity::prelude::Claim::find()
            .column_as(entity::patient::Column::FirstName, "first_name")
            .column_as(entity::patient::Column::LastName, "last_name")
            .column_as(entity::practice::Column::Name, "practice_name")
            .join(JoinType::LeftJoin, entity::claim::Relation::Patient.def())
            .join(JoinType::LeftJoin, entity::claim::Relation::Practice.def())
    }

    /// Creates a new claim
    ///
    /// Status defaults to `pending` and the submission date to today when
    /// not provided.
    pub async fn create(&self, dto: CreateClaimDto) -> Result<entity::claim::Model, DbErr> {
        let claim = entity::claim::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            practice_id: ActiveValue::Set(dto.practice_id),
            patient_id: ActiveValue::Set(dto.patient_id),
            external_claim_id: ActiveValue::Set(dto.external_claim_id),
            insurer_name: ActiveValue::Set(dto.insurer_name),
            treatment_code: ActiveValue::Set(dto.treatment_code),
            treatment_description: ActiveValue::Set(dto.treatment_description),
            submitted_amount: ActiveValue::Set(dto.submitted_amount),
            expected_amount: ActiveValue::Set(dto.expected_amount),
            received_amount: ActiveValue::Set(dto.received_amount),
            status: ActiveValue::Set(
                dto.status.unwrap_or(ClaimStatus::Pending).as_str().to_string(),
            ),
            submission_date: ActiveValue::Set(
                dto.submission_date.unwrap_or_else(|| Utc::now().date_naive()),
            ),
            payment_date: ActiveValue::Set(dto.payment_date),
            notes: ActiveValue::Set(dto.notes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        timed("claim::create", claim.insert(self.db)).await
    }

    /// Lists claims joined with patient and practice names, newest
    /// submission first
    pub async fn list(
        &self,
        practice_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<ClaimRow>, DbErr> {
        let mut query = Self::joined()
            .order_by_desc(entity::claim::Column::SubmissionDate)
            .limit(limit)
            .offset(offset);

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::claim::Column::PracticeId.eq(practice_id));
        }

        timed("claim::list", query.into_model::<ClaimRow>().all(self.db)).await
    }

    /// Gets a claim by id, joined with patient and practice names
    pub async fn get(&self, id: Uuid) -> Result<Option<ClaimRow>, DbErr> {
        timed(
            "claim::get",
            Self::joined()
                .filter(entity::claim::Column::Id.eq(id))
                .into_model::<ClaimRow>()
                .one(self.db),
        )
        .await
    }

    /// Updates the provided fields of a claim
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateClaimDto,
    ) -> Result<Option<entity::claim::Model>, DbErr> {
        let Some(claim) = timed(
            "claim::get",
            entity::prelude::Claim::find_by_id(id).one(self.db),
        )
        .await?
        else {
            return Ok(None);
        };

        if dto.is_empty() {
            return Ok(Some(claim));
        }

        let mut active: entity::claim::ActiveModel = claim.into();
        if let Some(insurer_name) = dto.insurer_name {
            active.insurer_name = ActiveValue::Set(insurer_name);
        }
        if let Some(treatment_code) = dto.treatment_code {
            active.treatment_code = ActiveValue::Set(Some(treatment_code));
        }
        if let Some(treatment_description) = dto.treatment_description {
            active.treatment_description = ActiveValue::Set(treatment_description);
        }
        if let Some(submitted_amount) = dto.submitted_amount {
            active.submitted_amount = ActiveValue::Set(submitted_amount);
        }
        if let Some(expected_amount) = dto.expected_amount {
            active.expected_amount = ActiveValue::Set(Some(expected_amount));
        }
        if let Some(received_amount) = dto.received_amount {
            active.received_amount = ActiveValue::Set(Some(received_amount));
        }
        if let Some(status) = dto.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(payment_date) = dto.payment_date {
            active.payment_date = ActiveValue::Set(Some(payment_date));
        }
        if let Some(notes) = dto.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }

        let updated = timed("claim::update", active.update(self.db)).await?;

        Ok(Some(updated))
    }

    /// Deletes a claim, returning the deleted row
    pub async fn delete(&self, id: Uuid) -> Result<Option<entity::claim::Model>, DbErr> {
        let Some(claim) = timed(
            "claim::get",
            entity::prelude::Claim::find_by_id(id).one(self.db),
        )
        .await?
        else {
            return Ok(None);
        };

        timed(
            "claim::delete",
            entity::prelude::Claim::delete_by_id(id).exec(self.db),
        )
        .await?;

        Ok(Some(claim))
    }

    /// All claims for the dashboard reduce, optionally scoped to a practice
    pub async fn all_in_scope(
        &self,
        practice_id: Option<Uuid>,
    ) -> Result<Vec<entity::claim::Model>, DbErr> {
        let mut query = entity::prelude::Claim::find();

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::claim::Column::PracticeId.eq(practice_id));
        }

        timed("claim::all_in_scope", query.all(self.db)).await
    }
}
