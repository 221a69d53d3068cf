use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    data::timed,
    model::patient::{CreatePatientDto, UpdatePatientDto},
};

pub struct PatientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientRepository<'a> {
    /// Creates a new instance of [`PatientRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new patient
    pub async fn create(&self, dto: CreatePatientDto) -> Result<entity::patient::Model, DbErr> {
        let patient = entity::patient::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            practice_id: ActiveValue::Set(dto.practice_id),
            external_id: ActiveValue::Set(dto.external_id),
            first_name: ActiveValue::Set(dto.first_name),
            last_name: ActiveValue::Set(dto.last_name),
            email: ActiveValue::Set(dto.email),
            phone: ActiveValue::Set(dto.phone),
            insurance_info: ActiveValue::Set(dto.insurance_info),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        timed("patient::create", patient.insert(self.db)).await
    }

    /// Lists patients ordered by name, optionally scoped to a practice
    pub async fn list(
        &self,
        practice_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::patient::Model>, DbErr> {
        let mut query = entity::prelude::Patient::find()
            .order_by_asc(entity::patient::Column::LastName)
            .order_by_asc(entity::patient::Column::FirstName)
            .limit(limit)
            .offset(offset);

        if let Some(practice_id) = practice_id {
            query = query.filter(entity::patient::Column::PracticeId.eq(practice_id));
        }

        timed("patient::list", query.all(self.db)).await
    }

    /// Gets a patient by id
    pub async fn get(&self, id: Uuid) -> Result<Option<entity::patient::Model>, DbErr> {
        timed(
            "patient::get",
            entity::prelude::Patient::find_by_id(id).one(self.db),
        )
        .await
    }

    /// Updates the provided fields of a patient
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdatePatientDto,
    ) -> Result<Option<entity::patient::Model>, DbErr> {
        let Some(patient) = self.get(id).await? else {
            return Ok(None);
        };

        if dto.is_empty() {
            return Ok(Some(patient));
        }

        let mut active: entity::patient::ActiveModel = patient.into();
        if let Some(external_id) = dto.external_id {
            active.external_id = ActiveValue::Set(Some(external_id));
        }
        if let Some(first_name) = dto.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = dto.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = dto.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = dto.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(insurance_info) = dto.insurance_info {
            active.insurance_info = ActiveValue::Set(Some(insurance_info));
        }

        let updated = timed("patient::update", active.update(self.db)).await?;

        Ok(Some(updated))
    }

    /// Deletes a patient, returning the deleted row
    pub async fn delete(&self, id: Uuid) -> Result<Option<entity::patient::Model>, DbErr> {
        let Some(patient) = self.get(id).await? else {
            return Ok(None);
        };

        timed(
            "patient::delete",
            entity::prelude::Patient::delete_by_id(id).exec(self.db),
        )
        .await?;

        Ok(Some(patient))
    }
}

#[cfg(test)]
mod tests {
    use bitewing_test_utils::prelude::*;
    use uuid::Uuid;

    use crate::{
        data::patient::PatientRepository,
        model::patient::{CreatePatientDto, UpdatePatientDto},
    };

    fn create_dto(practice_id: Uuid, first: &str, last: &str) -> CreatePatientDto {
        CreatePatientDto {
            practice_id,
            external_id: None,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: None,
            phone: None,
            insurance_info: None,
        }
    }

    /// Expect success when creating a new patient
    #[tokio::test]
    async fn test_create_patient_success() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Practice, entity::prelude::Patient)?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let repository = PatientRepository::new(&test.db);

        let patient = repository
            .create(create_dto(practice.id, "Ada", "Lovelace"))
            .await?;

        assert_eq!(patient.first_name, "Ada");
        assert_eq!(patient.practice_id, practice.id);

        Ok(())
    }

    /// Expect list to scope to the requested practice only
    #[tokio::test]
    async fn test_list_patients_scoped() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Practice, entity::prelude::Patient)?;
        let first = fixtures::insert_practice(&test.db, "First").await?;
        let second = fixtures::insert_practice(&test.db, "Second").await?;
        let repository = PatientRepository::new(&test.db);

        repository
            .create(create_dto(first.id, "Ada", "Lovelace"))
            .await?;
        repository
            .create(create_dto(second.id, "Grace", "Hopper"))
            .await?;

        let patients = repository.list(Some(first.id), 50, 0).await?;

        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].first_name, "Ada");

        Ok(())
    }

    /// Expect list to order by last name then first name
    #[tokio::test]
    async fn test_list_patients_ordering() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Practice, entity::prelude::Patient)?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let repository = PatientRepository::new(&test.db);

        repository
            .create(create_dto(practice.id, "Grace", "Hopper"))
            .await?;
        repository
            .create(create_dto(practice.id, "Ada", "Lovelace"))
            .await?;
        repository
            .create(create_dto(practice.id, "Alan", "Hopper"))
            .await?;

        let patients = repository.list(None, 50, 0).await?;

        let names: Vec<_> = patients
            .iter()
            .map(|p| (p.last_name.as_str(), p.first_name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Hopper", "Alan"),
                ("Hopper", "Grace"),
                ("Lovelace", "Ada")
            ]
        );

        Ok(())
    }

    /// Expect update to leave unset fields untouched
    #[tokio::test]
    async fn test_update_patient_partial() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Practice, entity::prelude::Patient)?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let repository = PatientRepository::new(&test.db);

        let patient = repository
            .create(create_dto(practice.id, "Ada", "Lovelace"))
            .await?;

        let updated = repository
            .update(
                patient.id,
                UpdatePatientDto {
                    external_id: None,
                    first_name: None,
                    last_name: None,
                    email: Some("ada@example.com".to_string()),
                    phone: None,
                    insurance_info: None,
                },
            )
            .await?
            .unwrap();

        assert_eq!(updated.email.as_deref(), Some("ada@example.com"));
        assert_eq!(updated.first_name, "Ada");

        Ok(())
    }

    /// Expect delete of a missing patient to return None
    #[tokio::test]
    async fn test_delete_patient_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Practice, entity::prelude::Patient)?;
        let repository = PatientRepository::new(&test.db);

        let result = repository.delete(Uuid::new_v4()).await?;

        assert!(result.is_none());

        Ok(())
    }
}
