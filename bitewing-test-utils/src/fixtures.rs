//! Data factories for inserting fixture rows into the test database.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::{constant::TEST_PASSWORD, error::TestError};

/// Argon2 hash of [`TEST_PASSWORD`], computed once per test binary.
pub fn test_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();

    HASH.get_or_init(|| {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .unwrap()
    })
}

pub async fn insert_practice(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::practice::Model, TestError> {
    let practice = entity::practice::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
        system_type: ActiveValue::Set("easy_dental".to_string()),
        api_credentials: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(practice.insert(db).await?)
}

pub async fn insert_patient(
    db: &DatabaseConnection,
    practice_id: Uuid,
    first_name: &str,
    last_name: &str,
) -> Result<entity::patient::Model, TestError> {
    let patient = entity::patient::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        practice_id: ActiveValue::Set(practice_id),
        external_id: ActiveValue::Set(None),
        first_name: ActiveValue::Set(first_name.to_string()),
        last_name: ActiveValue::Set(last_name.to_string()),
        email: ActiveValue::Set(None),
        phone: ActiveValue::Set(None),
        insurance_info: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(patient.insert(db).await?)
}

pub async fn insert_claim(
    db: &DatabaseConnection,
    practice_id: Uuid,
    patient_id: Uuid,
    status: &str,
    received_amount: Option<f64>,
    submission_date: NaiveDate,
) -> Result<entity::claim::Model, TestError> {
    let claim = entity::claim::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        practice_id: ActiveValue::Set(practice_id),
        patient_id: ActiveValue::Set(patient_id),
        external_claim_id: ActiveValue::Set(None),
        insurer_name: ActiveValue::Set("Acme Dental Insurance".to_string()),
        treatment_code: ActiveValue::Set(None),
        treatment_description: ActiveValue::Set("Routine cleaning".to_string()),
        submitted_amount: ActiveValue::Set(100.0),
        expected_amount: ActiveValue::Set(None),
        received_amount: ActiveValue::Set(received_amount),
        status: ActiveValue::Set(status.to_string()),
        submission_date: ActiveValue::Set(submission_date),
        payment_date: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(claim.insert(db).await?)
}

pub async fn insert_alert(
    db: &DatabaseConnection,
    practice_id: Uuid,
    priority: &str,
    is_resolved: bool,
) -> Result<entity::alert::Model, TestError> {
    let now = Utc::now().naive_utc();
    let alert = entity::alert::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        practice_id: ActiveValue::Set(practice_id),
        related_claim_id: ActiveValue::Set(None),
        related_patient_id: ActiveValue::Set(None),
        alert_type: ActiveValue::Set("underpayment".to_string()),
        message: ActiveValue::Set("Claim paid below expected amount".to_string()),
        priority: ActiveValue::Set(priority.to_string()),
        is_resolved: ActiveValue::Set(is_resolved),
        details: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    Ok(alert.insert(db).await?)
}

pub async fn insert_automation_log(
    db: &DatabaseConnection,
    practice_id: Uuid,
    automation_type: &str,
    status: &str,
) -> Result<entity::automation_log::Model, TestError> {
    let log = entity::automation_log::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        practice_id: ActiveValue::Set(practice_id),
        automation_type: ActiveValue::Set(automation_type.to_string()),
        status: ActiveValue::Set(status.to_string()),
        details: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(log.insert(db).await?)
}

/// Inserts a user whose password is [`TEST_PASSWORD`].
pub async fn insert_user(
    db: &DatabaseConnection,
    practice_id: Uuid,
    email: &str,
    role: &str,
    is_active: bool,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        practice_id: ActiveValue::Set(practice_id),
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set(test_password_hash().to_string()),
        role: ActiveValue::Set(role.to_string()),
        first_name: ActiveValue::Set(Some("Test".to_string())),
        last_name: ActiveValue::Set(Some("User".to_string())),
        is_active: ActiveValue::Set(is_active),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(user.insert(db).await?)
}
