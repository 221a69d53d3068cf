use sea_orm::entity::prelude::*;
use serde::Serialize;

/// An insurance claim submitted on behalf of a patient.
///
/// Monetary amounts are stored as doubles; the upstream systems report them
/// as plain floats and the dashboard reduce treats missing amounts as zero.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub practice_id: Uuid,
    pub patient_id: Uuid,
    pub external_claim_id: Option<String>,
    pub insurer_name: String,
    pub treatment_code: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub treatment_description: String,
    #[sea_orm(column_type = "Double")]
    pub submitted_amount: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub expected_amount: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub received_amount: Option<f64>,
    pub status: String,
    pub submission_date: Date,
    pub payment_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::practice::Entity",
        from = "Column::PracticeId",
        to = "super::practice::Column::Id"
    )]
    Practice,
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to = "super::patient::Column::Id"
    )]
    Patient,
}

impl Related<super::practice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Practice.def()
    }
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
