use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A billing alert raised for a practice.
///
/// The claim and patient references are optional; an alert about, say, a
/// batch import failure is not tied to any specific record.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub practice_id: Uuid,
    pub related_claim_id: Option<Uuid>,
    pub related_patient_id: Option<Uuid>,
    pub alert_type: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub priority: String,
    pub is_resolved: bool,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub details: Option<Json>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
        belongs_to = "super::claim::Entity",
        from = "Column::RelatedClaimId",
        to = "super::claim::Column::Id"
    )]
    Claim,
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::RelatedPatientId",
        to = "super::patient::Column::Id"
    )]
    Patient,
}

impl Related<super::practice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Practice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
