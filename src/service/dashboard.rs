use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        alert::AlertRepository, automation_log::AutomationLogRepository, claim::ClaimRepository,
    },
    error::Error,
    model::dashboard::DashboardStats,
};

/// Builds the dashboard statistics payload from three concurrent fetches.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches claims, unresolved alerts, and automation logs in scope and
    /// reduces them in memory.
    ///
    /// The three fetches run concurrently without a shared snapshot; if any
    /// one fails the whole aggregation fails and no partial stats are
    /// returned.
    pub async fn stats(&self, practice_id: Option<Uuid>) -> Result<DashboardStats, Error> {
        let claim_repository = ClaimRepository::new(self.db);
        let alert_repository = AlertRepository::new(self.db);
        let automation_repository = AutomationLogRepository::new(self.db);

        let (claims, alerts, _automation_logs) = tokio::try_join!(
            claim_repository.all_in_scope(practice_id),
            alert_repository.unresolved_in_scope(practice_id),
            automation_repository.all_in_scope(practice_id),
        )
        .map_err(Error::Aggregation)?;

        let total_claims = claims.len();
        let total_revenue = claims
            .iter()
            .map(|claim| claim.received_amount.unwrap_or(0.0))
            .sum();
        let pending_claims = claims
            .iter()
            .filter(|claim| claim.status == "pending")
            .count();
        let active_alerts = alerts.len();

        // Most recent submissions first; ties keep fetch order.
        let mut recent_claims = claims;
        recent_claims.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        recent_claims.truncate(5);

        Ok(DashboardStats {
            total_claims,
            total_revenue,
            pending_claims,
            active_alerts,
            recent_claims,
        })
    }
}

#[cfg(test)]
mod tests {
    use bitewing_test_utils::prelude::*;
    use chrono::NaiveDate;

    use crate::service::dashboard::DashboardService;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Three claims with received amounts 100, 80, and none, one pending,
    /// and no unresolved alerts reduce to {3, 180.0, 1, 0}
    #[tokio::test]
    async fn test_stats_reduce() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let patient = fixtures::insert_patient(&test.db, practice.id, "Ada", "Lovelace").await?;

        let d = date(2025, 3, 1);
        fixtures::insert_claim(&test.db, practice.id, patient.id, "paid", Some(100.0), d).await?;
        fixtures::insert_claim(&test.db, practice.id, patient.id, "underpaid", Some(80.0), d)
            .await?;
        fixtures::insert_claim(&test.db, practice.id, patient.id, "pending", None, d).await?;
        fixtures::insert_alert(&test.db, practice.id, "high", true).await?;

        let stats = DashboardService::new(&test.db)
            .stats(Some(practice.id))
            .await
            .unwrap();

        assert_eq!(stats.total_claims, 3);
        assert_eq!(stats.total_revenue, 180.0);
        assert_eq!(stats.pending_claims, 1);
        assert_eq!(stats.active_alerts, 0);

        Ok(())
    }

    /// Expect recent claims ordered newest first and truncated to five
    #[tokio::test]
    async fn test_stats_recent_claims() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let patient = fixtures::insert_patient(&test.db, practice.id, "Ada", "Lovelace").await?;

        for day in 1..=7 {
            fixtures::insert_claim(
                &test.db,
                practice.id,
                patient.id,
                "pending",
                None,
                date(2025, 3, day),
            )
            .await?;
        }

        let stats = DashboardService::new(&test.db).stats(None).await.unwrap();

        assert_eq!(stats.recent_claims.len(), 5);
        assert_eq!(stats.recent_claims[0].submission_date, date(2025, 3, 7));
        assert_eq!(stats.recent_claims[4].submission_date, date(2025, 3, 3));

        Ok(())
    }

    /// Expect the tenant filter to keep other practices out of the stats
    #[tokio::test]
    async fn test_stats_tenant_isolation() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let first = fixtures::insert_practice(&test.db, "First").await?;
        let second = fixtures::insert_practice(&test.db, "Second").await?;
        let patient_a = fixtures::insert_patient(&test.db, first.id, "Ada", "Lovelace").await?;
        let patient_b = fixtures::insert_patient(&test.db, second.id, "Grace", "Hopper").await?;

        let d = date(2025, 3, 1);
        fixtures::insert_claim(&test.db, first.id, patient_a.id, "pending", Some(50.0), d).await?;
        fixtures::insert_claim(&test.db, second.id, patient_b.id, "paid", Some(500.0), d).await?;
        fixtures::insert_alert(&test.db, second.id, "high", false).await?;

        let stats = DashboardService::new(&test.db)
            .stats(Some(first.id))
            .await
            .unwrap();

        assert_eq!(stats.total_claims, 1);
        assert_eq!(stats.total_revenue, 50.0);
        assert_eq!(stats.active_alerts, 0);

        Ok(())
    }
}
