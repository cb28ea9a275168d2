use super::IPreferenceRepo;
use arbor_alert_domain::{LeadDays, ID};
use sqlx::PgPool;

pub struct PostgresPreferenceRepo {
    pool: PgPool,
}

impl PostgresPreferenceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IPreferenceRepo for PostgresPreferenceRepo {
    async fn get_lead_days(&self, user_id: &ID) -> anyhow::Result<LeadDays> {
        let lead_days: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT p.lead_days FROM user_preferences AS p
            WHERE p.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match lead_days {
            Some((days,)) => Ok(LeadDays::new(u32::try_from(days)?)),
            None => Ok(LeadDays::default()),
        }
    }

    async fn set_lead_days(&self, user_id: &ID, lead_days: LeadDays) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_preferences(user_id, lead_days)
            VALUES($1, $2)
            ON CONFLICT (user_id) DO UPDATE
            SET lead_days = EXCLUDED.lead_days
            "#,
        )
        .bind(user_id.as_str())
        .bind(i64::from(lead_days.days()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM user_preferences AS p
            WHERE p.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
