use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use arbor_alert_domain::{NaiveDate, Reminder, ID};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    user_id: String,
    assignment_label: String,
    due_date: NaiveDate,
    reminder_date: NaiveDate,
    sent: bool,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> Result<Self, Self::Error> {
        Ok(Reminder {
            user_id: raw.user_id.parse()?,
            assignment_label: raw.assignment_label,
            due_date: raw.due_date,
            reminder_date: raw.reminder_date,
            sent: raw.sent,
        })
    }
}

fn into_reminders(raws: Vec<ReminderRaw>) -> anyhow::Result<Vec<Reminder>> {
    raws.into_iter().map(Reminder::try_from).collect()
}

async fn insert_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    reminder: &Reminder,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO reminders
        (user_id, assignment_label, due_date, reminder_date, sent)
        VALUES($1, $2, $3, $4, $5)
        "#,
    )
    .bind(reminder.user_id.as_str())
    .bind(&reminder.assignment_label)
    .bind(reminder.due_date)
    .bind(reminder.reminder_date)
    .bind(reminder.sent)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        insert_in_tx(&mut tx, reminder).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete_pending_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.user_id = $1 AND r.sent = FALSE
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }

    async fn replace_pending(&self, user_id: &ID, reminders: &[Reminder]) -> anyhow::Result<()> {
        // Dropping the transaction without commit rolls it back
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.user_id = $1 AND r.sent = FALSE
            "#,
        )
        .bind(user_id.as_str())
        .execute(&mut *tx)
        .await?;

        for reminder in reminders {
            insert_in_tx(&mut tx, reminder).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_pending_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT r.user_id, r.assignment_label, r.due_date, r.reminder_date, r.sent
            FROM reminders AS r
            WHERE r.user_id = $1 AND r.sent = FALSE
            ORDER BY r.due_date, r.reminder_id
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        into_reminders(reminders)
    }

    async fn find_due(&self, date: &NaiveDate) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT r.user_id, r.assignment_label, r.due_date, r.reminder_date, r.sent
            FROM reminders AS r
            WHERE r.reminder_date = $1 AND r.sent = FALSE
            ORDER BY r.reminder_id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        into_reminders(reminders)
    }

    async fn mark_sent(
        &self,
        user_id: &ID,
        assignment_label: &str,
        due_date: &NaiveDate,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET sent = TRUE
            WHERE user_id = $1 AND assignment_label = $2 AND due_date = $3
            "#,
        )
        .bind(user_id.as_str())
        .bind(assignment_label)
        .bind(due_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
