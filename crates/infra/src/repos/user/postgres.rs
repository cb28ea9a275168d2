use super::IUserRepo;
use arbor_alert_domain::{User, ID};
use sqlx::{FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_id: String,
    username: String,
    encrypted_password: String,
}

impl TryFrom<UserRaw> for User {
    type Error = anyhow::Error;

    fn try_from(raw: UserRaw) -> Result<Self, Self::Error> {
        Ok(User {
            id: raw.user_id.parse()?,
            username: raw.username,
            encrypted_password: raw.encrypted_password,
        })
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_id, username, encrypted_password)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.username)
        .bind(&user.encrypted_password)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE users
            SET username = $2,
            encrypted_password = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.username)
        .bind(&user.encrypted_password)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            anyhow::bail!("No user with id: {} to save", user.id);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, UserRaw>(
            r#"
            DELETE FROM users AS u
            WHERE u.user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        user.map(User::try_from).transpose()
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        user.map(User::try_from).transpose()
    }

    async fn find_all_ids(&self) -> anyhow::Result<Vec<ID>> {
        let ids: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT u.user_id FROM users AS u
            ORDER BY u.user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        ids.into_iter()
            .map(|(id,)| id.parse::<ID>().map_err(anyhow::Error::from))
            .collect()
    }
}
