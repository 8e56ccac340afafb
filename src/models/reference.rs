use sqlx::PgPool;

/// Reads over the seeded reference tables. These never change after startup,
/// so every accessor is a plain select.
pub struct Reference;

impl Reference {
    pub async fn expiration_months(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT value FROM expiration_months ORDER BY value")
            .fetch_all(pool)
            .await
    }

    pub async fn expiration_years(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT value FROM expiration_years ORDER BY value")
            .fetch_all(pool)
            .await
    }

    /// State names in seed (insertion) order, not alphabetized by the query.
    pub async fn state_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM states ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
