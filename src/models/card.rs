use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i32,
    pub user_id: i32,
    // Only ever holds the last 4 digits; the full number is discarded before
    // the insert.
    pub card_number: String,
    pub name_on_card: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

#[derive(Debug, Clone)]
pub struct CreateCardData {
    pub user_id: i32,
    pub card_number: String,
    pub name_on_card: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

/// The subset of card fields exposed when listing a user's cards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardSummary {
    pub id: i32,
    pub card_number: String,
    pub name_on_card: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

impl Card {
    pub async fn create(pool: &PgPool, data: CreateCardData) -> Result<Self, sqlx::Error> {
        let card = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO cards (user_id, card_number, name_on_card, address, city, state, zip_code, expiry_month, expiry_year, cvv)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(data.user_id)
        .bind(&data.card_number)
        .bind(&data.name_on_card)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.zip_code)
        .bind(&data.expiry_month)
        .bind(&data.expiry_year)
        .bind(&data.cvv)
        .fetch_one(pool)
        .await?;

        Ok(card)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<CardSummary>, sqlx::Error> {
        sqlx::query_as::<_, CardSummary>(
            r#"
            SELECT id, card_number, name_on_card, expiry_month, expiry_year
            FROM cards
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Deletes a card by id. Returns false when no row matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
