use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::services::search::escape_like;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_id: String,
    pub password_hash: String,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_id: String,
    pub password_hash: String,
    pub username: String,
}

/// A search hit: display name plus the handle to book with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSearchResult {
    pub name: String,
    pub username: String,
}

impl User {
    pub async fn create(pool: &PgPool, data: CreateUserData) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (first_name, middle_name, last_name, phone_number, email_id, password_hash, username)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.last_name)
        .bind(&data.phone_number)
        .bind(&data.email_id)
        .bind(&data.password_hash)
        .bind(&data.username)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email_id: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email_id = $1")
            .bind(email_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE phone_number = $1")
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(pool)
            .await
    }

    /// Case-insensitive substring match against the username or the
    /// space-joined "first last" name. At most 10 hits.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<UserSearchResult>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(query));

        sqlx::query_as::<_, UserSearchResult>(
            r#"
            SELECT first_name || ' ' || last_name AS name, username
            FROM users
            WHERE username ILIKE $1 OR (first_name || ' ' || last_name) ILIKE $1
            ORDER BY id
            LIMIT 10
            "#,
        )
        .bind(&pattern)
        .fetch_all(pool)
        .await
    }
}
