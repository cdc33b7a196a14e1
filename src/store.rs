use std::{collections::HashSet, fmt, str::FromStr};

use serde::Serialize;
use sqlx::SqlitePool;

use crate::deck::ImageDeck;

/// A user's verdict on one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Like,
    Dislike,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Like => "like",
            Verdict::Dislike => "dislike",
        }
    }
}

impl FromStr for Verdict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Verdict::Like),
            "dislike" => Ok(Verdict::Dislike),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub photo_path: String,
}

/// One row of the match leaderboard, before response shaping.
#[derive(Debug)]
pub struct MatchRow {
    pub user_id: i64,
    pub name: String,
    pub photo_path: String,
    pub score: i64,
    pub their_rated_count: i64,
}

#[derive(Debug, Serialize)]
pub struct Progress {
    pub rated: i64,
    pub total: usize,
    pub remaining: i64,
    pub done: bool,
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT    NOT NULL UNIQUE,
            photo_path  TEXT    NOT NULL,
            created_at  DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS ratings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL REFERENCES users(id),
            image_name  TEXT    NOT NULL,
            rating      TEXT    NOT NULL CHECK(rating IN ('like', 'dislike')),
            created_at  DATETIME DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(user_id, image_name)
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    photo_path: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO users (name, photo_path) VALUES (?, ?)")
        .bind(name)
        .bind(photo_path)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn user_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>, sqlx::Error> {
    let row: Option<(i64, String, String)> =
        sqlx::query_as("SELECT id, name, photo_path FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(id, name, photo_path)| User {
        id,
        name,
        photo_path,
    }))
}

pub async fn rated_images(pool: &SqlitePool, user_id: i64) -> Result<HashSet<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT image_name FROM ratings WHERE user_id = ?")
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub async fn rated_count(pool: &SqlitePool, user_id: i64) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ratings WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Last write wins for a repeated (user, image) pair; the unique constraint
/// guarantees a single row either way.
pub async fn upsert_rating(
    pool: &SqlitePool,
    user_id: i64,
    image: &str,
    verdict: Verdict,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO ratings (user_id, image_name, rating) VALUES (?, ?, ?)
         ON CONFLICT(user_id, image_name)
         DO UPDATE SET rating = excluded.rating, created_at = CURRENT_TIMESTAMP",
    )
    .bind(user_id)
    .bind(image)
    .bind(verdict.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn clear_ratings(pool: &SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM ratings WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn next_unrated(
    pool: &SqlitePool,
    deck: &ImageDeck,
    user_id: i64,
) -> Result<Option<String>, sqlx::Error> {
    let rated = rated_images(pool, user_id).await?;
    Ok(deck.first_unrated(&rated).map(str::to_owned))
}

pub async fn progress(
    pool: &SqlitePool,
    deck: &ImageDeck,
    user_id: i64,
) -> Result<Progress, sqlx::Error> {
    let rated = rated_count(pool, user_id).await?;
    let total = deck.len();

    Ok(Progress {
        rated,
        total,
        remaining: total as i64 - rated,
        done: rated >= total as i64,
    })
}

/// Every other user with their agreement score: the join pairs the
/// requester's ratings with theirs on identical (image, rating), so COUNT
/// over the joined rows is exactly the number of shared verdicts. Users
/// with nothing in common still appear, with score 0.
pub async fn ranked_matches(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<MatchRow>, sqlx::Error> {
    let rows: Vec<(i64, String, String, i64, i64)> = sqlx::query_as(
        r#"
        SELECT
            u.id,
            u.name,
            u.photo_path,
            COUNT(r2.image_name) AS score,
            (SELECT COUNT(*) FROM ratings WHERE user_id = u.id) AS their_rated_count
        FROM users u
        LEFT JOIN ratings r1 ON r1.user_id = ?
        LEFT JOIN ratings r2
            ON  r2.user_id    = u.id
            AND r2.image_name = r1.image_name
            AND r2.rating     = r1.rating
        WHERE u.id != ?
        GROUP BY u.id, u.name, u.photo_path
        ORDER BY score DESC, u.name ASC
        "#,
    )
    .bind(user_id)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(user_id, name, photo_path, score, their_rated_count)| MatchRow {
                user_id,
                name,
                photo_path,
                score,
                their_rated_count,
            },
        )
        .collect())
}
