use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use crate::models::{MenteeProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};

/// PostgreSQL-backed profile store
///
/// Owns the connection pool. Migrations run once when the client is
/// created, so every request sees a ready pool.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

fn mentee_from_row(row: &PgRow) -> Result<MenteeProfile, StoreError> {
    Ok(MenteeProfile {
        user_id: row.try_get("user_id")?,
        full_name: row.try_get("full_name")?,
        career_goals: row.try_get("career_goals")?,
        mentorship_goals: row.try_get("mentorship_goals")?,
        challenges: row.try_get("challenges")?,
        technical_background: row.try_get("technical_background")?,
        preferred_mentorship_areas: row.try_get("preferred_mentorship_areas")?,
    })
}

fn mentor_from_row(row: &PgRow) -> Result<MentorProfile, StoreError> {
    let user_id: String = row.try_get("user_id")?;
    let full_name: Option<String> = row.try_get("full_name")?;
    let full_name = full_name
        .ok_or_else(|| StoreError::MalformedRecord(format!("mentor {} has no full_name", user_id)))?;

    Ok(MentorProfile {
        user_id,
        full_name,
        email: row.try_get("email")?,
        profile_photo: row.try_get("profile_photo")?,
        current_role: row.try_get("role_title")?,
        company: row.try_get("company")?,
        mentoring_goals: row.try_get("mentoring_goals")?,
        technical_skills: row.try_get("technical_skills")?,
        areas_of_interest: row.try_get("areas_of_interest")?,
        personal_bio: row.try_get("personal_bio")?,
    })
}

#[async_trait]
impl ProfileStore for PostgresClient {
    async fn find_mentee(&self, user_id: &str) -> Result<Option<MenteeProfile>, StoreError> {
        let query = r#"
            SELECT user_id, full_name, career_goals, mentorship_goals, challenges,
                   technical_background, preferred_mentorship_areas
            FROM mentees
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(mentee_from_row).transpose()
    }

    async fn find_mentor(&self, user_id: &str) -> Result<Option<MentorProfile>, StoreError> {
        let query = r#"
            SELECT user_id, full_name, email, profile_photo, role_title, company,
                   mentoring_goals, technical_skills, areas_of_interest, personal_bio
            FROM mentors
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(mentor_from_row).transpose()
    }

    async fn list_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        let query = r#"
            SELECT user_id, full_name, email, profile_photo, role_title, company,
                   mentoring_goals, technical_skills, areas_of_interest, personal_bio
            FROM mentors
            ORDER BY created_at, user_id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mentors = rows
            .iter()
            .map(mentor_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} mentors", mentors.len());

        Ok(mentors)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
