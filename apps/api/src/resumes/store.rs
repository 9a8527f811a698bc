use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::models::resume::{Analysis, Extraction, ResumeRecord, ResumeSummary};

#[derive(FromRow)]
struct ResumeRow {
    id: i64,
    file_name: String,
    extracted: Json<Extraction>,
    analysis: Json<Analysis>,
}

impl From<ResumeRow> for ResumeRecord {
    fn from(row: ResumeRow) -> Self {
        ResumeRecord {
            id: row.id,
            file_name: row.file_name,
            extracted: row.extracted.0,
            analysis: row.analysis.0,
        }
    }
}

/// Single-table store for uploaded résumés.
/// Rows are insert-only: nothing here updates or deletes.
#[derive(Clone)]
pub struct ResumeStore {
    pool: SqlitePool,
}

impl ResumeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `resumes` table if it does not exist yet.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resumes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                file_name TEXT NOT NULL,
                extracted TEXT NOT NULL,
                analysis TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Inserts one row and returns its id. `AUTOINCREMENT` keeps ids from ever being reused.
    pub async fn save(
        &self,
        file_name: &str,
        extracted: &Extraction,
        analysis: &Analysis,
    ) -> Result<i64, sqlx::Error> {
        let id = sqlx::query("INSERT INTO resumes (file_name, extracted, analysis) VALUES (?, ?, ?)")
            .bind(file_name)
            .bind(Json(extracted))
            .bind(Json(analysis))
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        info!("Stored resume {id} ({file_name})");
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<ResumeSummary>, sqlx::Error> {
        sqlx::query_as::<_, ResumeSummary>("SELECT id, file_name FROM resumes ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<ResumeRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, file_name, extracted, analysis FROM resumes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(ResumeRecord::from))
    }
}
