//! Job Repository
//!
//! 채용 공고 관련 데이터베이스 연산을 담당합니다.
//! 검색은 title/description에 대한 대소문자 무시 정규식 매칭(`~*`)으로,
//! 빈 키워드는 전체를 매칭합니다.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use hirehub_core::{ExperienceLevel, Job};

// ================================================================================================
// Types
// ================================================================================================

/// 공고 행 레코드.
///
/// `experience_level`은 JSONB 컬럼이므로 저장 계층에서는 `Json` 래퍼로
/// 들고, [`JobRecord::into_job`]에서 도메인 타입으로 풀어냅니다.
#[derive(Debug, Clone, FromRow)]
pub struct JobRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub experience_level: Json<ExperienceLevel>,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    pub position: i32,
    pub company_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobRecord {
    /// 도메인 표현으로 변환.
    pub fn into_job(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            experience_level: self.experience_level.0,
            salary: self.salary,
            location: self.location,
            job_type: self.job_type,
            position: self.position,
            company_id: self.company_id,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 신규 공고 입력
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    pub position: i32,
    pub company_id: Uuid,
    pub created_by: Uuid,
}

// ================================================================================================
// Repository
// ================================================================================================

/// Job Repository
pub struct JobRepository;

impl JobRepository {
    /// 공고 생성
    pub async fn create(pool: &PgPool, input: NewJob) -> Result<JobRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, JobRecord>(
            r#"
            INSERT INTO jobs
                (title, description, requirements, experience_level, salary,
                 location, job_type, position, company_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(Json(&input.experience_level))
        .bind(input.salary)
        .bind(&input.location)
        .bind(&input.job_type)
        .bind(input.position)
        .bind(input.company_id)
        .bind(input.created_by)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 키워드 검색 (title 또는 description, 대소문자 무시).
    ///
    /// 빈 키워드는 빈 정규식이 되어 전체 공고를 매칭합니다.
    /// 최신 공고가 먼저 옵니다.
    pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<JobRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT * FROM jobs
            WHERE title ~* $1 OR description ~* $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(keyword)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// id로 공고 조회
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JobRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, JobRecord>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// 특정 사용자가 등록한 공고 목록 조회 (최신순)
    pub async fn find_by_creator(
        pool: &PgPool,
        created_by: Uuid,
    ) -> Result<Vec<JobRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT * FROM jobs
            WHERE created_by = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(created_by)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// 공고 삭제
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirehub_core::ExperienceBand;

    #[test]
    fn test_into_job_unwraps_experience_level() {
        let record = JobRecord {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            description: "Rust 서버 개발".to_string(),
            requirements: vec!["rust".to_string(), "postgres".to_string()],
            experience_level: Json(ExperienceLevel::Band(ExperienceBand::Senior)),
            salary: "72000000".parse().unwrap(),
            location: "Seoul".to_string(),
            job_type: "full-time".to_string(),
            position: 2,
            company_id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let job = record.into_job();
        assert_eq!(
            job.experience_level,
            ExperienceLevel::Band(ExperienceBand::Senior)
        );
        assert_eq!(job.requirements.len(), 2);
    }
}
