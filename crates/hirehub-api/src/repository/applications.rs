//! Application Repository
//!
//! 지원서 조회를 담당합니다. 지원서는 공고 상세 population에만
//! 소비되며 자체 라우트는 없습니다.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::Application;

/// Application Repository
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// 공고에 접수된 지원서 목록 조회
    pub async fn find_by_job(
        pool: &PgPool,
        job_id: Uuid,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let applications = sqlx::query_as::<_, Application>(
            r#"
            SELECT * FROM applications
            WHERE job_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(job_id)
        .fetch_all(pool)
        .await?;

        Ok(applications)
    }
}
