//! Company Repository
//!
//! 회사 관련 데이터베이스 연산을 담당합니다.
//! `user_id` 참조 컬럼은 FK 제약 없이 유지됩니다 - 부모 삭제 후
//! 남는 dangling 참조는 허용된 경합입니다.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::Company;

/// 회사 부분 업데이트 입력.
///
/// None인 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
}

/// Company Repository
pub struct CompanyRepository;

impl CompanyRepository {
    /// 회사 등록 (등록 principal이 소유자가 됨)
    pub async fn create(pool: &PgPool, name: &str, user_id: Uuid) -> Result<Company, sqlx::Error> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, user_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(company)
    }

    /// 전체 회사 목록 조회
    pub async fn get_all(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let companies =
            sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY created_at DESC")
                .fetch_all(pool)
                .await?;

        Ok(companies)
    }

    /// id로 회사 조회
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Company>, sqlx::Error> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(company)
    }

    /// 여러 id 일괄 조회 (공고 목록의 회사 population용)
    pub async fn find_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Company>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let companies =
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(pool)
                .await?;

        Ok(companies)
    }

    /// 회사 부분 업데이트 (제공된 필드만 변경)
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: CompanyChanges,
    ) -> Result<Option<Company>, sqlx::Error> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                website = COALESCE($4, website),
                location = COALESCE($5, location),
                logo = COALESCE($6, logo),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(&changes.website)
        .bind(&changes.location)
        .bind(&changes.logo)
        .fetch_optional(pool)
        .await?;

        Ok(company)
    }

    /// 회사 삭제
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
