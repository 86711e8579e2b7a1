//! Job API 라우트
//!
//! 공고 등록/검색/조회/삭제를 제공합니다. 모든 엔드포인트는 세션이
//! 필요합니다.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/job/post` - 공고 등록
//! - `GET /api/v1/job/get?keyword=` - 공고 검색 (구직자 뷰)
//! - `GET /api/v1/job/get/:id` - 공고 상세 조회 (회사/지원서 포함)
//! - `GET /api/v1/job/getadminjobs` - 본인이 등록한 공고 목록 (관리자 뷰)
//! - `DELETE /api/v1/job/delete/:id` - 공고 삭제

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use hirehub_core::{Application, Company, ExperienceLevel, Job};

use crate::auth::SessionAuth;
use crate::error::{ApiError, ApiResult};
use crate::repository::{
    ApplicationRepository, CompanyRepository, JobRecord, JobRepository, NewJob,
};
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::{split_requirements, NumberOrText};

// ================================================================================================
// Request/Response Types
// ================================================================================================

/// 공고 등록 요청.
///
/// 9개 필드 전부 필수입니다. 숫자 필드는 JSON 숫자/문자열 모두
/// 허용하고, requirements는 쉼표 구분 문자열입니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub salary: Option<NumberOrText>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub experience: Option<ExperienceLevel>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub position: Option<NumberOrText>,
    #[serde(default)]
    pub company_id: Option<String>,
}

/// 회사가 포함된 공고 표현
#[derive(Debug, Serialize, ToSchema)]
pub struct JobView {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<Company>,
}

/// 회사와 지원서가 포함된 공고 상세 표현
#[derive(Debug, Serialize, ToSchema)]
pub struct JobDetailView {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<Company>,
    pub applications: Vec<Application>,
}

/// 공고 등록 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct PostJobResponse {
    pub message: String,
    pub job: Job,
    pub success: bool,
}

/// 공고 목록 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct JobListResponse {
    pub jobs: Vec<JobView>,
    pub success: bool,
}

/// 공고 상세 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct JobDetailResponse {
    pub job: JobDetailView,
    pub success: bool,
}

/// 검색 쿼리
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct JobSearchQuery {
    /// 제목/설명 검색 키워드 (빈 값은 전체 매칭)
    #[serde(default)]
    pub keyword: String,
}

// ================================================================================================
// Handlers
// ================================================================================================

/// POST /api/v1/job/post - 공고 등록
///
/// 회사 존재 확인과 공고 저장은 별개의 순차 연산입니다. 그 사이에
/// 회사가 삭제되면 dangling 참조가 남는 경합을 허용합니다.
#[utoipa::path(
    post,
    path = "/api/v1/job/post",
    tag = "job",
    request_body = PostJobRequest,
    responses(
        (status = 201, description = "공고 생성 완료", body = PostJobResponse),
        (status = 400, description = "필수 필드 누락", body = crate::error::FailureResponse),
        (status = 404, description = "참조한 회사 없음", body = crate::error::FailureResponse),
    )
)]
pub async fn post_job(
    State(state): State<Arc<AppState>>,
    SessionAuth(principal_id): SessionAuth,
    Json(request): Json<PostJobRequest>,
) -> ApiResult<(StatusCode, Json<PostJobResponse>)> {
    let (
        Some(title),
        Some(description),
        Some(requirements),
        Some(salary),
        Some(location),
        Some(job_type),
        Some(experience),
        Some(position),
        Some(company_id),
    ) = (
        request.title.filter(|v| !v.is_empty()),
        request.description.filter(|v| !v.is_empty()),
        request.requirements.filter(|v| !v.is_empty()),
        request.salary.filter(|v| !v.is_empty_text()),
        request.location.filter(|v| !v.is_empty()),
        request.job_type.filter(|v| !v.is_empty()),
        request
            .experience
            .filter(|e| !matches!(e, ExperienceLevel::Text(t) if t.is_empty())),
        request.position.filter(|v| !v.is_empty_text()),
        request.company_id.filter(|v| !v.is_empty()),
    )
    else {
        return Err(ApiError::missing("Something is missing."));
    };

    let salary = salary
        .as_decimal()
        .ok_or_else(|| ApiError::missing("Something is missing."))?;
    let position = position
        .as_i32()
        .ok_or_else(|| ApiError::missing("Something is missing."))?;
    let company_id = Uuid::parse_str(&company_id)
        .map_err(|_| ApiError::not_found("Company not found."))?;

    CompanyRepository::find_by_id(&state.db_pool, company_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found."))?;

    let input = NewJob {
        title,
        description,
        requirements: split_requirements(&requirements),
        experience_level: experience,
        salary,
        location,
        job_type,
        position,
        company_id,
        created_by: principal_id,
    };

    let record = JobRepository::create(&state.db_pool, input).await?;

    info!(job_id = %record.id, company_id = %company_id, "공고 등록");

    Ok((
        StatusCode::CREATED,
        Json(PostJobResponse {
            message: "New job created successfully.".to_string(),
            job: record.into_job(),
            success: true,
        }),
    ))
}

/// GET /api/v1/job/get - 공고 검색 (구직자 뷰)
///
/// 제목 또는 설명에 대한 대소문자 무시 부분 일치, 최신순.
/// 결과가 없으면 404를 반환합니다 (관측된 동작 유지).
async fn get_all_jobs(
    State(state): State<Arc<AppState>>,
    SessionAuth(_principal_id): SessionAuth,
    Query(query): Query<JobSearchQuery>,
) -> ApiResult<Json<JobListResponse>> {
    let records = JobRepository::search(&state.db_pool, &query.keyword).await?;

    if records.is_empty() {
        return Err(ApiError::not_found("Jobs not found."));
    }

    let jobs = populate_companies(&state, records).await?;

    Ok(Json(JobListResponse {
        jobs,
        success: true,
    }))
}

/// GET /api/v1/job/get/:id - 공고 상세 조회
async fn get_job_by_id(
    State(state): State<Arc<AppState>>,
    SessionAuth(_principal_id): SessionAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<JobDetailResponse>> {
    let record = JobRepository::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found."))?;

    let company = CompanyRepository::find_by_id(&state.db_pool, record.company_id).await?;
    let applications = ApplicationRepository::find_by_job(&state.db_pool, id).await?;

    Ok(Json(JobDetailResponse {
        job: JobDetailView {
            job: record.into_job(),
            company,
            applications,
        },
        success: true,
    }))
}

/// GET /api/v1/job/getadminjobs - 본인이 등록한 공고 목록 (관리자 뷰)
async fn get_admin_jobs(
    State(state): State<Arc<AppState>>,
    SessionAuth(principal_id): SessionAuth,
) -> ApiResult<Json<JobListResponse>> {
    let records = JobRepository::find_by_creator(&state.db_pool, principal_id).await?;

    if records.is_empty() {
        return Err(ApiError::not_found("No jobs found for this admin."));
    }

    let jobs = populate_companies(&state, records).await?;

    Ok(Json(JobListResponse {
        jobs,
        success: true,
    }))
}

/// DELETE /api/v1/job/delete/:id - 공고 삭제
///
/// id만으로 삭제하며 `created_by`와 principal을 비교하지 않습니다.
/// TODO: 소유권 비교 도입 여부 제품 결정 대기 (회사 삭제 경로는 비교함)
async fn delete_job(
    State(state): State<Arc<AppState>>,
    SessionAuth(_principal_id): SessionAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = JobRepository::delete(&state.db_pool, id).await?;

    if !deleted {
        return Err(ApiError::not_found("Job not found"));
    }

    info!(job_id = %id, "공고 삭제");

    Ok(Json(MessageResponse::new("Job deleted successfully")))
}

// ================================================================================================
// Helpers
// ================================================================================================

/// 공고 목록에 소유 회사를 일괄 population.
///
/// 회사 id를 모아 한 번의 `ANY($1)` 조회로 가져옵니다. dangling 참조는
/// `company: null`로 직렬화됩니다.
async fn populate_companies(
    state: &AppState,
    records: Vec<JobRecord>,
) -> Result<Vec<JobView>, ApiError> {
    let mut company_ids: Vec<Uuid> = records.iter().map(|r| r.company_id).collect();
    company_ids.sort_unstable();
    company_ids.dedup();

    let companies: HashMap<Uuid, Company> =
        CompanyRepository::find_by_ids(&state.db_pool, &company_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

    Ok(records
        .into_iter()
        .map(|record| {
            let company = companies.get(&record.company_id).cloned();
            JobView {
                job: record.into_job(),
                company,
            }
        })
        .collect())
}

/// Job 라우터 생성.
pub fn jobs_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/post", post(post_job))
        .route("/get", get(get_all_jobs))
        .route("/get/{id}", get(get_job_by_id))
        .route("/getadminjobs", get(get_admin_jobs))
        .route("/delete/{id}", delete(delete_job))
}
