//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/v1/user` - 계정 등록, 로그인/로그아웃, 프로필 수정
//! - `/api/v1/company` - 회사 관리 (소유자 기반 권한)
//! - `/api/v1/job` - 공고 등록/검색/조회/삭제

pub mod companies;
pub mod health;
pub mod jobs;
pub mod users;

pub use companies::{companies_router, CompanyListResponse, CompanyResponse};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use jobs::{
    jobs_router, JobDetailResponse, JobListResponse, JobSearchQuery, JobView, PostJobRequest,
    PostJobResponse,
};
pub use users::{users_router, LoginRequest, LoginResponse, ProfileResponse};

use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::object_store::ObjectStoreError;
use crate::state::AppState;
use crate::utils::UploadedFile;

/// 메시지만 담는 성공 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub success: bool,
}

impl MessageResponse {
    /// 새 성공 응답 생성.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}

/// 업로드 파일을 오브젝트 스토어로 전송하고 참조 URL을 반환.
///
/// 스토어 미설정 상태에서 파일이 도착하면 저장 계층 실패로 처리됩니다.
pub(crate) async fn upload_file(
    state: &AppState,
    file: &UploadedFile,
) -> Result<String, ApiError> {
    let store = state
        .object_store
        .as_ref()
        .ok_or(ApiError::ObjectStore(ObjectStoreError::NotConfigured))?;

    let url = store
        .upload(file.bytes.clone(), file.filename.as_deref())
        .await?;

    Ok(url)
}

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 루트 확인 및 헬스 체크 엔드포인트
        .route("/", axum::routing::get(health::root))
        .nest("/health", health_router())
        // API v1 엔드포인트
        .nest("/api/v1/user", users_router())
        .nest("/api/v1/company", companies_router())
        .nest("/api/v1/job", jobs_router())
}
