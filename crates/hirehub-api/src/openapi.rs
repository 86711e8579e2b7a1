//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 섹션에 추가

use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hirehub_core::{Application, Company, Job, Profile, Role, User};

use crate::error::FailureResponse;
use crate::routes::{
    CompanyListResponse, CompanyResponse, JobDetailResponse, JobListResponse, LoginRequest,
    LoginResponse, MessageResponse, PostJobRequest, PostJobResponse, ProfileResponse,
};
use crate::state::AppState;

/// HireHub API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HireHub API",
        version = "0.1.0",
        description = r#"
# HireHub 채용 플랫폼 REST API

관리자(채용 회사)와 구직자를 연결하는 채용 플랫폼 백엔드입니다.

## 인증

로그인 성공 시 HTTP-only 세션 쿠키(`token`)가 발급되며, 이후 요청은
이 쿠키로 인증됩니다. 쿠키는 1일 후 만료됩니다.

## 권한

- 회사 수정/삭제는 소유자만 가능
- 공고 관리자 뷰는 본인이 등록한 공고만 반환
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    paths(
        crate::routes::users::register,
        crate::routes::users::login,
        crate::routes::jobs::post_job,
    ),
    components(schemas(
        Role,
        Profile,
        User,
        Company,
        Job,
        Application,
        FailureResponse,
        MessageResponse,
        LoginRequest,
        LoginResponse,
        ProfileResponse,
        CompanyResponse,
        CompanyListResponse,
        PostJobRequest,
        PostJobResponse,
        JobListResponse,
        JobDetailResponse,
    )),
    tags(
        (name = "user", description = "계정 및 세션"),
        (name = "company", description = "회사 관리"),
        (name = "job", description = "채용 공고"),
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
pub fn swagger_ui_router() -> Router<Arc<AppState>> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_generates() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("HireHub API"));
        assert!(json.contains("/api/v1/user/login"));
    }
}
