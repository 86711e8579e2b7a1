//! 통합 API 에러 타입.
//!
//! 모든 엔드포인트에서 일관된 실패 형식 `{message, success: false}`를
//! 제공합니다. 검증/조회 실패는 발생 지점에서 즉시 분류되어 반환되고,
//! 예기치 못한 저장 계층 실패는 서버 로그에만 상세를 남기고 호출자에게는
//! 일반 메시지만 노출합니다.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::object_store::ObjectStoreError;

/// 실패 응답 본문.
///
/// # 예시
///
/// ```json
/// { "message": "Job not found.", "success": false }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FailureResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 항상 false
    pub success: bool,
}

impl FailureResponse {
    /// 새 실패 응답 생성.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// API 에러 분류 체계.
///
/// 각 변형은 호출자에게 노출되는 HTTP 상태와 메시지를 결정합니다.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 필수 입력 누락 (400)
    #[error("{0}")]
    MissingField(String),

    /// 이메일 유일성 위반 (400)
    #[error("User already exists")]
    DuplicateIdentity,

    /// 이메일 없음과 비밀번호 불일치를 구분하지 않음 - 계정 존재 여부 노출 방지 (400)
    #[error("Incorrect email/password")]
    InvalidCredentials,

    /// 저장된 역할과 요청 역할 불일치 (400)
    #[error("Role mismatch")]
    RoleMismatch,

    /// 세션 principal이 저장소에 없음 - 조회 실패가 아닌 잘못된 요청으로 분류 (400)
    #[error("User not found")]
    UnknownPrincipal,

    /// 세션 쿠키 없음 (401)
    #[error("User not authenticated")]
    MissingToken,

    /// 서명 불일치 또는 만료된 토큰 (401)
    #[error("Invalid token")]
    InvalidToken,

    /// 소유자가 아닌 principal의 변이 시도 (403)
    #[error("You are not allowed to modify this resource")]
    NotOwner,

    /// 참조 대상 엔티티 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 예기치 못한 내부 실패 - 해싱, 토큰 인코딩 등 (500, 상세는 로그에만)
    #[error("internal failure: {0}")]
    Internal(String),

    /// 예기치 못한 데이터베이스 실패 (500, 상세는 로그에만)
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),

    /// 오브젝트 스토어 업로드 실패 (500, 상세는 로그에만)
    #[error("object store failure: {0}")]
    ObjectStore(#[from] ObjectStoreError),
}

impl ApiError {
    /// 필수 입력 누락 에러 생성.
    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingField(message.into())
    }

    /// 조회 실패 에러 생성.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 내부 실패 에러 생성.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// 응답 상태 코드 반환.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_)
            | ApiError::DuplicateIdentity
            | ApiError::InvalidCredentials
            | ApiError::RoleMismatch
            | ApiError::UnknownPrincipal => StatusCode::BAD_REQUEST,
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::NotOwner => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Database(_) | ApiError::ObjectStore(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            // 내부 진단 정보는 절대 호출자에게 노출하지 않음
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "내부 실패");
                "Server error".to_string()
            }
            ApiError::Database(e) => {
                tracing::error!(error = %e, "저장 계층 실패");
                "Server error".to_string()
            }
            ApiError::ObjectStore(e) => {
                tracing::error!(error = %e, "오브젝트 스토어 실패");
                "Server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(FailureResponse::new(message))).into_response()
    }
}

/// 유일성 위반을 `DuplicateIdentity`로 분류.
///
/// 이메일 유일 인덱스는 check-then-act 경합의 최종 방어선입니다.
pub fn map_unique_violation(e: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return ApiError::DuplicateIdentity;
        }
    }
    ApiError::Database(e)
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::missing("Something is missing.").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::DuplicateIdentity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::RoleMismatch.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UnknownPrincipal.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotOwner.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::not_found("Job not found.").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::internal("argon2 params").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// 세션은 유효하나 레코드가 삭제된 principal은 404가 아닌 400.
    #[tokio::test]
    async fn test_unknown_principal_is_bad_request() {
        let response = ApiError::UnknownPrincipal.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "User not found");
        assert_eq!(json["success"], false);
    }

    /// 해싱/토큰 인코딩 실패 상세는 호출자에게 노출되지 않음.
    #[tokio::test]
    async fn test_internal_failure_is_generic_to_caller() {
        let response = ApiError::internal("token encoding failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Server error");
        assert_eq!(json["success"], false);
    }

    #[test]
    fn test_failure_envelope() {
        let body = FailureResponse::new("Role mismatch");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Role mismatch");
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_storage_fault_is_generic_to_caller() {
        let response = ApiError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Server error");
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_auth_failure_body() {
        let response = ApiError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "User not authenticated");
        assert_eq!(json["success"], false);
    }
}
