//! 채용 플랫폼 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - 세션 쿠키 기반 JWT 인증
//! - 소유권 기반 권한 검사 (회사/공고)
//! - 외부 오브젝트 스토어 업로드 (이력서, 로고, 프로필 사진)
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 세션 발급/검증 및 비밀번호 해싱
//! - [`repository`]: 데이터베이스 접근 계층
//! - [`object_store`]: 외부 오브젝트 스토어 클라이언트
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod object_store;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;
pub mod utils;

pub use auth::{hash_password, verify_password, Claims, JwtError, SessionAuth};
pub use error::{ApiError, ApiResult, FailureResponse};
pub use object_store::{HttpObjectStore, ObjectStore, ObjectStoreError};
pub use routes::*;
pub use state::AppState;
