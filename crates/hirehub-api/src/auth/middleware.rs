//! Axum용 세션 인증 추출기.
//!
//! 요청당 한 번, 핸들러 진입 전에 세션 쿠키를 검증하여 principal을
//! 확정합니다. 검증 실패는 해당 요청에 대해 종료적(terminal)이며
//! 재시도하지 않습니다.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use super::jwt;
use super::session::SESSION_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;

/// 세션 인증 추출기.
///
/// 핸들러에서 인증된 principal의 사용자 id를 추출합니다.
/// 쿠키가 없으면 `MissingToken`(401), 서명/만료 검증에 실패하면
/// `InvalidToken`(401)으로 요청을 단락시킵니다.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     SessionAuth(principal_id): SessionAuth,
/// ) -> impl IntoResponse {
///     format!("Authenticated user: {}", principal_id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionAuth(pub Uuid);

impl<S> FromRequestParts<S> for SessionAuth
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 서명 비밀 키는 AppState가 명시적으로 보유 (환경 변수 직접 조회 없음)
        let state = Arc::<AppState>::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let token = token_from_jar(&jar)?;

        let principal_id = jwt::verify_token(token, &state.auth.jwt_secret)
            .map_err(|_| ApiError::InvalidToken)?;

        Ok(SessionAuth(principal_id))
    }
}

/// 쿠키 jar에서 세션 토큰 추출.
fn token_from_jar(jar: &CookieJar) -> Result<&str, ApiError> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .ok_or(ApiError::MissingToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn jar_with_cookie(value: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_token_from_jar() {
        let jar = jar_with_cookie("token=abc.def.ghi");
        assert_eq!(token_from_jar(&jar).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_cookie_is_missing_token() {
        let jar = CookieJar::new();
        let result = token_from_jar(&jar);
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_unrelated_cookie_is_missing_token() {
        let jar = jar_with_cookie("session=abc");
        let result = token_from_jar(&jar);
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }
}
