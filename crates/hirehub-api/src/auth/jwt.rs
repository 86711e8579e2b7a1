//! JWT 세션 토큰 처리.
//!
//! 세션 자격 증명(토큰) 생성/검증 로직. 토큰은 사용자 id를 subject로
//! 내장하며 발급 시점으로부터 절대 만료(기본 1일)를 가집니다.
//! 서버 측 폐기 목록은 없습니다 - 로그아웃 후에도 기존 토큰은 자연
//! 만료까지 암호학적으로 유효합니다 (단순성을 택한 명시적 트레이드오프).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT 세션 토큰 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 ID
    pub sub: String,
    /// Issued At - 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새로운 Claims 생성.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 사용자 ID
    /// * `expires_in_hours` - 만료 시간 (시간)
    pub fn new(user_id: Uuid, expires_in_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expires_in_hours)).timestamp(),
        }
    }

    /// 토큰이 만료되었는지 확인.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT 토큰 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("유효하지 않은 토큰")]
    InvalidToken,
    #[error("subject가 사용자 ID 형식이 아닙니다")]
    InvalidSubject,
}

/// 세션 토큰 발급.
///
/// # Arguments
///
/// * `user_id` - 토큰 subject로 내장할 사용자 ID
/// * `secret` - 서명 비밀 키
/// * `expires_in_hours` - 만료 시간 (시간)
///
/// # Returns
///
/// 인코딩된 JWT 문자열
pub fn issue_token(
    user_id: Uuid,
    secret: &str,
    expires_in_hours: i64,
) -> Result<String, JwtError> {
    let claims = Claims::new(user_id, expires_in_hours);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(JwtError::from)
}

/// 세션 토큰 검증.
///
/// 서명과 만료를 검증하고 내장된 사용자 ID를 반환합니다.
/// 순수 계산이며 I/O가 없습니다.
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::InvalidToken,
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| JwtError::InvalidSubject)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    #[test]
    fn test_issue_and_verify_token() {
        let user_id = Uuid::new_v4();

        let token = issue_token(user_id, TEST_SECRET, 24).unwrap();
        assert!(!token.is_empty());

        // 발급된 토큰의 subject는 항상 발급 대상 사용자 id
        let subject = verify_token(&token, TEST_SECRET).unwrap();
        assert_eq!(subject, user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let user_id = Uuid::new_v4();
        // 음수 TTL로 이미 만료된 토큰 생성
        let token = issue_token(user_id, TEST_SECRET, -1).unwrap();

        let result = verify_token(&token, TEST_SECRET);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, TEST_SECRET, 24).unwrap();

        // 서명 부분 변조
        let mut tampered = token[..token.len() - 4].to_string();
        tampered.push_str("AAAA");

        let result = verify_token(&tampered, TEST_SECRET);
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(Uuid::new_v4(), TEST_SECRET, 24).unwrap();

        let result = verify_token(&token, "wrong-secret-key-for-testing-minimum-32ch");
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let result = verify_token("invalid.token.here", TEST_SECRET);
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_claims_expiry_window() {
        let claims = Claims::new(Uuid::new_v4(), 24);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }
}
