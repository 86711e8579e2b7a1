//! 인증 및 권한 부여.
//!
//! 자격 증명 검증(argon2), 세션 토큰 발급/검증(JWT), 쿠키 전송,
//! 요청 단위 인증 게이트를 제공합니다.
//!
//! # 구성 요소
//!
//! - [`Claims`]: JWT 세션 토큰 페이로드
//! - [`SessionAuth`]: Axum 핸들러용 세션 검증 추출기
//! - [`session_cookie`] / [`expired_cookie`]: 쿠키 디스크립터
//! - 비밀번호 해싱/검증 함수

mod jwt;
mod middleware;
mod password;
mod session;

pub use jwt::{issue_token, verify_token, Claims, JwtError};
pub use middleware::SessionAuth;
pub use password::{hash_password, verify_password, PasswordError};
pub use session::{expired_cookie, session_cookie, SESSION_COOKIE};
