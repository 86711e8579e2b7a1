//! 세션 쿠키 디스크립터.
//!
//! 세션 토큰은 별도 호스팅되는 프론트엔드가 제시할 수 있도록
//! HTTP-only / Secure / SameSite=None 쿠키로 전송됩니다.
//! 로그아웃은 수명이 0인 쿠키를 재발급하여 클라이언트가 자격 증명을
//! 버리도록 안내할 뿐이며, 이미 발급된 토큰을 무효화하지는 않습니다.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// 세션 쿠키 이름.
pub const SESSION_COOKIE: &str = "token";

/// 세션 쿠키 수명 (1일).
const SESSION_MAX_AGE: Duration = Duration::days(1);

/// 로그인 성공 시 발급되는 세션 쿠키 생성.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(SESSION_MAX_AGE)
        .build()
}

/// 로그아웃용 만료 쿠키 생성.
///
/// Max-Age 0으로 클라이언트가 즉시 쿠키를 폐기합니다.
pub fn expired_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc.def.ghi".to_string());

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc.def.ghi");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::days(1)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_expired_cookie_drops_credential() {
        let cookie = expired_cookie();

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }
}
