//! User API 라우트
//!
//! 계정 등록, 로그인/로그아웃, 프로필 수정을 제공합니다.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/user/register` - 계정 등록 (multipart, 선택적 프로필 사진)
//! - `POST /api/v1/user/login` - 로그인 (세션 쿠키 발급)
//! - `GET /api/v1/user/logout` - 로그아웃 (만료 쿠키 재발급)
//! - `POST /api/v1/user/profile/update` - 프로필 부분 수정 (세션 필요)

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use hirehub_core::{Role, User};

use crate::auth::{
    expired_cookie, hash_password, issue_token, session_cookie, verify_password, SessionAuth,
};
use crate::error::{map_unique_violation, ApiError, ApiResult};
use crate::repository::{NewUser, ProfileChanges, UserRepository};
use crate::routes::{upload_file, MessageResponse};
use crate::state::AppState;
use crate::utils::{parse_skills, FormData};

// ================================================================================================
// Request/Response Types
// ================================================================================================

/// 로그인 요청.
///
/// 필드 누락을 422가 아닌 400으로 돌려주기 위해 전부 Option으로 받고
/// 핸들러에서 검증합니다.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// 로그인 성공 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
    pub success: bool,
}

/// 프로필 수정 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub message: String,
    pub user: User,
    pub success: bool,
}

// ================================================================================================
// Handlers
// ================================================================================================

/// POST /api/v1/user/register - 계정 등록
///
/// multipart 폼: fullname, email, phoneNumber, password, role + 선택적
/// 프로필 사진(`file`). 세션은 발급하지 않습니다.
#[utoipa::path(
    post,
    path = "/api/v1/user/register",
    tag = "user",
    responses(
        (status = 201, description = "계정 생성 완료", body = MessageResponse),
        (status = 400, description = "필수 필드 누락 또는 이메일 중복", body = crate::error::FailureResponse),
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let form = FormData::collect(multipart).await?;

    let (Some(fullname), Some(email), Some(phone_number), Some(password), Some(role)) = (
        form.text("fullname"),
        form.text("email"),
        form.text("phoneNumber"),
        form.text("password"),
        form.text("role").and_then(Role::parse),
    ) else {
        return Err(ApiError::missing("All fields are required"));
    };

    // 사전 존재 확인은 check-then-act 경합이 있으며, 유니크 인덱스가 최종 방어선
    if UserRepository::find_by_email(&state.db_pool, email)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateIdentity);
    }

    let profile_photo = match &form.file {
        Some(file) => Some(upload_file(&state, file).await?),
        None => None,
    };

    let password_hash = hash_password(password)
        .map_err(|e| ApiError::internal(format!("비밀번호 해싱 실패: {e}")))?;

    let input = NewUser {
        fullname: fullname.to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        password_hash,
        role,
        profile_photo,
    };

    UserRepository::create(&state.db_pool, input)
        .await
        .map_err(map_unique_violation)?;

    info!(email = %email, role = %role, "계정 생성");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created")),
    ))
}

/// POST /api/v1/user/login - 로그인
///
/// 이메일 미존재와 비밀번호 불일치는 동일한 메시지로 응답하여 계정
/// 존재 여부를 노출하지 않습니다. 역할 불일치는 별도 메시지입니다.
#[utoipa::path(
    post,
    path = "/api/v1/user/login",
    tag = "user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공, 세션 쿠키 발급", body = LoginResponse),
        (status = 400, description = "자격 증명 불일치 또는 역할 불일치", body = crate::error::FailureResponse),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let (Some(email), Some(password), Some(role)) = (
        request.email.as_deref().filter(|v| !v.is_empty()),
        request.password.as_deref().filter(|v| !v.is_empty()),
        request.role.as_deref().filter(|v| !v.is_empty()),
    ) else {
        return Err(ApiError::missing("All fields are required"));
    };

    let record = UserRepository::find_by_email(&state.db_pool, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if verify_password(password, &record.password_hash).is_err() {
        return Err(ApiError::InvalidCredentials);
    }

    if record.role.as_str() != role.to_lowercase() {
        return Err(ApiError::RoleMismatch);
    }

    let token = issue_token(
        record.id,
        &state.auth.jwt_secret,
        state.auth.token_ttl_hours,
    )
    .map_err(|e| ApiError::internal(format!("토큰 발급 실패: {e}")))?;

    let user = record.into_user();
    info!(user_id = %user.id, "로그인 성공");

    let message = format!("Welcome back {}", user.fullname);
    Ok((
        jar.add(session_cookie(token)),
        Json(LoginResponse {
            message,
            user,
            success: true,
        }),
    ))
}

/// GET /api/v1/user/logout - 로그아웃
///
/// Max-Age 0 쿠키를 재발급합니다. 이미 발급된 토큰은 자연 만료까지
/// 유효합니다 (서버 측 거부 목록 없음).
async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(expired_cookie()),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

/// POST /api/v1/user/profile/update - 프로필 부분 수정
///
/// 제공된 필드만 변경합니다. skills는 JSON 인코딩 리스트 또는 쉼표
/// 구분 문자열을 허용하고, 파일은 이력서로 저장됩니다.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    SessionAuth(principal_id): SessionAuth,
    multipart: Multipart,
) -> ApiResult<Json<ProfileResponse>> {
    let form = FormData::collect(multipart).await?;

    let mut changes = ProfileChanges {
        fullname: form.text_owned("fullname"),
        email: form.text_owned("email"),
        phone_number: form.text_owned("phoneNumber"),
        bio: form.text_owned("bio"),
        skills: form.text("skills").map(parse_skills),
        ..ProfileChanges::default()
    };

    if let Some(file) = &form.file {
        changes.resume = Some(upload_file(&state, file).await?);
        changes.resume_original_name = file.filename.clone();
    }

    // 세션은 유효하지만 레코드가 삭제된 경우 - 원 시스템처럼 400으로 응답
    let record = UserRepository::update_profile(&state.db_pool, principal_id, changes)
        .await?
        .ok_or(ApiError::UnknownPrincipal)?;

    info!(user_id = %principal_id, "프로필 수정");

    Ok(Json(ProfileResponse {
        message: "Profile updated".to_string(),
        user: record.into_user(),
        success: true,
    }))
}

/// User 라우터 생성.
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/profile/update", post(update_profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_tolerates_missing_fields() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_none());
        assert!(request.password.is_none());
        assert!(request.role.is_none());
    }

    #[test]
    fn test_login_response_shape() {
        use chrono::Utc;
        use hirehub_core::Profile;
        use uuid::Uuid;

        let response = LoginResponse {
            message: "Welcome back Kim Coder".to_string(),
            user: User {
                id: Uuid::new_v4(),
                fullname: "Kim Coder".to_string(),
                email: "kim@example.com".to_string(),
                phone_number: "01012345678".to_string(),
                role: Role::Student,
                profile: Profile::default(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            success: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["phoneNumber"], "01012345678");
        assert!(json["user"].get("passwordHash").is_none());
    }
}
