//! Company API 라우트
//!
//! 회사 등록/조회/수정/삭제를 제공합니다. 모든 엔드포인트는 세션이
//! 필요하며, 수정과 삭제는 소유자(`user_id`)만 가능합니다.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/company/register` - 회사 등록
//! - `GET /api/v1/company/get` - 회사 목록 조회
//! - `GET /api/v1/company/get/:id` - 회사 상세 조회
//! - `PUT /api/v1/company/update/:id` - 회사 수정 (multipart, 선택적 로고)
//! - `DELETE /api/v1/company/delete/:id` - 회사 삭제

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use hirehub_core::Company;

use crate::auth::SessionAuth;
use crate::error::{ApiError, ApiResult};
use crate::repository::{CompanyChanges, CompanyRepository};
use crate::routes::{upload_file, MessageResponse};
use crate::state::AppState;
use crate::utils::FormData;

// ================================================================================================
// Request/Response Types
// ================================================================================================

/// 회사 등록 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyRequest {
    #[serde(default)]
    pub company_name: Option<String>,
}

/// 단일 회사 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub company: Company,
    pub success: bool,
}

/// 회사 목록 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
    pub success: bool,
}

// ================================================================================================
// Handlers
// ================================================================================================

/// POST /api/v1/company/register - 회사 등록
///
/// 등록한 principal이 소유자가 됩니다.
async fn register_company(
    State(state): State<Arc<AppState>>,
    SessionAuth(principal_id): SessionAuth,
    Json(request): Json<RegisterCompanyRequest>,
) -> ApiResult<(StatusCode, Json<CompanyResponse>)> {
    let Some(name) = request.company_name.as_deref().filter(|v| !v.is_empty()) else {
        return Err(ApiError::missing("Company name is required."));
    };

    let company = CompanyRepository::create(&state.db_pool, name, principal_id).await?;

    info!(company_id = %company.id, owner = %principal_id, "회사 등록");

    Ok((
        StatusCode::CREATED,
        Json(CompanyResponse {
            message: Some("Company registered successfully.".to_string()),
            company,
            success: true,
        }),
    ))
}

/// GET /api/v1/company/get - 회사 목록 조회
async fn get_companies(
    State(state): State<Arc<AppState>>,
    SessionAuth(_principal_id): SessionAuth,
) -> ApiResult<Json<CompanyListResponse>> {
    let companies = CompanyRepository::get_all(&state.db_pool).await?;

    Ok(Json(CompanyListResponse {
        companies,
        success: true,
    }))
}

/// GET /api/v1/company/get/:id - 회사 상세 조회
async fn get_company_by_id(
    State(state): State<Arc<AppState>>,
    SessionAuth(_principal_id): SessionAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CompanyResponse>> {
    let company = CompanyRepository::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found."))?;

    Ok(Json(CompanyResponse {
        message: None,
        company,
        success: true,
    }))
}

/// PUT /api/v1/company/update/:id - 회사 수정
///
/// 소유자만 가능. 제공된 필드만 변경되며, 새 로고 업로드는 기존 참조를
/// 대체합니다 (이전 오브젝트는 삭제하지 않음).
async fn update_company(
    State(state): State<Arc<AppState>>,
    SessionAuth(principal_id): SessionAuth,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> ApiResult<Json<CompanyResponse>> {
    let existing = CompanyRepository::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found."))?;

    if !existing.is_owned_by(principal_id) {
        return Err(ApiError::NotOwner);
    }

    let form = FormData::collect(multipart).await?;

    let mut changes = CompanyChanges {
        name: form.text_owned("name"),
        description: form.text_owned("description"),
        website: form.text_owned("website"),
        location: form.text_owned("location"),
        ..CompanyChanges::default()
    };

    if let Some(file) = &form.file {
        changes.logo = Some(upload_file(&state, file).await?);
    }

    let company = CompanyRepository::update(&state.db_pool, id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found."))?;

    info!(company_id = %id, "회사 정보 수정");

    Ok(Json(CompanyResponse {
        message: Some("Company information updated.".to_string()),
        company,
        success: true,
    }))
}

/// DELETE /api/v1/company/delete/:id - 회사 삭제
///
/// 소유자만 가능. 이 회사를 참조하는 공고는 남습니다 (dangling 참조
/// 허용).
async fn delete_company(
    State(state): State<Arc<AppState>>,
    SessionAuth(principal_id): SessionAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let existing = CompanyRepository::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found."))?;

    if !existing.is_owned_by(principal_id) {
        return Err(ApiError::NotOwner);
    }

    let deleted = CompanyRepository::delete(&state.db_pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Company not found."));
    }

    info!(company_id = %id, "회사 삭제");

    Ok(Json(MessageResponse::new("Company deleted.")))
}

/// Company 라우터 생성.
pub fn companies_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_company))
        .route("/get", get(get_companies))
        .route("/get/{id}", get(get_company_by_id))
        .route("/update/{id}", put(update_company))
        .route("/delete/{id}", delete(delete_company))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_field_name_is_camel_case() {
        let request: RegisterCompanyRequest =
            serde_json::from_str(r#"{"companyName": "HireHub"}"#).unwrap();
        assert_eq!(request.company_name.as_deref(), Some("HireHub"));
    }

    #[test]
    fn test_company_response_omits_null_message() {
        use chrono::Utc;

        let response = CompanyResponse {
            message: None,
            company: Company {
                id: Uuid::new_v4(),
                name: "HireHub".to_string(),
                description: None,
                website: None,
                location: None,
                logo: None,
                user_id: Uuid::new_v4(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            success: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message").is_none());
        assert!(json["company"].get("userId").is_some());
        assert!(json["company"].get("user_id").is_none());
        assert_eq!(json["success"], true);
    }
}
