//! 채용 공고 엔티티.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 경력 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum ExperienceBand {
    Internship,
    Entry,
    Mid,
    Senior,
    Lead,
}

/// 요구 경력 수준.
///
/// 기존 데이터가 숫자(연차), 구간명, 자유 텍스트를 혼용하므로
/// 명시적 태그드 유니온으로 모델링합니다. untagged 역직렬화 순서:
/// 정수 연차 → 소수 연차 → 구간명 → 자유 텍스트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum ExperienceLevel {
    /// 요구 연차
    Years(i64),
    /// 소수 연차 (예: 2.5) - 숫자 스칼라는 무엇이든 수용
    FractionalYears(f64),
    /// 경력 구간 (entry, senior 등)
    Band(ExperienceBand),
    /// 자유 텍스트 (예: "5+ years in fintech")
    Text(String),
}

/// 채용 공고 레코드.
///
/// `company_id`는 소속 회사, `created_by`는 공고를 등록한 사용자입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// 요구 사항 목록 - 쉼표 구분 입력을 항상 리스트로 물질화
    pub requirements: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    /// 모집 인원
    pub position: i32,
    pub company_id: Uuid,
    /// 공고 등록자 User id
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
