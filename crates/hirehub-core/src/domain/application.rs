//! 지원서 참조 엔티티.
//!
//! 지원서의 상세 스키마는 이 코어의 범위 밖입니다. 공고 상세 조회 시
//! Job → Application 일대다 연관을 표시하기 위한 최소 형태만 유지합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 지원서 레코드 (참조용 최소 형태).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    /// 지원한 사용자 id
    pub applicant_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
