//! 회사 엔티티.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 회사 레코드.
///
/// `user_id`가 소유 엣지입니다. 수정/삭제는 소유자만 가능합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Company {
    pub id: Uuid,
    /// 회사명 (필수)
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    /// 로고 참조 URL (오브젝트 스토어)
    pub logo: Option<String>,
    /// 소유자 User id
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// 주어진 principal이 이 회사의 소유자인지 확인.
    pub fn is_owned_by(&self, principal_id: Uuid) -> bool {
        self.user_id == principal_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(owner: Uuid) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            description: None,
            website: None,
            location: None,
            logo: None,
            user_id: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_ownership_check() {
        let owner = Uuid::new_v4();
        let company = sample(owner);

        assert!(company.is_owned_by(owner));
        assert!(!company.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let company = sample(Uuid::nil());
        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
    }
}
