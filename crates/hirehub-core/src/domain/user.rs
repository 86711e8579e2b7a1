//! 사용자 엔티티.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// 사용자 프로필 서브 레코드.
///
/// 모든 필드는 선택적이며 프로필 업데이트 시 부분 갱신됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Profile {
    /// 자기소개
    pub bio: Option<String>,
    /// 보유 스킬 목록
    pub skills: Vec<String>,
    /// 이력서 참조 URL (오브젝트 스토어)
    pub resume: Option<String>,
    /// 업로드 당시 이력서 원본 파일명
    pub resume_original_name: Option<String>,
    /// 프로필 사진 참조 URL
    pub profile_photo: Option<String>,
}

/// 사용자 신원 레코드 (공개 형태).
///
/// 비밀번호 해시는 저장소 계층 밖으로 노출되지 않으며
/// 이 타입에는 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct User {
    pub id: Uuid,
    pub fullname: String,
    /// 이메일 - 전체 사용자에 대해 유일 (저장 시 대소문자 구분)
    pub email: String,
    pub phone_number: String,
    /// 역할 - 가입 후 불변
    pub role: Role,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_default_is_empty() {
        let profile = Profile::default();
        assert!(profile.bio.is_none());
        assert!(profile.skills.is_empty());
        assert!(profile.resume.is_none());
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: Uuid::nil(),
            fullname: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            phone_number: "01012345678".to_string(),
            role: Role::Student,
            profile: Profile::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("phone_number").is_none());
        // 해시 필드 자체가 타입에 없음
        assert!(json.get("password").is_none());
    }
}
