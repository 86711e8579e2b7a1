//! User Repository
//!
//! 사용자 계정 관련 데이터베이스 연산을 담당합니다.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use hirehub_core::{Profile, Role, User};

// ================================================================================================
// Types
// ================================================================================================

/// 사용자 행 레코드.
///
/// 저장 계층 전용 타입입니다. `password_hash`를 포함하므로 응답으로
/// 직렬화하지 않고, [`UserRecord::into_user`]로 공개 표현으로 변환합니다.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: Role,
    #[sqlx(default)]
    pub bio: Option<String>,
    pub skills: Vec<String>,
    #[sqlx(default)]
    pub resume: Option<String>,
    #[sqlx(default)]
    pub resume_original_name: Option<String>,
    #[sqlx(default)]
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// 공개 사용자 표현으로 변환. 자격 증명은 여기서 탈락합니다.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            fullname: self.fullname,
            email: self.email,
            phone_number: self.phone_number,
            role: self.role,
            profile: Profile {
                bio: self.bio,
                skills: self.skills,
                resume: self.resume,
                resume_original_name: self.resume_original_name,
                profile_photo: self.profile_photo,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 신규 사용자 입력
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: Role,
    pub profile_photo: Option<String>,
}

/// 프로필 부분 업데이트 입력.
///
/// None인 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
}

// ================================================================================================
// Repository
// ================================================================================================

/// User Repository
pub struct UserRepository;

impl UserRepository {
    /// 이메일로 사용자 조회
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// id로 사용자 조회
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// 사용자 생성.
    ///
    /// `users.email`의 유니크 인덱스가 중복 등록 경합의 최종 방어선입니다.
    pub async fn create(pool: &PgPool, input: NewUser) -> Result<UserRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users
                (fullname, email, phone_number, password_hash, role, profile_photo, skills)
            VALUES ($1, $2, $3, $4, $5, $6, '{}')
            RETURNING *
            "#,
        )
        .bind(&input.fullname)
        .bind(&input.email)
        .bind(&input.phone_number)
        .bind(&input.password_hash)
        .bind(input.role)
        .bind(&input.profile_photo)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 프로필 부분 업데이트 (제공된 필드만 변경)
    pub async fn update_profile(
        pool: &PgPool,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET
                fullname = COALESCE($2, fullname),
                email = COALESCE($3, email),
                phone_number = COALESCE($4, phone_number),
                bio = COALESCE($5, bio),
                skills = COALESCE($6, skills),
                resume = COALESCE($7, resume),
                resume_original_name = COALESCE($8, resume_original_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.fullname)
        .bind(&changes.email)
        .bind(&changes.phone_number)
        .bind(&changes.bio)
        .bind(&changes.skills)
        .bind(&changes.resume)
        .bind(&changes.resume_original_name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            fullname: "Kim Coder".to_string(),
            email: "kim@example.com".to_string(),
            phone_number: "01012345678".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            role: Role::Student,
            bio: Some("백엔드 지망".to_string()),
            skills: vec!["rust".to_string(), "sql".to_string()],
            resume: None,
            resume_original_name: None,
            profile_photo: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_user_drops_credential() {
        let record = sample_record();
        let email = record.email.clone();

        let user = record.into_user();
        assert_eq!(user.email, email);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_into_user_keeps_profile_fields() {
        let user = sample_record().into_user();
        assert_eq!(user.profile.skills, vec!["rust", "sql"]);
        assert_eq!(user.profile.bio.as_deref(), Some("백엔드 지망"));
    }
}
