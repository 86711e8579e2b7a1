//! 외부 오브젝트 스토어 클라이언트.
//!
//! 업로드된 파일(이력서, 로고, 프로필 사진)은 외부 스토어로 전송되고
//! 내구 참조 URL만 엔티티에 저장됩니다. 코어는 제공자의 재시도/백오프
//! 내부를 알지 못하며, 반환된 URL을 불투명하게 다룹니다.

use async_trait::async_trait;
use axum::body::Bytes;
use uuid::Uuid;

use hirehub_core::UploadConfig;

/// 오브젝트 스토어 에러.
#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    /// 업로드 엔드포인트 미설정 상태에서 업로드 요청
    #[error("오브젝트 스토어가 설정되지 않았습니다")]
    NotConfigured,

    /// 전송 실패
    #[error("업로드 전송 실패: {0}")]
    Transport(#[from] reqwest::Error),
}

/// 오브젝트 스토어 인터페이스.
///
/// `upload(bytes) -> 참조 URL` 이상의 계약은 없습니다.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 바이트를 업로드하고 내구 참조 URL을 반환.
    async fn upload(
        &self,
        bytes: Bytes,
        filename: Option<&str>,
    ) -> Result<String, ObjectStoreError>;
}

/// HTTP PUT 기반 오브젝트 스토어 클라이언트.
pub struct HttpObjectStore {
    client: reqwest::Client,
    endpoint: String,
    public_url: String,
}

impl HttpObjectStore {
    /// 새 클라이언트 생성.
    ///
    /// `public_url`이 없으면 업로드 엔드포인트를 공개 URL 베이스로 사용합니다.
    pub fn new(endpoint: String, public_url: Option<String>) -> Self {
        let public_url = public_url.unwrap_or_else(|| endpoint.clone());
        Self {
            client: reqwest::Client::new(),
            endpoint,
            public_url,
        }
    }

    /// 설정에서 클라이언트 생성. 엔드포인트 미설정이면 None.
    pub fn from_config(config: &UploadConfig) -> Option<Self> {
        config
            .endpoint
            .clone()
            .map(|endpoint| Self::new(endpoint, config.public_url.clone()))
    }

    /// 충돌 없는 객체 키 생성.
    ///
    /// 원본 파일명은 표시용으로만 유지하고, 키에는 정제된 형태를 덧붙입니다.
    fn object_key(filename: Option<&str>) -> String {
        let id = Uuid::new_v4();
        match filename {
            Some(name) if !name.is_empty() => {
                let sanitized: String = name
                    .chars()
                    .map(|c| {
                        if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                            c
                        } else {
                            '-'
                        }
                    })
                    .collect();
                format!("{}-{}", id, sanitized)
            }
            _ => id.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(
        &self,
        bytes: Bytes,
        filename: Option<&str>,
    ) -> Result<String, ObjectStoreError> {
        let key = Self::object_key(filename);
        let target = format!("{}/{}", self.endpoint.trim_end_matches('/'), key);

        tracing::debug!(key = %key, size = bytes.len(), "오브젝트 업로드");

        self.client
            .put(&target)
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        Ok(format!("{}/{}", self.public_url.trim_end_matches('/'), key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_sanitizes_filename() {
        let key = HttpObjectStore::object_key(Some("my resume (final).pdf"));
        assert!(key.ends_with("my-resume--final-.pdf"));
        assert!(!key.contains(' '));
    }

    #[test]
    fn test_object_key_without_filename() {
        let key = HttpObjectStore::object_key(None);
        assert!(Uuid::parse_str(&key).is_ok());
    }

    #[test]
    fn test_object_keys_are_unique() {
        let a = HttpObjectStore::object_key(Some("logo.png"));
        let b = HttpObjectStore::object_key(Some("logo.png"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        assert!(HttpObjectStore::from_config(&UploadConfig::default()).is_none());

        let config = UploadConfig {
            endpoint: Some("https://store.internal/upload".to_string()),
            public_url: Some("https://cdn.example.com".to_string()),
        };
        let store = HttpObjectStore::from_config(&config).unwrap();
        assert_eq!(store.public_url, "https://cdn.example.com");
    }
}
