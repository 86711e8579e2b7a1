//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 환경 변수에서 로드합니다.
//! 설정은 프로세스 시작 시 한 번 구성되어 생성자에 명시적으로 전달됩니다.
//! 깊은 호출 경로에서의 환경 변수 직접 조회는 허용하지 않습니다.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// 설정 로드 에러.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// DATABASE_URL 미설정 - 서버 기동 불가
    #[error("DATABASE_URL 환경 변수가 설정되지 않았습니다")]
    MissingDatabaseUrl,

    /// 잘못된 설정 값
    #[error("잘못된 설정 값: {0}")]
    InvalidValue(String),
}

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 데이터베이스 설정
    pub database: DatabaseConfig,
    /// 인증 설정
    pub auth: AuthConfig,
    /// 파일 업로드(외부 오브젝트 스토어) 설정
    pub upload: UploadConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// CORS 허용 오리진 목록
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정 로드.
    ///
    /// # Errors
    ///
    /// `DATABASE_URL`이 없으면 `ConfigError::MissingDatabaseUrl`을 반환합니다.
    /// 저장소 연결 없이는 서버를 시작할 수 없습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_env()?;

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            server: ServerConfig::from_env(),
            database,
            auth: AuthConfig::from_env(),
            upload: UploadConfig::from_env(),
            logging: LoggingConfig::from_env(),
            cors_allowed_origins,
        })
    }
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// 환경 변수에서 설정 로드.
    pub fn from_env() -> Self {
        let host = std::env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// 연결 문자열 (필수)
    pub url: String,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 타임아웃 (초)
    pub connection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// 환경 변수에서 설정 로드.
    ///
    /// # Errors
    /// `DATABASE_URL`이 없으면 에러를 반환합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            url,
            max_connections,
            connection_timeout_secs: 30,
        })
    }
}

/// 인증 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT 서명 비밀 키
    pub jwt_secret: String,
    /// 세션 토큰 수명 (시간)
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-key-change-in-production".to_string(),
            token_ttl_hours: 24,
        }
    }
}

impl AuthConfig {
    /// 환경 변수에서 설정 로드.
    ///
    /// `JWT_SECRET`이 없으면 개발용 기본 키를 사용하고 경고를 남깁니다.
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("JWT_SECRET 미설정 - 개발용 기본 키 사용 (프로덕션 금지)");
                Self::default().jwt_secret
            }
        };

        Self {
            jwt_secret,
            token_ttl_hours: 24,
        }
    }
}

/// 파일 업로드 설정.
///
/// 외부 오브젝트 스토어의 업로드 엔드포인트와 공개 URL 베이스입니다.
/// 미설정 시 파일 업로드가 포함된 요청은 저장 실패로 처리됩니다.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UploadConfig {
    /// 업로드 엔드포인트 (PUT 대상)
    pub endpoint: Option<String>,
    /// 업로드된 객체의 공개 URL 베이스 (기본값: endpoint)
    pub public_url: Option<String>,
}

impl UploadConfig {
    /// 환경 변수에서 설정 로드.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("UPLOAD_ENDPOINT").ok(),
            public_url: std::env::var("UPLOAD_PUBLIC_URL").ok(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨 필터 (예: "info", "hirehub_api=debug")
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 환경 변수에서 설정 로드.
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_auth_config_default_ttl() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_hours, 24);
    }

    #[test]
    fn test_upload_config_default_is_disabled() {
        let config = UploadConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.public_url.is_none());
    }
}
