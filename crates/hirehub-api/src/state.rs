//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 모든 API 핸들러에서 공유되는 상태를 관리합니다.
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.

use std::sync::Arc;

use hirehub_core::AuthConfig;

use crate::object_store::ObjectStore;

/// 애플리케이션 공유 상태.
///
/// 이 구조체는 모든 API 핸들러에서 접근할 수 있는 공유 리소스를 포함합니다.
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 풀 (PostgreSQL)
    pub db_pool: sqlx::PgPool,

    /// 인증 설정 (JWT 서명 비밀 키, 토큰 수명)
    pub auth: AuthConfig,

    /// 외부 오브젝트 스토어 (이력서/로고/프로필 사진 업로드)
    ///
    /// 미설정이면 파일 필드가 포함된 요청에서 업로드가 실패합니다.
    pub object_store: Option<Arc<dyn ObjectStore>>,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(db_pool: sqlx::PgPool, auth: AuthConfig) -> Self {
        Self {
            db_pool,
            auth,
            object_store: None,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 오브젝트 스토어 설정.
    pub fn with_object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    /// 오브젝트 스토어 설정 여부 확인.
    pub fn has_object_store(&self) -> bool {
        self.object_store.is_some()
    }

    /// 서버 업타임(초) 반환.
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }

    /// 데이터베이스 연결 상태 확인.
    pub async fn is_db_healthy(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.db_pool).await.is_ok()
    }
}
