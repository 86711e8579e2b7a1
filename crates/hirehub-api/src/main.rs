//! 채용 플랫폼 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 계정/세션, 회사, 공고 엔드포인트와 헬스 체크를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use hirehub_api::object_store::HttpObjectStore;
use hirehub_api::openapi::swagger_ui_router;
use hirehub_api::routes::create_api_router;
use hirehub_api::state::AppState;
use hirehub_core::{init_logging, AppConfig};

/// CORS 레이어 구성.
///
/// 세션 쿠키를 쓰는 별도 호스팅 프론트엔드를 위해 credentialed CORS가
/// 필요합니다. credentialed 모드에서는 와일드카드 오리진이 허용되지
/// 않으므로, 허용 목록이 비어 있으면 요청 오리진을 반사합니다.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<_> = allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        warn!("유효한 CORS 오리진이 없어 요청 오리진을 반사합니다 (개발 모드)");
        AllowOrigin::mirror_request()
    } else {
        info!(count = origins.len(), "CORS 허용 오리진 구성");
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

/// 전체 라우터 조합.
fn create_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(create_api_router())
        // OpenAPI 문서 및 Swagger UI
        .merge(swagger_ui_router())
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 (30초) - 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // 설정 로드 (DATABASE_URL 없으면 즉시 종료)
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("설정 로드 실패: {}", e);
        e
    })?;

    // tracing 초기화
    init_logging(&config.logging);

    info!("Starting HireHub API server...");

    let addr = config.server.socket_addr().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            error = %e,
            "소켓 주소 설정이 유효하지 않습니다. API_HOST, API_PORT 환경변수를 확인하세요."
        );
        e
    })?;

    // DB 연결 (필수)
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connection_timeout_secs))
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            error!(error = %e, "데이터베이스 연결 실패");
            e
        })?;
    info!("Connected to PostgreSQL successfully");

    // 마이그레이션 적용
    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Database migrations applied");

    // AppState 빌드
    let mut state = AppState::new(pool, config.auth.clone());

    match HttpObjectStore::from_config(&config.upload) {
        Some(store) => {
            state = state.with_object_store(Arc::new(store));
            info!("Object store configured");
        }
        None => {
            warn!("UPLOAD_ENDPOINT not set, file uploads will fail");
        }
    }

    let app = create_router(Arc::new(state), &config.cors_allowed_origins);

    // 서버 시작
    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
