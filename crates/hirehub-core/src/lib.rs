//! # HireHub Core
//!
//! 채용 플랫폼의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 및 역할 (관리자/구직자)
//! - 회사 및 채용 공고
//! - 지원서 참조
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use logging::*;
