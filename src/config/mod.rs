//! # Configuration Module
//!
//! 환경 변수 기반의 애플리케이션 설정을 관리합니다.
//! OAuth 프로바이더 설정과 보안 관련 설정을 포함하며,
//! `dotenv`를 통해 프로파일별 `.env` 파일에서 로드됩니다.

pub mod auth_config;

pub use auth_config::*;
