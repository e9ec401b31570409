//! # 인증 서비스 모듈
//!
//! Google OAuth 2.0 Authorization Code 플로우를 구현합니다.
//!
//! - [`code_exchanger`] - 위임된 코드 교환의 경계 인터페이스
//! - [`google_auth_service`] - 인증 URL 구성과 Google 구현체

pub mod code_exchanger;
pub mod google_auth_service;

pub use code_exchanger::*;
pub use google_auth_service::*;
