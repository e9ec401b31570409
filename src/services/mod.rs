//! # Services Module
//!
//! 비즈니스 로직 계층입니다. HTTP 핸들러와 외부 시스템(Google OAuth) 사이에서
//! 인증 플로우를 조율합니다.

pub mod auth;
