//! # DTO Module
//!
//! API 계약을 정의하는 데이터 전송 객체들입니다.
//! 인바운드 쿼리 파라미터의 역직렬화/검증과
//! 아웃바운드 JSON 응답의 직렬화를 담당합니다.

pub mod auth;

pub use auth::*;
