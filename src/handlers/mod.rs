//! # HTTP Handlers Module
//!
//! 요청/응답 처리를 담당하는 핸들러 계층입니다.
//! 비즈니스 로직은 서비스 계층에 위임하고, 여기서는 HTTP 계약만 다룹니다.

pub mod auth;
