//! Google 로그인 예제 API
//!
//! Rust 기반의 "Sign in with Google" 데모 웹 API입니다.
//! OAuth 2.0 Authorization Code 플로우로 브라우저를 Google 인증으로
//! 챌린지하고, 콜백에서 코드를 교환해 이메일 클레임을 JSON으로 반환합니다.
//!
//! # Features
//!
//! - **로그인 시작**: Google 동의 화면으로의 302 챌린지 리다이렉트
//! - **콜백 처리**: 코드 교환, 클레임 추출, `{"Email": "..."}` 응답
//! - **교환 경계 분리**: 프로바이더 통신은 trait 뒤로 분리되어 테스트 가능
//! - **무상태**: 요청 간 공유 상태 없음, 어떤 데이터도 영속하지 않음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/* 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 상태 코드 계약
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증 URL 구성, 코드 교환 경계
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Google OAuth   │ ← 토큰/UserInfo 엔드포인트 (외부)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use google_signin_api::services::auth::GoogleAuthService;
//!
//! // 기동 시 한 번 생성해서 핸들러에 주입
//! let service = GoogleAuthService::from_env()?;
//!
//! // 브라우저를 Google 동의 화면으로 보냄
//! let url = service.authorize_url("https://yourdomain.com/api/auth/google-response")?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
