//! API 라우트 설정 모듈
//!
//! Google 로그인 API 엔드포인트들을 그룹화하여 제공합니다.
//! 인증 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Available Routes
//!
//! ## OAuth (Google)
//! - `GET /api/auth/google-login` - Google 동의 화면으로 302 리다이렉트
//! - `GET /api/auth/google-response` - OAuth 콜백 처리, 이메일 클레임 반환
//!
//! ## 운영
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 두 라우트 모두 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
/// 경로는 기존 클라이언트와의 호환을 위해 그대로 유지해야 합니다.
///
/// # Examples
///
/// ```bash
/// # Google OAuth 시작 (브라우저에서)
/// curl -v http://localhost:8080/api/auth/google-login
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_response),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "google_signin_api",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "google_signin_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "google_signin_api");
    }
}
