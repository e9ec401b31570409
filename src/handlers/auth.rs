//! Authentication HTTP Handlers
//!
//! Google OAuth 2.0 로그인 플로우의 두 엔드포인트를 처리하는 핸들러입니다.
//!
//! # Endpoints
//!
//! - **로그인 시작**: `GET /api/auth/google-login` - Google 동의 화면으로 302 리다이렉트
//! - **콜백 처리**: `GET /api/auth/google-response` - 코드 교환 후 이메일 클레임 반환
//!
//! # 상태 코드 계약
//!
//! | 상황 | 상태 |
//! |------|------|
//! | 교환 거부 / 사용자 동의 거부 / code 누락 | 400 |
//! | email 클레임 없음 | 400 |
//! | 교환 성공 + email 존재 | 200 |
//! | 통신 장애, 예기치 않은 오류 | 500 (로그 기록, 상세 비노출) |
//!
//! 어떤 실패도 200으로 변환되지 않습니다.
use actix_web::{get, web, HttpRequest, HttpResponse};
use actix_web::http::header;
use validator::Validate;

use crate::domain::{EmailResponse, OAuthCallbackQuery};
use crate::errors::errors::AppError;
use crate::services::auth::GoogleAuthService;

/// 콜백 교환이 거부되었을 때의 응답 메시지
const AUTH_FAILED_MESSAGE: &str = "Google authentication failed.";

/// Google OAuth 로그인 시작 핸들러
///
/// 콜백 URL을 구성하고 Google 인증 페이지로의 302 리다이렉트를 반환합니다.
/// 리다이렉트 구성에 실패하면 500을 반환합니다 (200으로 삼키지 않음).
///
/// # Endpoint
/// `GET /api/auth/google-login`
#[get("/google-login")]
pub async fn google_login(
    req: HttpRequest,
    service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let conn = req.connection_info();
    let callback_url = service.settings().callback_url(conn.scheme(), conn.host());

    let auth_url = service.authorize_url(&callback_url).map_err(|e| {
        log::error!("google-login: 인증 리다이렉트 구성 실패: {}", e);
        e
    })?;

    log::info!("Google 로그인 챌린지 시작 - redirect_uri: {}", callback_url);

    Ok(HttpResponse::Found()
        .append_header((header::LOCATION, auth_url))
        .finish())
}

/// Google OAuth 콜백 처리 핸들러
///
/// Google 인증 완료 후 리다이렉트되는 콜백을 처리합니다.
/// 코드 교환 → 결과 검증 → 이메일 클레임 추출 → JSON 응답의
/// 네 단계를 순차 수행합니다.
///
/// # Endpoint
/// `GET /api/auth/google-response?code={code}&state={state}`
#[get("/google-response")]
pub async fn google_response(
    req: HttpRequest,
    query: web::Query<OAuthCallbackQuery>,
    service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 프로바이더 측 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("google-response: Google OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(AUTH_FAILED_MESSAGE.to_string()));
    }

    // 유효성 검사
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // code 없는 콜백은 실패한 인증으로 처리
    let code = query
        .code
        .as_deref()
        .ok_or_else(|| AppError::AuthenticationError(AUTH_FAILED_MESSAGE.to_string()))?;

    service.verify_oauth_state(query.state.as_deref().unwrap_or_default())?;

    // 교환 시 인증 리다이렉트와 동일한 redirect_uri를 다시 전송해야 함
    let redirect_uri = {
        let conn = req.connection_info();
        service.settings().callback_url(conn.scheme(), conn.host())
    };

    // 위임된 코드 교환 (Google 토큰/UserInfo 엔드포인트)
    let result = service.exchange_code(code, &redirect_uri).await.map_err(|e| {
        log::error!("google-response: 코드 교환 중 예기치 않은 오류: {}", e);
        e
    })?;

    if !result.succeeded {
        log::warn!("google-response: Google이 코드 교환을 거부했습니다");
        return Err(AppError::AuthenticationError(AUTH_FAILED_MESSAGE.to_string()));
    }

    // 이메일 클레임은 보장되지 않음 - 부재는 명시적 400
    let email = result.email().ok_or_else(|| {
        log::warn!("google-response: 교환은 성공했지만 email 클레임이 없습니다");
        AppError::AuthenticationError("Email not found".to_string())
    })?;

    log::info!("Google 로그인 성공: {}", email);

    Ok(HttpResponse::Ok().json(EmailResponse {
        email: email.to_string(),
    }))
}
