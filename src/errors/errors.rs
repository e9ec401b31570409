//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Google 로그인 API를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 상태 코드 정책
//!
//! - 클라이언트 측 문제(잘못된 콜백 파라미터, 실패한/불완전한 인증)는 400
//! - 인프라 문제(Google API 통신 장애, 내부 오류)는 500
//! - 어떤 실패도 200으로 변환하지 않습니다
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn exchange(code: &str) -> Result<AuthenticationResult, AppError> {
//!     if code.is_empty() {
//!         return Err(AppError::AuthenticationError(
//!             "Google authentication failed.".to_string(),
//!         ));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// Google 로그인 플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (400 Bad Request)
    ///
    /// 프로바이더가 코드 교환을 거부했거나, 필수 클레임이 없는 경우입니다.
    /// 재시도하지 않는 클라이언트 측 실패입니다.
    #[error("{0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 5xx 에러의 상세 내용은 로그에만 남기고 클라이언트에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if status.is_server_error() {
            // 내부 오류 상세는 클라이언트에 누출하지 않음
            serde_json::json!({ "error": "Internal server error" })
        } else {
            serde_json::json!({ "error": self.to_string() })
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("code is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Google authentication failed.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("token endpoint unreachable".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_authentication_error_message_is_bare() {
        // 콜백 계약상 에러 메시지가 그대로 본문에 들어가야 함
        let error = AppError::AuthenticationError("Email not found".to_string());
        assert_eq!(error.to_string(), "Email not found");
    }
}
