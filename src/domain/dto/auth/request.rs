//! 인증 요청관련 DTO
//!
//! Google 콜백 리다이렉트의 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 Google은 `code` 없이 `error`만 담아
/// 리다이렉트하므로 모든 필드가 Option 입니다. 핸들러가 `error`를
/// 먼저 확인한 뒤 `code` 존재 여부를 검증합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    /// Google이 발급한 일회용 Authorization Code
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: Option<String>,

    /// CSRF 방지용 state 파라미터
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_valid() {
        let query = OAuthCallbackQuery {
            code: Some("4/0AbCdEf".to_string()),
            state: Some("xyz".to_string()),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_callback_query_rejects_empty_code() {
        let query = OAuthCallbackQuery {
            code: Some("".to_string()),
            state: Some("xyz".to_string()),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn test_callback_query_denied_redirect_passes_validation() {
        // 거부 리다이렉트는 code가 아예 없음 - 검증이 아니라 핸들러가 처리
        let query = OAuthCallbackQuery {
            code: None,
            state: Some("xyz".to_string()),
            error: Some("access_denied".to_string()),
            error_description: Some("The user denied the request".to_string()),
        };

        assert!(query.validate().is_ok());
        assert!(query.code.is_none());
    }
}
