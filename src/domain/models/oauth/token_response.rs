//! Google OAuth 토큰 교환 응답 모델
//!
//! Authorization Code를 Access Token으로 교환할 때 Google이 반환하는
//! 데이터를 역직렬화합니다.

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: i32,
    /// 리프레시 토큰 (선택사항, 이 플로우에서는 사용하지 않음)
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    pub scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_token_response() {
        let json = r#"{
            "access_token": "ya29.a0AfH6SMC",
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "openid email profile"
        }"#;

        let token: GoogleTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "ya29.a0AfH6SMC");
        assert_eq!(token.token_type, "Bearer");
        assert!(token.refresh_token.is_none());
    }
}
