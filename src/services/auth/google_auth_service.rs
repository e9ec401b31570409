//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 프로토콜을 통한 로그인 기능을 제공합니다.
//! RFC 6749 OAuth 2.0 표준과 Google의 OAuth 2.0 구현을 준수합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐                      ┌─────────────────┐                  ┌─────────────────┐
//! │  브라우저    │                      │   우리 서버      │                  │  Google OAuth   │
//! └─────────────┘                      └─────────────────┘                  └─────────────────┘
//!        │ 1. GET /api/auth/google-login        │                                   │
//!        ├─────────────────────────────────────►│                                   │
//!        │ 2. 302 Redirect (state 포함)          │                                   │
//!        │◄─────────────────────────────────────┤                                   │
//!        │ 3. 사용자 인증/동의                                                        │
//!        ├──────────────────────────────────────────────────────────────────────────►│
//!        │ 4. 콜백 리다이렉트 (code, state)                                            │
//!        │◄──────────────────────────────────────────────────────────────────────────┤
//!        │ 5. GET /api/auth/google-response     │                                   │
//!        ├─────────────────────────────────────►│ 6. code → access_token 교환        │
//!        │                                      ├──────────────────────────────────►│
//!        │                                      │ 7. access_token으로 UserInfo 조회  │
//!        │                                      ├──────────────────────────────────►│
//!        │ 8. 200 {"Email": "..."}              │                                   │
//!        │◄─────────────────────────────────────┤                                   │
//! ```
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/auth` | GET |
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |
//!
//! 교환 단계 자체는 [`CodeExchanger`] trait 뒤로 분리되어 있어
//! 프로바이더 통신 없이 핸들러를 테스트할 수 있습니다.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use sha2::{Digest, Sha256};

use super::code_exchanger::CodeExchanger;
use crate::config::GoogleOAuthSettings;
use crate::domain::{AuthenticationResult, GoogleTokenResponse, GoogleUserInfo};
use crate::errors::errors::{AppError, AppResult};

/// 인증 요청에 포함할 OAuth 스코프
const OAUTH_SCOPES: &str = "openid email profile";

/// Google OAuth 2.0 인증 서비스
///
/// 인증 리다이렉트 URL 구성, state 생성/검증, 그리고 위임된 코드 교환
/// 호출을 담당합니다. 기동 시 한 번 생성되어 `web::Data`로 두 핸들러에
/// 주입됩니다.
pub struct GoogleAuthService {
    settings: GoogleOAuthSettings,
    exchanger: Arc<dyn CodeExchanger>,
}

impl GoogleAuthService {
    /// 설정과 교환 구현체로 서비스를 생성합니다.
    pub fn new(settings: GoogleOAuthSettings, exchanger: Arc<dyn CodeExchanger>) -> Self {
        Self {
            settings,
            exchanger,
        }
    }

    /// 환경 변수 설정과 실제 Google 교환 구현체로 서비스를 생성합니다.
    ///
    /// # Panics
    ///
    /// 필수 환경 변수가 없으면 패닉이 발생합니다. 기동 시점에만 호출하세요.
    pub fn from_env() -> AppResult<Self> {
        let settings = GoogleOAuthSettings::from_env();
        let exchanger = Arc::new(GoogleCodeExchanger::new(settings.clone())?);
        Ok(Self::new(settings, exchanger))
    }

    /// 기동 시 빌드된 설정을 반환합니다.
    pub fn settings(&self) -> &GoogleOAuthSettings {
        &self.settings
    }

    /// Google 인증 페이지로의 리다이렉트 URL을 구성합니다.
    ///
    /// OAuth 2.0 Authorization Code Grant 플로우의 첫 번째 단계입니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   client_id=CLIENT_ID&
    ///   redirect_uri=REDIRECT_URI&
    ///   scope=openid%20email%20profile&
    ///   response_type=code&
    ///   state=CSRF_PROTECTION_VALUE
    /// ```
    ///
    /// `redirect_uri`는 콜백 핸들러의 절대 URL이어야 하며, 토큰 교환 시
    /// 동일한 값이 다시 전송됩니다.
    pub fn authorize_url(&self, redirect_uri: &str) -> AppResult<String> {
        let state = self.generate_oauth_state()?;

        let params = [
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("scope", OAUTH_SCOPES),
            ("response_type", "code"),
            ("state", state.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", self.settings.auth_uri, query_string))
    }

    /// 위임된 교환 구현체로 Authorization Code를 검증합니다.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> AppResult<AuthenticationResult> {
        self.exchanger.exchange(code, redirect_uri).await
    }

    /// OAuth State 매개변수 생성
    ///
    /// CSRF 공격 방지를 위한 임의의 state 값을 생성합니다.
    /// 타임스탬프와 UUID nonce를 시크릿과 결합해 SHA-256으로 해시하고
    /// URL-safe base64로 인코딩합니다.
    fn generate_oauth_state(&self) -> AppResult<String> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
            .as_secs();
        let nonce = uuid::Uuid::new_v4();

        let state_data = format!("{}:{}:{}", timestamp, nonce, self.settings.state_secret);
        let hash = Sha256::digest(state_data.as_bytes());

        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash))
    }

    /// OAuth State 매개변수 검증
    ///
    /// 세션도 저장소도 없는 서비스이므로 콜백에서 검증할 수 있는 것은
    /// 존재 여부뿐입니다. state 왕복 대조는 상태 저장소가 필요합니다.
    pub fn verify_oauth_state(&self, state: &str) -> AppResult<()> {
        if state.is_empty() {
            return Err(AppError::AuthenticationError(
                "Google authentication failed.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Google 토큰/UserInfo 엔드포인트에 대한 실제 교환 구현체
///
/// RFC 6749의 code-for-token POST와 UserInfo 조회를 수행합니다.
/// 모든 호출에 기동 시 설정된 타임아웃이 적용됩니다.
pub struct GoogleCodeExchanger {
    settings: GoogleOAuthSettings,
    client: reqwest::Client,
}

impl GoogleCodeExchanger {
    /// 타임아웃이 설정된 HTTP 클라이언트와 함께 교환 구현체를 생성합니다.
    pub fn new(settings: GoogleOAuthSettings) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.exchange_timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { settings, client })
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=AUTHORIZATION_CODE&
    /// client_id=CLIENT_ID&
    /// client_secret=CLIENT_SECRET&
    /// redirect_uri=REDIRECT_URI&
    /// grant_type=authorization_code
    /// ```
    ///
    /// 프로바이더가 교환을 거부하면(`invalid_grant` 등) `Ok(None)`을,
    /// 통신/파싱 장애면 `Err`를 반환합니다.
    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
        redirect_uri: &str,
    ) -> AppResult<Option<GoogleTokenResponse>> {
        let params = [
            ("code", auth_code),
            ("client_id", &self.settings.client_id),
            ("client_secret", &self.settings.client_secret),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 토큰 교환 거부됨: {}", error_text);
            return Ok(None);
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map(Some)
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보 조회
    ///
    /// ```text
    /// GET https://www.googleapis.com/oauth2/v2/userinfo
    /// Authorization: Bearer ACCESS_TOKEN
    /// ```
    ///
    /// 토큰이 거부되면(401 등) `Ok(None)`을, 통신/파싱 장애면 `Err`를
    /// 반환합니다.
    async fn get_user_info(&self, access_token: &str) -> AppResult<Option<GoogleUserInfo>> {
        let response = self
            .client
            .get(&self.settings.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 사용자 정보 조회 거부됨: {}", error_text);
            return Ok(None);
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map(Some)
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e))
            })
    }
}

#[async_trait]
impl CodeExchanger for GoogleCodeExchanger {
    /// Authorization Code를 검증하고 클레임 시퀀스를 반환합니다.
    ///
    /// 토큰 교환과 UserInfo 조회 중 어느 한쪽이라도 프로바이더가 거부하면
    /// 실패한 [`AuthenticationResult`]를 반환합니다.
    async fn exchange(&self, code: &str, redirect_uri: &str) -> AppResult<AuthenticationResult> {
        let Some(token) = self.exchange_code_for_token(code, redirect_uri).await? else {
            return Ok(AuthenticationResult::failure());
        };

        let Some(user) = self.get_user_info(&token.access_token).await? else {
            return Ok(AuthenticationResult::failure());
        };

        Ok(AuthenticationResult::success(user.into_claims()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CALLBACK_PATH;
    use std::time::Duration;

    fn test_settings() -> GoogleOAuthSettings {
        GoogleOAuthSettings {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_uri: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
            callback_path: DEFAULT_CALLBACK_PATH.to_string(),
            redirect_uri_override: None,
            state_secret: "test-secret".to_string(),
            exchange_timeout: Duration::from_secs(10),
        }
    }

    fn test_service() -> GoogleAuthService {
        let settings = test_settings();
        let exchanger = Arc::new(GoogleCodeExchanger::new(settings.clone()).unwrap());
        GoogleAuthService::new(settings, exchanger)
    }

    #[test]
    fn test_authorize_url_contains_required_params() {
        let service = test_service();
        let url = service
            .authorize_url("http://localhost:8080/api/auth/google-response")
            .unwrap();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("client_id=test-client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state="));
    }

    #[test]
    fn test_authorize_url_encodes_redirect_uri() {
        let service = test_service();
        let url = service
            .authorize_url("http://localhost:8080/api/auth/google-response")
            .unwrap();

        // redirect_uri는 URL 인코딩되어 포함됨
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fapi%2Fauth%2Fgoogle-response"
        ));
    }

    #[test]
    fn test_oauth_state_is_unique_per_request() {
        let service = test_service();

        let first = service.generate_oauth_state().unwrap();
        let second = service.generate_oauth_state().unwrap();

        assert!(!first.is_empty());
        // nonce 덕분에 같은 초 안에서도 값이 달라야 함
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_oauth_state() {
        let service = test_service();

        assert!(service.verify_oauth_state("some-state").is_ok());
        assert!(service.verify_oauth_state("").is_err());
    }
}
