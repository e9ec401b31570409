//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 관련 설정을 관리하는 모듈입니다.
//! Google Cloud Console 에서 발급받은 클라이언트 정보와
//! OAuth 플로우에 필요한 엔드포인트/보안 설정을 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! ```
//!
//! ## 선택 환경 변수 설정
//!
//! ```bash
//! # 콜백 URL 고정 (미설정 시 요청 호스트 기반으로 생성)
//! export GOOGLE_REDIRECT_URI="https://yourdomain.com/api/auth/google-response"
//!
//! # OAuth state 서명용 시크릿
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//!
//! # 토큰 교환 타임아웃 (초)
//! export GOOGLE_EXCHANGE_TIMEOUT_SECS="10"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::GoogleOAuthSettings;
//!
//! // 기동 시 한 번 빌드해서 핸들러에 명시적으로 전달
//! let settings = GoogleOAuthSettings::from_env();
//! let callback = settings.callback_url("https", "yourdomain.com");
//! ```

use std::env;
use std::time::Duration;

/// Google OAuth 콜백 핸들러의 기본 경로
pub const DEFAULT_CALLBACK_PATH: &str = "/api/auth/google-response";

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 환경 변수에서 읽습니다.
/// 승인된 리디렉션 URI 목록에 콜백 URL이 등록되어 있어야 합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 이 값은 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    /// 로그에 출력하지 마세요.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// 고정 콜백 URI 오버라이드를 반환합니다.
    ///
    /// 설정된 경우 요청 호스트와 무관하게 이 값이 `redirect_uri`로 사용됩니다.
    /// 미설정 시 인바운드 요청의 scheme/host에 콜백 경로를 붙여 생성합니다.
    pub fn redirect_uri() -> Option<String> {
        env::var("GOOGLE_REDIRECT_URI").ok()
    }

    /// 콜백 핸들러 경로를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `/api/auth/google-response`
    pub fn callback_path() -> String {
        env::var("GOOGLE_CALLBACK_PATH").unwrap_or_else(|_| DEFAULT_CALLBACK_PATH.to_string())
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    ///
    /// 사용자를 Google 로그인 페이지로 리디렉션할 때 사용되는 URL 입니다.
    ///
    /// # 기본값
    ///
    /// `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 인증 코드를 액세스 토큰으로 교환할 때 사용되는 URL 입니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google UserInfo 엔드포인트 URI를 반환합니다.
    ///
    /// 액세스 토큰으로 사용자 프로필(이메일 포함)을 조회할 때 사용됩니다.
    ///
    /// # 기본값
    ///
    /// `https://www.googleapis.com/oauth2/v2/userinfo`
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }

    /// 토큰 교환 호출의 타임아웃을 초 단위로 반환합니다.
    ///
    /// 느린 프로바이더에 대해 무한정 대기하지 않도록 제한합니다.
    ///
    /// # 기본값
    ///
    /// 10초
    pub fn exchange_timeout_secs() -> u64 {
        env::var("GOOGLE_EXCHANGE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// OAuth 일반 설정을 관리하는 구조체
///
/// CSRF 공격 방지를 위한 state 매개변수 생성에 사용되는 보안 설정입니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 서명용 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "oauth-state-secret"을 사용하지만,
    /// 프로덕션에서는 경고 로그가 출력됩니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }
}

/// 기동 시 한 번 빌드되어 핸들러에 명시적으로 전달되는 OAuth 설정
///
/// 전역 싱글톤 대신 `web::Data`로 두 라우트 핸들러에 주입됩니다.
/// 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.
#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    /// Google OAuth Client ID
    pub client_id: String,
    /// Google OAuth Client Secret (로그 출력 금지)
    pub client_secret: String,
    /// 인증 엔드포인트
    pub auth_uri: String,
    /// 토큰 교환 엔드포인트
    pub token_uri: String,
    /// UserInfo 엔드포인트
    pub userinfo_uri: String,
    /// 콜백 핸들러 경로
    pub callback_path: String,
    /// 고정 콜백 URI 오버라이드
    pub redirect_uri_override: Option<String>,
    /// state 서명용 시크릿
    pub state_secret: String,
    /// 토큰 교환 타임아웃
    pub exchange_timeout: Duration,
}

impl GoogleOAuthSettings {
    /// 환경 변수에서 설정을 빌드합니다.
    ///
    /// # Panics
    ///
    /// 필수 환경 변수(`GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`)가
    /// 설정되지 않은 경우 패닉이 발생합니다. 기동 시점에만 호출하세요.
    pub fn from_env() -> Self {
        Self {
            client_id: GoogleOAuthConfig::client_id(),
            client_secret: GoogleOAuthConfig::client_secret(),
            auth_uri: GoogleOAuthConfig::auth_uri(),
            token_uri: GoogleOAuthConfig::token_uri(),
            userinfo_uri: GoogleOAuthConfig::userinfo_uri(),
            callback_path: GoogleOAuthConfig::callback_path(),
            redirect_uri_override: GoogleOAuthConfig::redirect_uri(),
            state_secret: OAuthConfig::state_secret(),
            exchange_timeout: Duration::from_secs(GoogleOAuthConfig::exchange_timeout_secs()),
        }
    }

    /// 콜백 핸들러의 절대 URL을 반환합니다.
    ///
    /// 오버라이드가 설정된 경우 그 값을 그대로 사용하고,
    /// 아니면 인바운드 요청의 scheme/host에 콜백 경로를 붙여 생성합니다.
    /// 이 값은 인증 리다이렉트와 토큰 교환 양쪽에서 동일하게 사용되어야 합니다.
    pub fn callback_url(&self, scheme: &str, host: &str) -> String {
        match &self.redirect_uri_override {
            Some(uri) => uri.clone(),
            None => format!("{}://{}{}", scheme, host, self.callback_path),
        }
    }
}
