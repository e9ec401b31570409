//! # 신원 클레임 모델
//!
//! 프로바이더가 발급한 신원 단언을 평탄한 클레임 시퀀스로 표현합니다.
//! 클레임은 `(issuer, original_issuer, claim_type, value)` 튜플이며
//! 그래프나 상속 구조 없이 단순 레코드 나열로 충분합니다.
//!
//! 인증 결과는 요청 단위로 생성되어 HTTP 응답 생성 후 폐기됩니다.
//! 어디에도 저장되지 않습니다.

use serde::Serialize;

/// Google 클레임의 발급자
pub const GOOGLE_ISSUER: &str = "https://accounts.google.com";

/// 이메일 클레임 타입
pub const EMAIL_CLAIM_TYPE: &str = "email";

/// 인증된 신원에 대한 단일 클레임
///
/// 프로바이더가 단언한 타입-값 쌍입니다 (예: email, name).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    /// 클레임 발급자
    pub issuer: String,
    /// 원 발급자 (재발급이 없으므로 issuer와 동일)
    pub original_issuer: String,
    /// 클레임 타입 (예: "email", "name")
    pub claim_type: String,
    /// 클레임 값 (변환 없이 보존)
    pub value: String,
}

impl Claim {
    /// Google 발급자로 새 클레임을 생성합니다.
    pub fn google(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            issuer: GOOGLE_ISSUER.to_string(),
            original_issuer: GOOGLE_ISSUER.to_string(),
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// 콜백 코드 교환의 결과
///
/// 교환이 성공한 경우에만 클레임이 존재합니다.
/// 이메일 클레임의 존재는 보장되지 않으며, 부재는 핸들러가 처리해야 하는
/// 정상적인 결과입니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationResult {
    /// 교환 성공 여부
    pub succeeded: bool,
    /// 프로바이더가 단언한 클레임들 (성공 시에만 비어있지 않음)
    pub claims: Vec<Claim>,
}

impl AuthenticationResult {
    /// 성공한 인증 결과를 생성합니다.
    pub fn success(claims: Vec<Claim>) -> Self {
        Self {
            succeeded: true,
            claims,
        }
    }

    /// 실패한 인증 결과를 생성합니다. 클레임을 포함하지 않습니다.
    pub fn failure() -> Self {
        Self {
            succeeded: false,
            claims: Vec::new(),
        }
    }

    /// 주어진 타입의 첫 번째 클레임을 반환합니다.
    pub fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    /// 이메일 클레임 값을 반환합니다.
    ///
    /// 첫 번째 `email` 타입 클레임의 값입니다. 없으면 `None` 입니다.
    pub fn email(&self) -> Option<&str> {
        self.find_first(EMAIL_CLAIM_TYPE).map(|c| c.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_claim_extraction() {
        let result = AuthenticationResult::success(vec![
            Claim::google("name", "User"),
            Claim::google("email", "user@example.com"),
        ]);

        assert!(result.succeeded);
        assert_eq!(result.email(), Some("user@example.com"));
    }

    #[test]
    fn test_email_claim_first_wins() {
        // 동일 타입이 여러 개면 첫 번째 클레임을 선택
        let result = AuthenticationResult::success(vec![
            Claim::google("email", "first@example.com"),
            Claim::google("email", "second@example.com"),
        ]);

        assert_eq!(result.email(), Some("first@example.com"));
    }

    #[test]
    fn test_email_claim_missing() {
        let result = AuthenticationResult::success(vec![Claim::google("name", "User")]);

        assert!(result.succeeded);
        assert_eq!(result.email(), None);
    }

    #[test]
    fn test_email_value_preserved() {
        // 값은 변환 없이 그대로 (대소문자 보존)
        let result =
            AuthenticationResult::success(vec![Claim::google("email", "MiXeD@Example.COM")]);

        assert_eq!(result.email(), Some("MiXeD@Example.COM"));
    }

    #[test]
    fn test_failure_has_no_claims() {
        let result = AuthenticationResult::failure();

        assert!(!result.succeeded);
        assert!(result.claims.is_empty());
        assert_eq!(result.email(), None);
    }

    #[test]
    fn test_claim_issuer() {
        let claim = Claim::google("email", "user@example.com");

        assert_eq!(claim.issuer, GOOGLE_ISSUER);
        assert_eq!(claim.original_issuer, GOOGLE_ISSUER);
    }
}
