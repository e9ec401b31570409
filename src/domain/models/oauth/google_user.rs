//! # Google OAuth 사용자 정보 모델
//!
//! Google UserInfo 엔드포인트(`https://www.googleapis.com/oauth2/v2/userinfo`)에서
//! 반환되는 사용자 정보를 역직렬화하고 클레임 시퀀스로 변환합니다.
//!
//! ## OAuth 2.0 스코프 요구사항
//!
//! | 필드 | 필수 스코프 |
//! |------|-------------|
//! | `id` | `openid` |
//! | `email`, `verified_email` | `email` |
//! | `name`, `given_name`, `family_name`, `picture` | `profile` |

use serde::Deserialize;

use super::claim::Claim;

/// Google OAuth 2.0 사용자 정보 응답 구조체
///
/// `id`를 제외한 모든 필드는 부여된 스코프에 따라 빠질 수 있으므로
/// Option 입니다. 특히 이메일의 부재는 파싱 오류가 아니라
/// 핸들러가 처리해야 하는 정상적인 결과입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자 (불변, 전역 고유)
    pub id: String,

    /// 사용자 이메일 주소 (`email` 스코프 필요)
    pub email: Option<String>,

    /// 이메일 검증 상태
    pub verified_email: Option<bool>,

    /// 전체 이름
    pub name: Option<String>,

    /// 이름
    pub given_name: Option<String>,

    /// 성
    pub family_name: Option<String>,

    /// 프로필 사진 URL
    pub picture: Option<String>,
}

impl GoogleUserInfo {
    /// 사용자 정보를 클레임 시퀀스로 변환합니다.
    ///
    /// 존재하는 필드만 클레임이 됩니다. 클레임 타입은 OIDC 표준 이름을
    /// 따르며(`sub`, `email`, `name`, ...) 값은 변환 없이 보존됩니다.
    pub fn into_claims(self) -> Vec<Claim> {
        let mut claims = vec![Claim::google("sub", self.id)];

        if let Some(email) = self.email {
            claims.push(Claim::google("email", email));
        }
        if let Some(name) = self.name {
            claims.push(Claim::google("name", name));
        }
        if let Some(given_name) = self.given_name {
            claims.push(Claim::google("given_name", given_name));
        }
        if let Some(family_name) = self.family_name {
            claims.push(Claim::google("family_name", family_name));
        }
        if let Some(picture) = self.picture {
            claims.push(Claim::google("picture", picture));
        }

        claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_profile() {
        let json = r#"{
            "id": "123456789012345678901",
            "email": "user@example.com",
            "verified_email": true,
            "name": "User Name",
            "given_name": "User",
            "family_name": "Name",
            "picture": "https://lh3.googleusercontent.com/photo.jpg"
        }"#;

        let user: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "123456789012345678901");
        assert_eq!(user.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_deserialize_minimal_profile() {
        // email 스코프 없이 응답이 와도 파싱 오류가 아님
        let json = r#"{"id": "123456789012345678901"}"#;

        let user: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert!(user.email.is_none());
    }

    #[test]
    fn test_into_claims_maps_present_fields() {
        let user = GoogleUserInfo {
            id: "42".to_string(),
            email: Some("user@example.com".to_string()),
            verified_email: Some(true),
            name: Some("User".to_string()),
            given_name: None,
            family_name: None,
            picture: None,
        };

        let claims = user.into_claims();
        let types: Vec<&str> = claims.iter().map(|c| c.claim_type.as_str()).collect();

        assert_eq!(types, vec!["sub", "email", "name"]);
        assert_eq!(claims[1].value, "user@example.com");
    }

    #[test]
    fn test_into_claims_without_email() {
        let user = GoogleUserInfo {
            id: "42".to_string(),
            email: None,
            verified_email: None,
            name: Some("User".to_string()),
            given_name: None,
            family_name: None,
            picture: None,
        };

        let claims = user.into_claims();

        assert!(claims.iter().all(|c| c.claim_type != "email"));
    }
}
