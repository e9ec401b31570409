//! 인증 플로우 응답 DTO 모듈
//!
//! 콜백 성공 시 클라이언트에게 반환되는 JSON 응답을 정의합니다.

use serde::Serialize;

/// 콜백 성공 응답
///
/// 추출된 이메일 클레임을 `{"Email": "..."}` 형태로 반환합니다.
/// 필드 이름은 기존 클라이언트와의 호환을 위해 대문자 `Email`을 유지합니다.
/// 클레임 값은 변환 없이 그대로 전달됩니다 (대소문자 보존).
#[derive(Debug, Serialize)]
pub struct EmailResponse {
    /// 이메일 클레임 값
    #[serde(rename = "Email")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_response_field_name() {
        let response = EmailResponse {
            email: "User@Example.com".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();

        // 필드 이름은 Email, 값은 대소문자 보존
        assert_eq!(json["Email"], "User@Example.com");
    }
}
