//! # 코드 교환 경계 인터페이스
//!
//! OAuth 2.0 Authorization Code를 신원 단언으로 교환하는 단계는
//! 외부 프로바이더와의 계약이므로 trait 뒤로 분리합니다.
//! 프로덕션에서는 [`super::GoogleCodeExchanger`]가 Google의 토큰/UserInfo
//! 엔드포인트를 호출하고, 테스트에서는 목 구현체를 주입합니다.

use async_trait::async_trait;

use crate::domain::AuthenticationResult;
use crate::errors::errors::AppResult;

/// Authorization Code를 검증하고 신원 단언을 반환하는 경계 인터페이스
///
/// ## 결과 의미론
///
/// - `Ok(result)` + `result.succeeded == true` - 교환 성공, 클레임 포함
/// - `Ok(result)` + `result.succeeded == false` - 프로바이더가 교환을 거부함
///   (만료/재사용된 코드 등). 재시도하지 않는 클라이언트 측 실패입니다.
/// - `Err(_)` - 통신 장애나 파싱 오류 같은 인프라 문제
#[async_trait]
pub trait CodeExchanger: Send + Sync {
    /// Authorization Code를 프로바이더에 검증하고 신원 단언을 반환합니다.
    ///
    /// `redirect_uri`는 인증 리다이렉트에 사용된 값과 동일해야 합니다.
    async fn exchange(&self, code: &str, redirect_uri: &str) -> AppResult<AuthenticationResult>;
}
