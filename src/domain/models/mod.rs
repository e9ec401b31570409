//! # Models Module
//!
//! 외부 시스템(Google OAuth) 통합에 사용되는 모델들입니다.
//! 프로바이더가 발급한 신원 단언을 클레임 시퀀스로 표현하고,
//! Google API 응답의 와이어 포맷을 역직렬화합니다.

pub mod oauth;

pub use oauth::*;
