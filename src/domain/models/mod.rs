//! # Domain Models Module
//!
//! 저장소에 기록되는 문서 형태의 모델을 정의합니다.
//! 도메인 애그리거트는 검증 규칙과 이벤트 버퍼를 가지므로 직접 직렬화하지 않고,
//! 이 모듈의 평평한 문서 구조로 변환하여 저장합니다.
//!
//! ```text
//! User (aggregate) ──From──▶ UserDocument ──BSON──▶ MongoDB `users`
//!        ▲                         │
//!        └──────TryFrom (restore)──┘
//! ```

pub mod user_document;

pub use user_document::{UserDocument, USER_COLLECTION};
