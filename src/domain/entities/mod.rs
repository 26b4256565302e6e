//! # Domain Entities Module
//!
//! 식별자로 구분되는 도메인 객체들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/       ← 이 모듈 (엔티티 기반 타입 + 사용자 애그리거트)
//! ├── value_objects/  ← 자기 검증 값 객체
//! ├── events/         ← 도메인 이벤트와 디스패처
//! ├── models/         ← 저장소 문서 모델
//! └── dto/            ← 데이터 전송 객체
//! ```
//!
//! 엔티티는 필드 값이 아니라 식별자로 비교됩니다. 모든 필드가 같아도
//! 식별자가 다르면 다른 엔티티이고, 필드가 달라도 식별자가 같으면 같은 엔티티입니다.

pub mod entity;
pub mod users;

pub use entity::{AggregateRoot, Entity, EntityId, PendingEvents};
