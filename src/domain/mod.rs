//! # Domain Layer
//!
//! 사용자 계정 도메인의 핵심 모델을 담당합니다.
//!
//! ## 구성
//!
//! - [`value_objects`]: 이름/나이/이메일 자기 검증 값 객체
//! - [`entities`]: 엔티티 기반 타입과 사용자 애그리거트
//! - [`events`]: 도메인 이벤트와 동기식 디스패처
//! - [`models`]: MongoDB 저장 문서
//! - [`dto`]: HTTP 요청/응답 구조체
//!
//! 도메인 계층은 웹 프레임워크나 저장소 구현을 알지 못합니다.
//! (`EntityId`가 감싸는 `ObjectId` 타입만 예외적으로 bson에서 가져옵니다.)

pub mod dto;
pub mod entities;
pub mod events;
pub mod models;
pub mod value_objects;
