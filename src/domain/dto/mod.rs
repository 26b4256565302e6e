//! # Data Transfer Objects
//!
//! HTTP 계층과 유스케이스 사이에서 오가는 요청/응답 구조체입니다.
//! DTO는 원시 값만 운반하며 검증하지 않습니다. 모든 검증은 도메인 값 객체
//! 생성 시점에 한 번만 수행됩니다.

pub mod users;
