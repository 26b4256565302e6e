//! # Application Services
//!
//! 유스케이스와 이벤트 구독자를 제공하는 애플리케이션 계층입니다.
//!
//! - [`users`]: 사용자 생성/조회/수정/삭제 유스케이스
//! - [`events`]: 도메인 이벤트 구독자(알림, 감사, 분석)와 디스패처 구성
//!
//! 유스케이스는 생성 시점에 리포지토리와 디스패처를 주입받습니다.
//! 전역 서비스 로케이터는 사용하지 않으며, 조립은 [`crate::core::registry`]가 담당합니다.

pub mod events;
pub mod users;
