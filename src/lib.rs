//! 사용자 계정 서비스
//!
//! 도메인 주도 설계 계층으로 구성된 사용자 CRUD 서비스입니다.
//! 값 객체가 모든 입력 검증을 담당하고, 애그리거트가 기록한 도메인 이벤트는
//! 영속화가 성공한 뒤 동기식 디스패처를 통해 구독자에게 전달됩니다.
//!
//! # Features
//!
//! - **값 객체**: 이름, 나이, 이메일 검증 (생성 시점에 한 번)
//! - **도메인 이벤트**: `UserCreated`, `UserEmailChanged` 기록 및 발행
//! - **유스케이스**: 생성, 조회, 부분 수정, 삭제
//! - **저장소 선택**: MongoDB 또는 프로세스 메모리
//! - **명시적 조립**: 전역 로케이터 없이 [`core::registry::AppContainer`]에서 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │    Use Cases    │ ───▶ │ EventDispatcher  │ ← 알림, 감사, 분석
//! └─────────────────┘      └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 문서 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_account_service::config::Settings;
//! use user_account_service::core::registry::AppContainer;
//! use user_account_service::services::users::CreateUserCommand;
//!
//! let container = AppContainer::bootstrap(&Settings::from_env()).await?;
//! let user = container.create_user().execute(CreateUserCommand {
//!     name: "Jane Doe".to_string(),
//!     age: 30,
//!     email: "jane@example.com".to_string(),
//! }).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
