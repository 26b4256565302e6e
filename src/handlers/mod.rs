//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 유스케이스 호출로 옮기는 얇은 웹 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - JSON ↔ 명령/응답 DTO        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 유스케이스, 이벤트 발행               ← Application Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Infrastructure Layer
//! ├─────────────────────────────────────────────┤
//!   Entities / Value Objects / Events             ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 검증하지 않습니다. 유스케이스가 반환한 `AppError`가 그대로
//! HTTP 상태 코드로 변환됩니다.

pub mod users;
