//! # 도메인 이벤트 구독자
//!
//! 사용자 이벤트에 반응하는 부수 효과 핸들러와, 이를 디스패처에 등록하는
//! 구성 함수를 제공합니다.
//!
//! | 핸들러 | 역할 |
//! |--------|------|
//! | [`UserNotificationHandler`] | 환영/변경 알림 메시지 로그 |
//! | [`UserAuditHandler`] | 이벤트 전체를 JSON 감사 레코드로 기록 |
//! | [`UserAnalyticsHandler`] | 이벤트 수, 이메일 도메인 집계 |

pub mod event_config;
pub mod user_handlers;

pub use event_config::{configure_dispatcher, create_configured_event_dispatcher};
pub use user_handlers::{UserAnalyticsHandler, UserAuditHandler, UserNotificationHandler};
