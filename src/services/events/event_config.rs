//! 디스패처 구성
//!
//! 각 이벤트 종류에 알림 → 감사 → 분석 순서로 핸들러를 등록합니다.
//! 핸들러 인스턴스는 종류 사이에서 공유되므로 분석 집계가 하나로 합쳐집니다.

use std::sync::Arc;

use log::info;

use super::user_handlers::{UserAnalyticsHandler, UserAuditHandler, UserNotificationHandler};
use crate::domain::events::{EventDispatcher, EventHandler, EventKind};

const SUBSCRIBED_KINDS: [EventKind; 2] = [EventKind::UserCreated, EventKind::UserEmailChanged];

/// 기본 사용자 이벤트 핸들러를 디스패처에 등록합니다.
pub fn configure_dispatcher(dispatcher: &mut EventDispatcher) {
    let handlers: [Arc<dyn EventHandler>; 3] = [
        Arc::new(UserNotificationHandler),
        Arc::new(UserAuditHandler),
        Arc::new(UserAnalyticsHandler::new()),
    ];

    for kind in SUBSCRIBED_KINDS {
        for handler in &handlers {
            dispatcher.subscribe(kind, Arc::clone(handler));
        }
    }

    info!("🔔 Event handlers configured for {} event kinds", SUBSCRIBED_KINDS.len());
}

pub fn create_configured_event_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    configure_dispatcher(&mut dispatcher);
    dispatcher
}
