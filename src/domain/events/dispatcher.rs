//! # 동기식 이벤트 디스패처
//!
//! 이벤트 종류별로 핸들러 목록을 보관하고, 호출한 스레드에서 등록 순서대로
//! 핸들러를 실행합니다.
//!
//! ## 동작 규칙
//!
//! - 같은 핸들러를 두 번 구독하면 이벤트마다 두 번 실행됩니다 (중복 제거 없음).
//! - 이벤트의 정확한 종류에 등록된 핸들러만 호출됩니다.
//! - 핸들러가 실패하면 즉시 전파되고, 배치의 나머지 핸들러/이벤트는 처리되지 않습니다.
//!   트랜잭션 롤백은 없습니다.
//! - 구독(`subscribe`, `clear_handlers`)은 `&mut self`가 필요합니다. 시작 시점에
//!   단독 소유 상태에서 구성한 뒤 `Arc`로 공유하면, 발행 중 재구독은 컴파일 단계에서
//!   막히므로 별도의 락이 필요 없습니다.
//!
//! ```rust,ignore
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.subscribe(EventKind::UserCreated, Arc::new(UserAuditHandler));
//!
//! let dispatcher = Arc::new(dispatcher);
//! dispatcher.dispatch(&user.domain_events())?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use super::{DomainEvent, EventKind};

/// 이벤트 핸들러 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler '{handler}' failed on {event_kind}: {message}")]
pub struct HandlerError {
    pub handler: String,
    pub event_kind: EventKind,
    pub message: String,
}

impl HandlerError {
    pub fn new(handler: impl Into<String>, event_kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            event_kind,
            message: message.into(),
        }
    }
}

/// 도메인 이벤트 구독자
pub trait EventHandler: Send + Sync {
    /// 로그와 에러 메시지에 사용되는 핸들러 이름
    fn name(&self) -> &str;

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError>;
}

/// 이벤트 종류 → 핸들러 목록 라우터
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 핸들러를 이벤트 종류에 추가합니다. 등록 순서가 실행 순서입니다.
    pub fn subscribe(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        debug!("🔗 Subscribing {} to {}", handler.name(), kind);
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// 이벤트 목록을 순서대로 발행합니다.
    ///
    /// # Errors
    ///
    /// * `HandlerError` - 첫 번째로 실패한 핸들러의 에러. 이후 처리는 중단됩니다.
    pub fn dispatch(&self, events: &[DomainEvent]) -> Result<(), HandlerError> {
        debug!("📨 Dispatching {} events", events.len());

        for event in events {
            let Some(handlers) = self.handlers.get(&event.kind()) else {
                continue;
            };

            for handler in handlers {
                handler.handle(event)?;
            }
        }

        Ok(())
    }

    pub fn dispatch_single(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        self.dispatch(std::slice::from_ref(event))
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::entities::entity::EntityId;
    use crate::domain::events::{UserCreated, UserEmailChanged};

    /// 호출 기록을 공유 로그에 남기는 테스트 핸들러
    struct RecordingHandler {
        name: String,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingHandler {
        fn new(name: &str, log: &Arc<Mutex<Vec<String>>>) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                log: Arc::clone(log),
            })
        }
    }

    impl EventHandler for RecordingHandler {
        fn name(&self) -> &str {
            &self.name
        }

        fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, event.kind()));
            Ok(())
        }
    }

    struct FailingHandler;

    impl EventHandler for FailingHandler {
        fn name(&self) -> &str {
            "failing"
        }

        fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
            Err(HandlerError::new(self.name(), event.kind(), "boom"))
        }
    }

    fn created() -> DomainEvent {
        UserCreated::new(
            EntityId::new_identity(),
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            30,
        )
        .into()
    }

    fn email_changed() -> DomainEvent {
        UserEmailChanged::new(
            EntityId::new_identity(),
            "old@example.com".to_string(),
            "new@example.com".to_string(),
        )
        .into()
    }

    fn entries(log: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn test_handlers_run_once_each_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(EventKind::UserCreated, RecordingHandler::new("h1", &log));
        dispatcher.subscribe(EventKind::UserCreated, RecordingHandler::new("h2", &log));

        dispatcher.dispatch_single(&created()).unwrap();

        assert_eq!(entries(&log), vec!["h1:UserCreated", "h2:UserCreated"]);
    }

    #[test]
    fn test_duplicate_subscription_runs_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = RecordingHandler::new("dup", &log);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(EventKind::UserCreated, handler.clone());
        dispatcher.subscribe(EventKind::UserCreated, handler);

        dispatcher.dispatch_single(&created()).unwrap();

        assert_eq!(dispatcher.handler_count(EventKind::UserCreated), 2);
        assert_eq!(entries(&log).len(), 2);
    }

    #[test]
    fn test_routes_by_exact_kind_and_preserves_event_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(EventKind::UserCreated, RecordingHandler::new("created", &log));
        dispatcher.subscribe(EventKind::UserEmailChanged, RecordingHandler::new("changed", &log));

        dispatcher
            .dispatch(&[email_changed(), created(), email_changed()])
            .unwrap();

        assert_eq!(
            entries(&log),
            vec![
                "changed:UserEmailChanged",
                "created:UserCreated",
                "changed:UserEmailChanged",
            ]
        );
    }

    #[test]
    fn test_event_without_handlers_is_ignored() {
        let dispatcher = EventDispatcher::new();

        assert!(dispatcher.dispatch(&[created(), email_changed()]).is_ok());
        assert!(dispatcher.dispatch(&[]).is_ok());
        assert_eq!(dispatcher.handler_count(EventKind::UserCreated), 0);
    }

    #[test]
    fn test_failure_aborts_remaining_handlers_and_events() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(EventKind::UserCreated, RecordingHandler::new("before", &log));
        dispatcher.subscribe(EventKind::UserCreated, Arc::new(FailingHandler));
        dispatcher.subscribe(EventKind::UserCreated, RecordingHandler::new("after", &log));
        dispatcher.subscribe(EventKind::UserEmailChanged, RecordingHandler::new("next", &log));

        let err = dispatcher
            .dispatch(&[created(), email_changed()])
            .unwrap_err();

        assert_eq!(err.handler, "failing");
        assert_eq!(err.event_kind, EventKind::UserCreated);
        assert_eq!(entries(&log), vec!["before:UserCreated"]);
    }

    #[test]
    fn test_clear_handlers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(EventKind::UserCreated, RecordingHandler::new("h", &log));
        dispatcher.subscribe(EventKind::UserEmailChanged, RecordingHandler::new("h", &log));

        dispatcher.clear_handlers();
        dispatcher.dispatch_single(&created()).unwrap();

        assert_eq!(dispatcher.handler_count(EventKind::UserCreated), 0);
        assert_eq!(dispatcher.handler_count(EventKind::UserEmailChanged), 0);
        assert!(entries(&log).is_empty());
    }
}
