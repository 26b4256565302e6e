//! 유스케이스 테스트용 더블

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::entity::EntityId;
use crate::domain::entities::users::User;
use crate::domain::events::{DomainEvent, EventDispatcher, EventHandler, EventKind, HandlerError};
use crate::repositories::users::UserRepository;

/// `"{kind}:{aggregate_id}"` 형태로 호출을 기록
#[derive(Clone, Default)]
pub(crate) struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct RecordingHandler {
    log: EventLog,
}

impl EventHandler for RecordingHandler {
    fn name(&self) -> &str {
        "recording"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        self.log
            .0
            .lock()
            .unwrap()
            .push(format!("{}:{}", event.kind(), event.aggregate_id()));
        Ok(())
    }
}

/// 모든 이벤트 종류에 기록 핸들러를 하나씩 붙인 디스패처
pub(crate) fn recording_dispatcher() -> (Arc<EventDispatcher>, EventLog) {
    let log = EventLog::default();
    let handler = Arc::new(RecordingHandler { log: log.clone() });

    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe(EventKind::UserCreated, handler.clone());
    dispatcher.subscribe(EventKind::UserEmailChanged, handler);

    (Arc::new(dispatcher), log)
}

struct RejectingHandler;

impl EventHandler for RejectingHandler {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        Err(HandlerError::new(self.name(), event.kind(), "down"))
    }
}

/// 모든 이벤트 종류에서 실패하는 핸들러만 등록된 디스패처
pub(crate) fn rejecting_dispatcher() -> Arc<EventDispatcher> {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe(EventKind::UserCreated, Arc::new(RejectingHandler));
    dispatcher.subscribe(EventKind::UserEmailChanged, Arc::new(RejectingHandler));
    Arc::new(dispatcher)
}

/// 모든 연산이 `PersistenceError`로 실패하는 리포지토리
pub(crate) struct FailingUserRepository;

fn unavailable() -> AppError {
    AppError::PersistenceError("store unavailable".to_string())
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    fn name(&self) -> &str {
        "FailingUserRepository"
    }

    async fn get_by_id(&self, _id: &EntityId) -> AppResult<Option<User>> {
        Err(unavailable())
    }

    async fn create(&self, _user: &User) -> AppResult<User> {
        Err(unavailable())
    }

    async fn update(&self, _id: &EntityId, _user: &User) -> AppResult<Option<User>> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &EntityId) -> AppResult<()> {
        Err(unavailable())
    }
}
