//! # 도메인 이벤트 모듈
//!
//! 상태 변경을 나타내는 불변 레코드와, 이를 구독자에게 전달하는
//! 동기식 디스패처를 제공합니다.
//!
//! 런타임 타입 검사 대신 [`EventKind`] 태그로 라우팅합니다. 새로운 이벤트를
//! 추가하면 [`DomainEvent`]와 [`EventKind`]에 변형을 하나씩 추가하고
//! `kind()` 매칭을 확장하면 됩니다.
//!
//! ```text
//! User::create ──▶ PendingEvents ──(영속화 성공 후)──▶ EventDispatcher
//!                                                      ├─▶ NotificationHandler
//!                                                      ├─▶ AuditHandler
//!                                                      └─▶ AnalyticsHandler
//! ```

pub mod dispatcher;
pub mod user_events;

pub use dispatcher::{EventDispatcher, EventHandler, HandlerError};
pub use user_events::{UserCreated, UserEmailChanged};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::entity::EntityId;

/// 모든 도메인 이벤트가 공유하는 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// 감사 로그 상관관계를 위한 이벤트 고유 ID
    pub event_id: Uuid,
    pub aggregate_id: EntityId,
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// 현재 시각으로 메타데이터를 생성합니다.
    pub fn now(aggregate_id: EntityId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            aggregate_id,
            occurred_at: Utc::now(),
        }
    }
}

/// 디스패처 라우팅에 사용하는 이벤트 종류 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    UserCreated,
    UserEmailChanged,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::UserCreated => "UserCreated",
            EventKind::UserEmailChanged => "UserEmailChanged",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 도메인 이벤트
///
/// 생성 후에는 절대 변경되지 않는 값 레코드입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    UserCreated(UserCreated),
    UserEmailChanged(UserEmailChanged),
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::UserCreated(_) => EventKind::UserCreated,
            DomainEvent::UserEmailChanged(_) => EventKind::UserEmailChanged,
        }
    }

    pub fn metadata(&self) -> &EventMetadata {
        match self {
            DomainEvent::UserCreated(event) => &event.metadata,
            DomainEvent::UserEmailChanged(event) => &event.metadata,
        }
    }

    pub fn aggregate_id(&self) -> &EntityId {
        &self.metadata().aggregate_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata().occurred_at
    }
}

impl From<UserCreated> for DomainEvent {
    fn from(event: UserCreated) -> Self {
        DomainEvent::UserCreated(event)
    }
}

impl From<UserEmailChanged> for DomainEvent {
    fn from(event: UserEmailChanged) -> Self {
        DomainEvent::UserEmailChanged(event)
    }
}
