//! # 엔티티 기반 타입
//!
//! 식별자 부여, 식별자 기반 동등성/해시, 도메인 이벤트 버퍼링을 담당합니다.
//! 상속이 없으므로 공통 동작은 두 개의 트레이트로 나뉩니다.
//!
//! - [`Entity`]: 식별자를 노출하는 모든 도메인 객체
//! - [`AggregateRoot`]: 아직 발행되지 않은 도메인 이벤트를 소유하는 엔티티
//!
//! 동등성과 해시는 [`impl_entity_identity!`] 매크로로 구현합니다.
//! 같은 구체 타입끼리만 비교되므로 "같은 타입 + 같은 식별자" 규칙이
//! 타입 시스템으로 보장됩니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::events::DomainEvent;
use crate::domain::value_objects::ValueObjectError;

/// 엔티티 식별자
///
/// MongoDB `ObjectId`를 감싼 불투명 값입니다. 생성 시점에 한 번 부여되고
/// 내용에서 파생되지 않으며 재사용되지 않습니다. 직렬화 시에는 24자리
/// 16진수 문자열로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(ObjectId);

impl EntityId {
    /// 새로운 전역 고유 식별자를 생성합니다.
    pub fn new_identity() -> Self {
        Self(ObjectId::new())
    }

    /// 16진수 문자열에서 기존 식별자를 복원합니다.
    ///
    /// # Errors
    ///
    /// * `ValueObjectError::InvalidIdentifier` - 24자리 16진수가 아닌 경우
    pub fn parse_str(value: &str) -> Result<Self, ValueObjectError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| ValueObjectError::InvalidIdentifier(value.to_string()))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for EntityId {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl From<ObjectId> for EntityId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_str(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.to_hex()
    }
}

/// 식별자로 구분되는 도메인 객체
pub trait Entity {
    fn id(&self) -> &EntityId;
}

/// 발행 대기 중인 도메인 이벤트 버퍼
///
/// 추가만 가능한 순서 있는 목록입니다. 외부에는 복사본만 노출합니다.
#[derive(Debug, Clone, Default)]
pub struct PendingEvents {
    events: Vec<DomainEvent>,
}

impl PendingEvents {
    pub fn push(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    pub fn snapshot(&self) -> Vec<DomainEvent> {
        self.events.clone()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// 도메인 이벤트를 수집하는 애그리거트 루트
///
/// 구현체는 버퍼 접근자 두 개만 제공하면 되고, 나머지 동작은
/// 기본 메서드로 제공됩니다. 이벤트는 영속화가 성공한 뒤 소유 유스케이스가
/// 한 번만 발행하고 [`AggregateRoot::clear_domain_events`]로 비웁니다.
pub trait AggregateRoot: Entity {
    fn pending_events(&self) -> &PendingEvents;

    fn pending_events_mut(&mut self) -> &mut PendingEvents;

    fn add_domain_event(&mut self, event: DomainEvent) {
        self.pending_events_mut().push(event);
    }

    /// 현재 버퍼의 복사본
    ///
    /// 반환된 벡터를 수정해도 내부 버퍼에는 영향이 없습니다.
    fn domain_events(&self) -> Vec<DomainEvent> {
        self.pending_events().snapshot()
    }

    /// 버퍼를 비웁니다. 여러 번 호출해도 안전합니다.
    fn clear_domain_events(&mut self) {
        self.pending_events_mut().clear();
    }
}

/// 식별자 기반 `PartialEq`/`Eq`/`Hash` 구현
///
/// ```rust,ignore
/// impl_entity_identity!(User);
/// ```
macro_rules! impl_entity_identity {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::domain::entities::entity::Entity::id(self)
                    == $crate::domain::entities::entity::Entity::id(other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash($crate::domain::entities::entity::Entity::id(self), state);
            }
        }
    };
}

pub(crate) use impl_entity_identity;
