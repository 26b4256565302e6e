//! User Aggregate Implementation
//!
//! 이름, 나이, 이메일 값 객체와 엔티티 식별자를 조합한 애그리거트 루트입니다.
//! 상태를 바꾸는 도메인 메서드는 대응하는 도메인 이벤트를 버퍼에 추가합니다.

use std::fmt;

use crate::domain::entities::entity::{
    impl_entity_identity, AggregateRoot, Entity, EntityId, PendingEvents,
};
use crate::domain::events::{UserCreated, UserEmailChanged};
use crate::domain::value_objects::{Age, Email, Name, ValueObjectError};

/// 사용자 생성/복원에 필요한 원본 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProperties {
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// 사용자 애그리거트 루트
///
/// 두 `User`는 식별자가 같으면 다른 필드와 무관하게 같습니다.
/// 해시 역시 식별자에서만 파생되므로 `HashSet`/`HashMap` 키로 사용할 수 있습니다.
#[derive(Clone)]
pub struct User {
    id: EntityId,
    name: Name,
    age: Age,
    email: Email,
    pending_events: PendingEvents,
}

impl User {
    /// 새 사용자를 생성합니다.
    ///
    /// 이름 → 나이 → 이메일 순서로 검증하고 첫 번째 실패를 반환합니다.
    /// 성공하면 새 식별자를 부여하고 `UserCreated` 이벤트를 버퍼에 추가합니다.
    ///
    /// # Errors
    ///
    /// * `ValueObjectError` - 값 객체 중 하나라도 유효하지 않은 경우
    pub fn create(properties: UserProperties) -> Result<Self, ValueObjectError> {
        let (name, age, email) = Self::validate(&properties)?;

        let mut user = Self {
            id: EntityId::new_identity(),
            name,
            age,
            email,
            pending_events: PendingEvents::default(),
        };

        let UserProperties { name, email, .. } = properties;
        let event = UserCreated::new(user.id, name, email, age.value());
        user.add_domain_event(event.into());

        Ok(user)
    }

    /// 기존 식별자로 사용자를 복원합니다.
    ///
    /// 저장소에서 다시 불러올 때 사용하며, 이벤트는 발생하지 않습니다.
    pub fn restore(id: EntityId, properties: UserProperties) -> Result<Self, ValueObjectError> {
        let (name, age, email) = Self::validate(&properties)?;

        Ok(Self {
            id,
            name,
            age,
            email,
            pending_events: PendingEvents::default(),
        })
    }

    fn validate(properties: &UserProperties) -> Result<(Name, Age, Email), ValueObjectError> {
        let name = Name::new(properties.name.as_str())?;
        let age = Age::new(properties.age)?;
        let email = Email::new(properties.email.as_str())?;

        Ok((name, age, email))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn is_adult(&self) -> bool {
        self.age.is_adult()
    }

    /// 이메일을 변경합니다.
    ///
    /// 새 인스턴스를 반환하지 않고 현재 애그리거트를 직접 수정합니다.
    /// 검증에 실패하면 상태와 버퍼 모두 변경되지 않습니다.
    pub fn change_email(&mut self, new_email: impl Into<String>) -> Result<(), ValueObjectError> {
        let new_email = Email::new(new_email)?;
        let old_email = std::mem::replace(&mut self.email, new_email);

        let event = UserEmailChanged::new(
            self.id,
            old_email.into(),
            self.email.value().to_string(),
        );
        self.add_domain_event(event.into());

        Ok(())
    }

    /// 현재 값으로 구성한 원본 속성
    pub fn properties(&self) -> UserProperties {
        UserProperties {
            name: self.name.value().to_string(),
            age: i64::from(self.age.value()),
            email: self.email.value().to_string(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl AggregateRoot for User {
    fn pending_events(&self) -> &PendingEvents {
        &self.pending_events
    }

    fn pending_events_mut(&mut self) -> &mut PendingEvents {
        &mut self.pending_events
    }
}

impl_entity_identity!(User);

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id.to_hex())
            .field("name", &self.name.value())
            .field("age", &self.age.value())
            .field("email", &self.email.value())
            .field("pending_events", &self.pending_events.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;

    use crate::domain::events::DomainEvent;

    fn props(name: &str, age: i64, email: &str) -> UserProperties {
        UserProperties {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }

    fn jane() -> UserProperties {
        props("Jane Doe", 30, "jane@example.com")
    }

    #[test]
    fn test_create_buffers_single_user_created_event() {
        let before = Utc::now();
        let user = User::create(jane()).unwrap();

        let events = user.domain_events();
        assert_eq!(events.len(), 1);

        match &events[0] {
            DomainEvent::UserCreated(event) => {
                assert_eq!(event.name, "Jane Doe");
                assert_eq!(event.email, "jane@example.com");
                assert_eq!(event.age, 30);
                assert_eq!(&event.metadata.aggregate_id, user.id());
                assert!(event.metadata.occurred_at >= before);
                assert!(event.metadata.occurred_at <= Utc::now());
            }
            other => panic!("Expected UserCreated, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_domain_events_is_idempotent() {
        let mut user = User::create(jane()).unwrap();

        user.clear_domain_events();
        assert!(user.domain_events().is_empty());

        user.clear_domain_events();
        assert!(user.domain_events().is_empty());
    }

    #[test]
    fn test_domain_events_returns_a_copy() {
        let user = User::create(jane()).unwrap();

        let mut snapshot = user.domain_events();
        snapshot.clear();

        assert_eq!(user.domain_events().len(), 1);
    }

    #[test]
    fn test_restore_keeps_identity_and_emits_nothing() {
        let created = User::create(jane()).unwrap();
        let restored = User::restore(*created.id(), props("Other Name", 40, "other@example.com")).unwrap();

        assert_eq!(restored.id(), created.id());
        assert!(restored.domain_events().is_empty());
        assert_eq!(restored.name().value(), "Other Name");
    }

    #[test]
    fn test_validation_order_first_failure_wins() {
        let err = User::create(props("A", 25, "bad-email")).unwrap_err();
        assert_eq!(err, ValueObjectError::NameTooShort { min: 2 });

        let err = User::create(props("Jane", 200, "bad-email")).unwrap_err();
        assert_eq!(err, ValueObjectError::AgeTooHigh { max: 150 });

        let err = User::create(props("Jane", 20, "bad-email")).unwrap_err();
        assert_eq!(err, ValueObjectError::EmailInvalidFormat);
    }

    #[test]
    fn test_is_adult_delegates_to_age() {
        for (age, expected) in [(0, false), (17, false), (18, true), (25, true), (65, true), (100, true)] {
            let user = User::create(props("Test User", age, "test@example.com")).unwrap();
            assert_eq!(user.is_adult(), expected, "age {}", age);
        }
    }

    #[test]
    fn test_equality_is_identity_based() {
        let a = User::create(jane()).unwrap();
        let b = User::create(jane()).unwrap();
        let a_renamed = User::restore(*a.id(), props("Someone Else", 50, "else@example.com")).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a_renamed);
    }

    #[test]
    fn test_users_can_be_used_in_sets() {
        let a = User::create(jane()).unwrap();
        let b = User::create(props("John Doe", 25, "john@example.com")).unwrap();
        let a_again = User::restore(*a.id(), jane()).unwrap();

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(a_again);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_change_email_mutates_in_place_and_buffers_event() {
        let mut user = User::create(jane()).unwrap();
        user.clear_domain_events();

        user.change_email("jane2@example.com").unwrap();

        assert_eq!(user.email().value(), "jane2@example.com");
        let events = user.domain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::UserEmailChanged(event) => {
                assert_eq!(event.old_email, "jane@example.com");
                assert_eq!(event.new_email, "jane2@example.com");
                assert_eq!(&event.metadata.aggregate_id, user.id());
            }
            other => panic!("Expected UserEmailChanged, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_email_change_leaves_user_untouched() {
        let mut user = User::create(jane()).unwrap();

        assert_eq!(user.change_email("nope"), Err(ValueObjectError::EmailInvalidFormat));
        assert_eq!(user.email().value(), "jane@example.com");
        assert_eq!(user.domain_events().len(), 1);
    }

    #[test]
    fn test_events_accumulate_in_order() {
        let mut user = User::create(jane()).unwrap();
        user.change_email("a@example.com").unwrap();
        user.change_email("b@example.com").unwrap();

        let kinds: Vec<_> = user.domain_events().iter().map(DomainEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::domain::events::EventKind::UserCreated,
                crate::domain::events::EventKind::UserEmailChanged,
                crate::domain::events::EventKind::UserEmailChanged,
            ]
        );
    }

    #[test]
    fn test_debug_shows_fields() {
        let user = User::create(jane()).unwrap();
        let repr = format!("{:?}", user);

        assert!(repr.starts_with("User {"));
        assert!(repr.contains("name: \"Jane Doe\""));
        assert!(repr.contains("age: 30"));
        assert!(repr.contains("email: \"jane@example.com\""));
    }
}
