//! 사용자 애그리거트가 발행하는 이벤트

use serde::{Deserialize, Serialize};

use super::EventMetadata;
use crate::domain::entities::entity::EntityId;

/// 새 사용자가 생성됨
///
/// 생성 요청에 전달된 원본 값을 그대로 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreated {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub name: String,
    pub email: String,
    pub age: u8,
}

impl UserCreated {
    pub fn new(aggregate_id: EntityId, name: String, email: String, age: u8) -> Self {
        Self {
            metadata: EventMetadata::now(aggregate_id),
            name,
            email,
            age,
        }
    }
}

/// 사용자 이메일이 변경됨
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEmailChanged {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub old_email: String,
    pub new_email: String,
}

impl UserEmailChanged {
    pub fn new(aggregate_id: EntityId, old_email: String, new_email: String) -> Self {
        Self {
            metadata: EventMetadata::now(aggregate_id),
            old_email,
            new_email,
        }
    }
}
