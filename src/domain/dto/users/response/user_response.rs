use serde::{Deserialize, Serialize};

use crate::domain::entities::entity::Entity;
use crate::domain::entities::users::User;

/// 사용자 조회/생성/수정 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub email: String,
    pub is_adult: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_hex(),
            name: user.name().value().to_string(),
            age: user.age().value(),
            email: user.email().value().to_string(),
            is_adult: user.is_adult(),
        }
    }
}
