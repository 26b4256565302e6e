//! MongoDB `users` 컬렉션 문서

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::entity::{Entity, EntityId};
use crate::domain::entities::users::{User, UserProperties};
use crate::domain::value_objects::ValueObjectError;

pub const USER_COLLECTION: &str = "users";

/// 사용자 저장 문서
///
/// `{_id: ObjectId, name, age, email}` 형태로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        let UserProperties { name, age, email } = user.properties();

        Self {
            id: user.id().object_id(),
            name,
            age,
            email,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = ValueObjectError;

    /// 저장된 문서에서 사용자를 복원합니다. 이벤트는 발생하지 않습니다.
    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        User::restore(
            EntityId::from(document.id),
            UserProperties {
                name: document.name,
                age: document.age,
                email: document.email,
            },
        )
    }
}
