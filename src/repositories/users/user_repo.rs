//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 [`UserDocument`]를 저장하는 구현체입니다.
//!
//! ## 특징
//!
//! - **문서 매핑**: 애그리거트 ↔ `{_id, name, age, email}` 변환은 `UserDocument`가 담당
//! - **복원 검증**: 읽어온 문서는 `User::restore`를 거쳐 다시 검증됨
//! - **재시도 없음**: 드라이버 에러는 그대로 `PersistenceError`로 보고

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use mongodb::Collection;
use mongodb::bson::doc;

use super::{restore_document, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::entity::EntityId;
use crate::domain::entities::users::User;
use crate::domain::models::{UserDocument, USER_COLLECTION};

/// 사용자 문서 저장소
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            collection: db.get_database().collection::<UserDocument>(USER_COLLECTION),
        }
    }

    pub fn collection_name(&self) -> &str {
        USER_COLLECTION
    }
}

fn persistence_error(operation: &str, error: mongodb::error::Error) -> AppError {
    AppError::PersistenceError(format!("{} failed: {}", operation, error))
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn name(&self) -> &str {
        "MongoUserRepository"
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<User>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.object_id() })
            .await
            .map_err(|e| persistence_error("find_one", e))?;

        document.map(restore_document).transpose()
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let document = UserDocument::from(user);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| persistence_error("insert_one", e))?;

        debug!("📝 Inserted user document {}", result.inserted_id);

        restore_document(document)
    }

    async fn update(&self, id: &EntityId, user: &User) -> AppResult<Option<User>> {
        let mut document = UserDocument::from(user);
        document.id = id.object_id();

        let result = self
            .collection
            .replace_one(doc! { "_id": id.object_id() }, &document)
            .await
            .map_err(|e| persistence_error("replace_one", e))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        restore_document(document).map(Some)
    }

    async fn delete(&self, id: &EntityId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await
            .map_err(|e| persistence_error("delete_one", e))?;

        if result.deleted_count == 0 {
            warn!("⚠️ delete_one matched no document for {}", id);
        }

        Ok(())
    }
}
