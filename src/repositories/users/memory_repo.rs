//! # 메모리 사용자 리포지토리
//!
//! 프로세스 메모리의 `HashMap`에 문서를 보관하는 구현체입니다.
//! 테스트와 로컬 개발(`REPOSITORY_BACKEND=memory`)에서 사용합니다.
//! 재시작하면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{restore_document, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::entity::EntityId;
use crate::domain::entities::users::User;
use crate::domain::models::UserDocument;

#[derive(Default)]
pub struct InMemoryUserRepository {
    documents: RwLock<HashMap<EntityId, UserDocument>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 문서 수. 락이 오염되어도 남아 있는 맵을 그대로 셉니다.
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::PersistenceError("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    fn name(&self) -> &str {
        "InMemoryUserRepository"
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<User>> {
        let document = self.documents.read().map_err(poisoned)?.get(id).cloned();

        document.map(restore_document).transpose()
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let document = UserDocument::from(user);
        let id = EntityId::from(document.id);

        self.documents
            .write()
            .map_err(poisoned)?
            .insert(id, document.clone());

        restore_document(document)
    }

    async fn update(&self, id: &EntityId, user: &User) -> AppResult<Option<User>> {
        let mut document = UserDocument::from(user);
        document.id = id.object_id();

        {
            let mut documents = self.documents.write().map_err(poisoned)?;
            match documents.get_mut(id) {
                Some(stored) => *stored = document.clone(),
                None => return Ok(None),
            }
        }

        restore_document(document).map(Some)
    }

    async fn delete(&self, id: &EntityId) -> AppResult<()> {
        self.documents.write().map_err(poisoned)?.remove(id);
        Ok(())
    }
}
