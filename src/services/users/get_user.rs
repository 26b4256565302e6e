//! 사용자 조회 유스케이스

use std::sync::Arc;

use super::{parse_user_id, user_not_found};
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: String,
}

/// 유일한 멱등 조회 유스케이스. 디스패처가 필요 없습니다.
pub struct GetUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// # Errors
    ///
    /// * `ValidationError` - ID 형식 오류
    /// * `NotFound` - 사용자가 없는 경우
    pub async fn execute(&self, query: GetUserQuery) -> AppResult<User> {
        let id = parse_user_id(&query.user_id)?;

        self
            .user_repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| user_not_found(&id))
    }
}
