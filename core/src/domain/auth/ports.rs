use std::future::Future;

use crate::domain::{auth::entities::User, common::entities::app_errors::CoreError};

/// Lookup of the current session's user
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn current_user(&self) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
