use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, profile::entities::NutritionProfile,
};

/// Outcome of a profile fetch. A missing profile and an expired session are
/// ordinary outcomes the workflow reacts to, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetch {
    Found(NutritionProfile),
    Missing,
    Unauthorized,
}

/// Gateway to the nutrition profile endpoint
#[cfg_attr(test, mockall::automock)]
pub trait ProfileGateway: Send + Sync {
    fn fetch_profile(&self) -> impl Future<Output = Result<ProfileFetch, CoreError>> + Send;
}
