use std::future::Future;

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::domain::{
    auth::{
        entities::{ActionState, User},
        ports::SessionRepository,
    },
    common::entities::app_errors::CoreError,
};

/// Decode and validate a urlencoded form body, then run the action.
///
/// A body that fails to decode or validate comes back as an [`ActionState`]
/// carrying the first message, which is what the form renders inline.
pub async fn validated_action<T, F, Fut>(form_body: &str, action: F) -> ActionState
where
    T: DeserializeOwned + Validate,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = ActionState>,
{
    match decode_form::<T>(form_body) {
        Ok(data) => action(data).await,
        Err(state) => state,
    }
}

/// Like [`validated_action`], but requires a signed-in user and hands it to
/// the action. A missing session is an error for the caller to handle, not
/// an [`ActionState`] for the form.
pub async fn validated_action_with_user<T, F, Fut, S>(
    sessions: &S,
    form_body: &str,
    action: F,
) -> Result<ActionState, CoreError>
where
    T: DeserializeOwned + Validate,
    S: SessionRepository,
    F: FnOnce(T, User) -> Fut,
    Fut: Future<Output = ActionState>,
{
    let user = sessions
        .current_user()
        .await?
        .ok_or(CoreError::NotAuthenticated)?;

    Ok(match decode_form::<T>(form_body) {
        Ok(data) => action(data, user).await,
        Err(state) => state,
    })
}

fn decode_form<T>(form_body: &str) -> Result<T, ActionState>
where
    T: DeserializeOwned + Validate,
{
    let data: T = serde_urlencoded::from_str(form_body)
        .map_err(|err| ActionState::error(err.to_string()))?;

    if let Err(errors) = data.validate() {
        return Err(ActionState::error(first_validation_message(&errors)));
    }

    Ok(data)
}

/// First message out of a validation failure; the form shows one error at a
/// time.
fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .next()
        .unwrap_or_else(|| "invalid input".to_string())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use uuid::Uuid;

    use super::*;
    use crate::domain::auth::ports::MockSessionRepository;

    #[derive(Debug, Deserialize, Validate)]
    struct InviteForm {
        #[validate(email(message = "email must be a valid address"))]
        email: String,
        #[validate(length(min = 2, message = "name must be at least 2 characters"))]
        name: String,
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "cook@example.com".to_string(),
            name: Some("Cook".to_string()),
        }
    }

    #[tokio::test]
    async fn test_validated_action_runs_on_valid_input() {
        let state = validated_action("email=a%40b.com&name=Jo", |form: InviteForm| async move {
            ActionState::success(format!("invited {}", form.email))
        })
        .await;

        assert_eq!(state.success.as_deref(), Some("invited a@b.com"));
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_validated_action_returns_first_validation_message() {
        let state = validated_action(
            "email=a%40b.com&name=J",
            |_form: InviteForm| async move { ActionState::success("unreachable") },
        )
        .await;

        assert_eq!(state.error.as_deref(), Some("name must be at least 2 characters"));
        assert_eq!(state.success, None);
    }

    #[tokio::test]
    async fn test_validated_action_rejects_undecodable_form() {
        let state = validated_action("name=Jo", |_form: InviteForm| async move {
            ActionState::success("unreachable")
        })
        .await;

        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn test_validated_action_with_user_requires_session() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_current_user()
            .returning(|| Box::pin(std::future::ready(Ok(None))));

        let result = validated_action_with_user(
            &sessions,
            "email=a%40b.com&name=Jo",
            |_form: InviteForm, _user| async move { ActionState::success("unreachable") },
        )
        .await;

        assert_eq!(result.unwrap_err(), CoreError::NotAuthenticated);
    }

    #[tokio::test]
    async fn test_validated_action_with_user_passes_the_session_user() {
        let user = sample_user();
        let expected_email = user.email.clone();
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_current_user()
            .returning(move || Box::pin(std::future::ready(Ok(Some(user.clone())))));

        let state = validated_action_with_user(
            &sessions,
            "email=a%40b.com&name=Jo",
            |form: InviteForm, user: User| async move {
                ActionState::success(format!("{} invited {}", user.email, form.email))
            },
        )
        .await
        .unwrap();

        assert_eq!(
            state.success,
            Some(format!("{expected_email} invited a@b.com"))
        );
    }

    #[tokio::test]
    async fn test_validation_runs_after_the_session_check() {
        let user = sample_user();
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_current_user()
            .returning(move || Box::pin(std::future::ready(Ok(Some(user.clone())))));

        let state = validated_action_with_user(
            &sessions,
            "email=not-an-email&name=Jo",
            |_form: InviteForm, _user| async move { ActionState::success("unreachable") },
        )
        .await
        .unwrap();

        assert_eq!(state.error.as_deref(), Some("email must be a valid address"));
    }
}
