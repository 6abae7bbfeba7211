use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{
    common::{GatewayConfig, entities::app_errors::CoreError},
    profile::{
        entities::NutritionProfile,
        ports::{ProfileFetch, ProfileGateway},
    },
    recipe::{
        entities::{Recipe, RecipeGenerationRequest},
        ports::{RecipeGenerator, RecipeStore},
    },
};

const GENERATION_FALLBACK_ERROR: &str = "Failed to generate recipe";

/// HTTP client for the recipe backend's profile, generate and save
/// endpoints.
#[derive(Debug, Clone)]
pub struct HttpRecipeGateway {
    base_url: String,
    bearer_token: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateRecipeResponse {
    recipe: Recipe,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveRecipeBody {
    recipe_id: i64,
}

impl HttpRecipeGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token,
            client: Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Pull the caller-facing message out of a non-2xx response, falling
    /// back to a generic one when the body carries no `error` field.
    async fn error_message(response: reqwest::Response) -> String {
        response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| GENERATION_FALLBACK_ERROR.to_string())
    }
}

impl ProfileGateway for HttpRecipeGateway {
    async fn fetch_profile(&self) -> Result<ProfileFetch, CoreError> {
        let response = self
            .request(Method::GET, "/api/nutrition/profile")
            .send()
            .await
            .map_err(|e| {
                error!("profile request failed: {e}");
                CoreError::ExternalServiceError(format!("profile request failed: {e}"))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            Ok(ProfileFetch::Missing)
        } else if status == StatusCode::UNAUTHORIZED {
            Ok(ProfileFetch::Unauthorized)
        } else if status.is_success() {
            let profile = response.json::<NutritionProfile>().await.map_err(|e| {
                error!("failed to parse nutrition profile: {e}");
                CoreError::ExternalServiceError(format!("failed to parse nutrition profile: {e}"))
            })?;
            Ok(ProfileFetch::Found(profile))
        } else {
            error!("profile endpoint returned {status}");
            Err(CoreError::ExternalServiceError(format!(
                "profile endpoint returned {status}"
            )))
        }
    }
}

impl RecipeGenerator for HttpRecipeGateway {
    async fn generate(&self, request: RecipeGenerationRequest) -> Result<Recipe, CoreError> {
        let response = self
            .request(Method::POST, "/api/recipes/generate")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("generation request failed: {e}");
                CoreError::ExternalServiceError(format!("{GENERATION_FALLBACK_ERROR}: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = Self::error_message(response).await;
            error!("generation endpoint returned {status}: {message}");
            return Err(CoreError::ExternalServiceError(message));
        }

        let body: GenerateRecipeResponse = response.json().await.map_err(|e| {
            error!("failed to parse generated recipe: {e}");
            CoreError::ExternalServiceError(format!("{GENERATION_FALLBACK_ERROR}: {e}"))
        })?;

        Ok(body.recipe)
    }
}

impl RecipeStore for HttpRecipeGateway {
    async fn save(&self, recipe_id: i64) -> Result<(), CoreError> {
        let response = self
            .request(Method::POST, "/api/recipes/save")
            .json(&SaveRecipeBody { recipe_id })
            .send()
            .await
            .map_err(|e| {
                error!("save request failed: {e}");
                CoreError::ExternalServiceError(format!("save request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("save endpoint returned {status} for recipe {recipe_id}");
            return Err(CoreError::ExternalServiceError(format!(
                "save endpoint returned {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::GatewayConfig;

    #[test]
    fn test_generate_response_wire_format() {
        let body: GenerateRecipeResponse = serde_json::from_str(
            r#"{
                "recipe": {
                    "id": 42,
                    "title": "Miso Glazed Salmon",
                    "ingredients": ["salmon", "miso"],
                    "instructions": ["Glaze.", "Bake."],
                    "prepTimeMinutes": 10,
                    "cookTimeMinutes": 15,
                    "servings": 2,
                    "isSaved": false
                }
            }"#,
        )
        .unwrap();

        assert_eq!(body.recipe.id, 42);
        assert!(!body.recipe.is_saved);
        assert_eq!(body.recipe.cook_time_minutes, Some(15));
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "model unavailable"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("model unavailable"));

        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
    }

    #[test]
    fn test_save_body_uses_camel_case() {
        let body = serde_json::to_string(&SaveRecipeBody { recipe_id: 42 }).unwrap();
        assert_eq!(body, r#"{"recipeId":42}"#);
    }

    #[test]
    fn test_nutrition_profile_wire_format() {
        let profile: NutritionProfile = serde_json::from_str(
            r#"{
                "id": "0191d8a0-5f2b-7cc3-a8de-6f1b24c0ffee",
                "dailyCalories": 2200,
                "proteinGrams": 140,
                "carbGrams": null,
                "fatGrams": null,
                "dietaryRestrictions": ["vegetarian"],
                "allergies": []
            }"#,
        )
        .unwrap();

        assert_eq!(profile.daily_calories, Some(2200));
        assert_eq!(profile.dietary_restrictions, vec!["vegetarian"]);
        assert_eq!(profile.updated_at, None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let gateway = HttpRecipeGateway::new(GatewayConfig {
            base_url: "https://recipes.example.com/".to_string(),
            bearer_token: None,
        });
        assert_eq!(gateway.base_url, "https://recipes.example.com");
    }
}
