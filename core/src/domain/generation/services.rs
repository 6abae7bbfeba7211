use tokio::sync::watch;
use tracing::{error, info};

use crate::domain::{
    common::generate_uuid_v7,
    generation::{
        entities::{GenerationStage, STAGE_PLAN, WorkflowPhase},
        value_objects::{Navigation, WorkflowView},
    },
    profile::{
        entities::NutritionProfile,
        ports::{ProfileFetch, ProfileGateway},
    },
    recipe::{
        entities::{Recipe, RecipeGenerationRequest},
        ports::{RecipeGenerator, RecipeStore},
    },
};

/// Drives one page worth of recipe generation: profile loading, attempts
/// with simulated progress, save and reset actions.
///
/// All state lives here and changes only through these methods. `&mut self`
/// on [`GenerationWorkflow::generate`] keeps at most one attempt in flight,
/// and dropping the returned future aborts both the stage timers and the
/// in-flight request; nothing runs detached.
pub struct GenerationWorkflow<P, G, S> {
    profiles: P,
    generator: G,
    store: S,
    phase: WorkflowPhase,
    profile: Option<NutritionProfile>,
    last_request: Option<RecipeGenerationRequest>,
    stages: watch::Sender<GenerationStage>,
}

impl<P, G, S> GenerationWorkflow<P, G, S>
where
    P: ProfileGateway,
    G: RecipeGenerator,
    S: RecipeStore,
{
    pub fn new(profiles: P, generator: G, store: S) -> Self {
        let (stages, _) = watch::channel(GenerationStage::Initializing);

        Self {
            profiles,
            generator,
            store,
            phase: WorkflowPhase::LoadingProfile,
            profile: None,
            last_request: None,
            stages,
        }
    }

    /// Fetch the nutrition profile, once, when the workflow starts.
    ///
    /// A missing profile is an ordinary outcome; the form just asks the user
    /// to set one up first. An expired session hands back
    /// [`Navigation::Login`] and leaves the loading phase in place, since the
    /// page is being abandoned. Any other failure is logged and the workflow
    /// proceeds without a profile.
    pub async fn load_profile(&mut self) -> Option<Navigation> {
        self.phase = WorkflowPhase::LoadingProfile;

        match self.profiles.fetch_profile().await {
            Ok(ProfileFetch::Found(profile)) => self.profile = Some(profile),
            Ok(ProfileFetch::Missing) => {}
            Ok(ProfileFetch::Unauthorized) => return Some(Navigation::Login),
            Err(err) => error!("failed to load nutrition profile: {err}"),
        }

        self.phase = WorkflowPhase::Idle;
        None
    }

    /// Run one generation attempt to completion.
    ///
    /// The staged progress feed and the real call run concurrently and both
    /// must finish before the outcome is applied, so the UI never reports a
    /// result faster than the progress animation even on an instant network.
    pub async fn generate(&mut self, request: RecipeGenerationRequest) {
        let attempt_id = generate_uuid_v7();

        // Entering Generating discards any previous recipe or error.
        self.phase = WorkflowPhase::Generating;
        self.last_request = Some(request.clone());
        self.stages.send_replace(GenerationStage::Initializing);

        info!(%attempt_id, "starting recipe generation attempt");

        let call = self.generator.generate(request);
        let (outcome, ()) = tokio::join!(call, run_stage_plan(&self.stages));

        self.phase = match outcome {
            Ok(recipe) => {
                info!(%attempt_id, recipe_id = recipe.id, "recipe generated");
                WorkflowPhase::Succeeded { recipe }
            }
            Err(err) => {
                error!(%attempt_id, "recipe generation failed: {err}");
                WorkflowPhase::Failed {
                    error: err.to_string(),
                }
            }
        };
        self.stages.send_replace(GenerationStage::Initializing);
    }

    /// Re-run the previous attempt with the identical request. No-op when
    /// nothing has been submitted yet.
    pub async fn regenerate(&mut self) {
        if let Some(request) = self.last_request.clone() {
            self.generate(request).await;
        }
    }

    /// Persist the generated recipe. Only a confirmed save flips the local
    /// flag, and only on the recipe currently displayed; failures are logged
    /// and intentionally not surfaced to the user.
    pub async fn save(&mut self, recipe_id: i64) {
        match self.store.save(recipe_id).await {
            Ok(()) => {
                if let WorkflowPhase::Succeeded { recipe } = &mut self.phase
                    && recipe.id == recipe_id
                {
                    recipe.is_saved = true;
                }
            }
            Err(err) => error!("failed to save recipe {recipe_id}: {err}"),
        }
    }

    /// Discard any outcome and the retained request, returning to the form.
    pub fn start_over(&mut self) {
        self.phase = WorkflowPhase::Idle;
        self.last_request = None;
    }

    pub fn phase(&self) -> &WorkflowPhase {
        &self.phase
    }

    pub fn profile(&self) -> Option<&NutritionProfile> {
        self.profile.as_ref()
    }

    pub fn last_request(&self) -> Option<&RecipeGenerationRequest> {
        self.last_request.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.phase {
            WorkflowPhase::Succeeded { recipe } => Some(recipe),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            WorkflowPhase::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn current_stage(&self) -> GenerationStage {
        *self.stages.borrow()
    }

    /// Live feed of the simulated progress labels, for a UI rendering from
    /// another task while an attempt runs.
    pub fn subscribe_stages(&self) -> watch::Receiver<GenerationStage> {
        self.stages.subscribe()
    }

    /// Pick the single panel to render: loading over progress over error
    /// over result over form. The phase encodes the precedence directly.
    pub fn view(&self) -> WorkflowView<'_> {
        match &self.phase {
            WorkflowPhase::LoadingProfile => WorkflowView::LoadingSpinner,
            WorkflowPhase::Generating => WorkflowView::ProgressIndicator {
                stage: self.current_stage(),
            },
            WorkflowPhase::Failed { error } => WorkflowView::ErrorPanel { message: error },
            WorkflowPhase::Succeeded { recipe } => WorkflowView::RecipeResult { recipe },
            WorkflowPhase::Idle => WorkflowView::InputForm {
                has_nutrition_profile: self.profile.is_some(),
            },
        }
    }
}

/// Advance the perceived-progress labels on their fixed timetable. The real
/// request pays no attention to this; it exists so the join in
/// [`GenerationWorkflow::generate`] never settles before the animation does.
pub async fn run_stage_plan(stages: &watch::Sender<GenerationStage>) {
    for (stage, delay) in STAGE_PLAN {
        stages.send_replace(stage);
        tokio::time::sleep(delay).await;
    }
}
