//! Onboarding wizard: step data, state machine, terminal submit, routes.

pub mod manager;
pub mod model;
pub mod routes;
pub mod selector;
pub mod wizard;

pub use manager::{NextAction, OnboardingManager, OnboardingStatus};
pub use model::{CompanyProfile, Field, FieldKind, WizardStep, wizard_steps};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use selector::{SelectionPolicy, StepSelector};
pub use wizard::{NextOutcome, WizardState};
