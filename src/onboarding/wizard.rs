//! Onboarding wizard state machine.
//!
//! Linear, no branching, no skipping: `1..=N` over the fixed step list.
//! Answers accumulate across steps and survive back-navigation; a step is
//! valid iff every field it declares has a trimmed non-empty answer.

use std::collections::HashMap;

use crate::error::OnboardingError;

use super::model::{CompanyProfile, WizardStep, wizard_steps};
use super::selector::{SelectionPolicy, StepSelector};

/// What `next()` decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// Current step invalid or a submission is in flight; nothing changed.
    Blocked,
    /// Moved forward to the given step.
    Advanced(u32),
    /// On the last step with validity holding: the terminal submit should run.
    SubmitRequested,
}

/// Wizard state: active step, accumulated answers, submit guard.
#[derive(Debug, Clone)]
pub struct WizardState {
    steps: Vec<WizardStep>,
    selector: StepSelector,
    answers: HashMap<String, String>,
    submitting: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::with_steps(wizard_steps())
    }

    pub fn with_steps(steps: Vec<WizardStep>) -> Self {
        let selector = StepSelector::new(steps.len() as u32, SelectionPolicy::ValidatedLinear);
        Self {
            steps,
            selector,
            answers: HashMap::new(),
            submitting: false,
        }
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn current_step_id(&self) -> u32 {
        self.selector.current()
    }

    pub fn step_count(&self) -> u32 {
        self.selector.count()
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.steps[(self.selector.current() - 1) as usize]
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Store an answer for a field declared by the step currently shown.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), OnboardingError> {
        if !self.current_step().fields.iter().any(|f| f.name == name) {
            return Err(OnboardingError::UnknownField {
                name: name.to_string(),
            });
        }
        self.answers.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// True iff every declared field of the current step has a trimmed
    /// non-empty answer.
    pub fn is_current_step_valid(&self) -> bool {
        self.current_step().fields.iter().all(|field| {
            self.answers
                .get(&field.name)
                .is_some_and(|v| !v.trim().is_empty())
        })
    }

    /// Forward navigation. Never advances past the last step; there it
    /// requests the terminal submit instead.
    pub fn next(&mut self) -> NextOutcome {
        if self.submitting || !self.is_current_step_valid() {
            return NextOutcome::Blocked;
        }
        if self.selector.is_last() {
            return NextOutcome::SubmitRequested;
        }
        match self.selector.advance() {
            Some(id) => NextOutcome::Advanced(id),
            None => NextOutcome::Blocked,
        }
    }

    /// Backward navigation. Does not re-validate the step being left and
    /// never clears answers.
    pub fn back(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.selector.retreat().is_some()
    }

    /// Raise the re-entrant submission guard.
    pub fn begin_submit(&mut self) -> Result<(), OnboardingError> {
        if self.submitting {
            return Err(OnboardingError::SubmissionInFlight);
        }
        self.submitting = true;
        Ok(())
    }

    /// Clear the submission guard (success or failure alike).
    pub fn end_submit(&mut self) {
        self.submitting = false;
    }

    /// The profile assembled from accumulated answers.
    pub fn profile(&self) -> CompanyProfile {
        CompanyProfile::from_answers(&self.answers)
    }
}
