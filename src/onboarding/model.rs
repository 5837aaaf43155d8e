//! Wizard step definitions and the company profile they produce.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

/// A required field on one wizard step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: String,
}

impl Field {
    fn new(name: &str, label: &str, kind: FieldKind, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            placeholder: placeholder.to_string(),
        }
    }
}

/// One page of the onboarding wizard. Ids are 1-based and match position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub fields: Vec<Field>,
}

/// The fixed onboarding steps.
pub fn wizard_steps() -> Vec<WizardStep> {
    vec![
        WizardStep {
            id: 1,
            title: "Company Basics".to_string(),
            description: "Tell us about your company".to_string(),
            fields: vec![
                Field::new("companyName", "Company Name", FieldKind::SingleLine, "Acme Inc."),
                Field::new("websiteUrl", "Website URL", FieldKind::SingleLine, "https://acme.com"),
            ],
        },
        WizardStep {
            id: 2,
            title: "Products & Services".to_string(),
            description: "What do you offer?".to_string(),
            fields: vec![
                Field::new(
                    "products",
                    "Products / Services",
                    FieldKind::MultiLine,
                    "Describe your main products or services...",
                ),
                Field::new(
                    "items",
                    "Specific Items Offered",
                    FieldKind::MultiLine,
                    "List specific items, plans, or packages you want to pitch...",
                ),
            ],
        },
        WizardStep {
            id: 3,
            title: "Target Audience".to_string(),
            description: "Who are you reaching?".to_string(),
            fields: vec![
                Field::new(
                    "targetAudience",
                    "Target Audience",
                    FieldKind::MultiLine,
                    "E.g., SaaS companies with 50-500 employees, B2B marketers...",
                ),
                Field::new(
                    "icpDescription",
                    "Ideal Customer Profile (ICP)",
                    FieldKind::MultiLine,
                    "Describe your ideal customer in detail...",
                ),
            ],
        },
        WizardStep {
            id: 4,
            title: "Value & Goals".to_string(),
            description: "Your unique value and outreach goals".to_string(),
            fields: vec![
                Field::new(
                    "valueProposition",
                    "Value Proposition",
                    FieldKind::MultiLine,
                    "What makes your offering unique? What problem do you solve?",
                ),
                Field::new(
                    "outreachGoal",
                    "Outreach Goal",
                    FieldKind::MultiLine,
                    "E.g., Book demo calls, start free trials, close deals...",
                ),
            ],
        },
    ]
}

/// Company profile collected by the wizard.
///
/// Stored in the settings store as JSON under key `"company_profile"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub website_url: String,
    pub products: String,
    pub items: String,
    pub target_audience: String,
    pub icp_description: String,
    pub value_proposition: String,
    pub outreach_goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl CompanyProfile {
    /// Build a profile from the wizard's accumulated answers. Missing
    /// answers become empty strings; validation happens before submit.
    pub fn from_answers(answers: &HashMap<String, String>) -> Self {
        let field = |name: &str| answers.get(name).cloned().unwrap_or_default();
        Self {
            company_name: field("companyName"),
            website_url: field("websiteUrl"),
            products: field("products"),
            items: field("items"),
            target_audience: field("targetAudience"),
            icp_description: field("icpDescription"),
            value_proposition: field("valueProposition"),
            outreach_goal: field("outreachGoal"),
            completed_at: None,
        }
    }
}

/// Settings keys used for onboarding persistence.
pub mod settings_keys {
    /// Key for the CompanyProfile JSON blob.
    pub const COMPANY_PROFILE: &str = "company_profile";
    /// Key for the onboarding-complete flag, deleted on logout.
    pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";
    /// Default user ID (single-user deployment).
    pub const DEFAULT_USER: &str = "default";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ids_match_position() {
        let steps = wizard_steps();
        assert_eq!(steps.len(), 4);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.id as usize, i + 1);
            assert_eq!(step.fields.len(), 2);
        }
    }

    #[test]
    fn first_step_is_single_line_only() {
        let steps = wizard_steps();
        assert!(steps[0].fields.iter().all(|f| f.kind == FieldKind::SingleLine));
        assert!(steps[1..]
            .iter()
            .flat_map(|s| &s.fields)
            .all(|f| f.kind == FieldKind::MultiLine));
    }

    #[test]
    fn profile_from_answers_maps_all_fields() {
        let mut answers = HashMap::new();
        answers.insert("companyName".to_string(), "Acme".to_string());
        answers.insert("websiteUrl".to_string(), "https://acme.com".to_string());
        answers.insert("outreachGoal".to_string(), "book demos".to_string());

        let profile = CompanyProfile::from_answers(&answers);
        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.website_url, "https://acme.com");
        assert_eq!(profile.outreach_goal, "book demos");
        assert!(profile.products.is_empty());
        assert!(profile.completed_at.is_none());
    }

    #[test]
    fn profile_serde_roundtrip() {
        let profile = CompanyProfile {
            company_name: "Acme".to_string(),
            website_url: "https://acme.com".to_string(),
            products: "Widgets".to_string(),
            items: "Starter plan".to_string(),
            target_audience: "B2B SaaS".to_string(),
            icp_description: "Mid-market ops leads".to_string(),
            value_proposition: "Faster outreach".to_string(),
            outreach_goal: "Demo calls".to_string(),
            completed_at: Some(Utc::now()),
        };

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: CompanyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.company_name, "Acme");
        assert_eq!(parsed.icp_description, "Mid-market ops leads");
        assert!(parsed.completed_at.is_some());
    }

    #[test]
    fn field_kind_serde() {
        let single: FieldKind = serde_json::from_str("\"single_line\"").unwrap();
        assert_eq!(single, FieldKind::SingleLine);
        let multi: FieldKind = serde_json::from_str("\"multi_line\"").unwrap();
        assert_eq!(multi, FieldKind::MultiLine);
    }
}
