//! Email templates for the live demo and `{placeholder}` resolution.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Matches `{key}` placeholder tokens.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid token regex"));

/// A demo email template: subject and body text carrying `{key}` tokens,
/// plus the literal values to substitute for them.
///
/// Templates are immutable; the demo cycles through a fixed list by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
    pub variables: BTreeMap<String, String>,
}

impl EmailTemplate {
    /// Subject with all known `{key}` tokens substituted.
    pub fn resolved_subject(&self) -> String {
        resolve(&self.subject, &self.variables)
    }

    /// Body with all known `{key}` tokens substituted.
    pub fn resolved_body(&self) -> String {
        resolve(&self.body, &self.variables)
    }

    /// Fully resolved template in the exportable clipboard format.
    pub fn export_text(&self) -> String {
        format!(
            "Subject: {}\n\n{}",
            self.resolved_subject(),
            self.resolved_body()
        )
    }
}

/// Replace every `{key}` occurrence whose key is present in `variables` with
/// its literal value. Tokens without a mapping stay verbatim; that mirrors
/// the product behavior, not an oversight to "fix" here.
pub fn resolve(text: &str, variables: &BTreeMap<String, String>) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures<'_>| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The fixed, ordered list of demo templates shown on the landing page.
pub fn builtin_templates() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            subject: "Quick question about {company}'s growth strategy".to_string(),
            body: "Hi {name},\n\nI noticed {company} recently expanded into {market} – congrats on that move! \n\nGiven your focus on {focus}, I thought you'd be interested in how companies like yours are using AI to 10x their outreach efficiency.\n\nWe helped {similar_company} increase their reply rates by 340% in just 3 weeks.\n\nWorth a quick 15-min chat?\n\nBest,\nAlex".to_string(),
            variables: vars(&[
                ("company", "TechFlow"),
                ("name", "Sarah"),
                ("market", "enterprise sales"),
                ("focus", "scaling B2B outreach"),
                ("similar_company", "SalesForce Pro"),
            ]),
        },
        EmailTemplate {
            subject: "Saw your LinkedIn post about {topic}".to_string(),
            body: "Hi {name},\n\nYour recent post about {topic} really resonated with me – especially the part about {insight}.\n\nAt {our_company}, we're helping leaders like you automate the tedious parts of prospecting while keeping the human touch that makes outreach effective.\n\n{mutual_connection} suggested I reach out. Would you be open to exploring how we could help {company} hit their Q1 targets faster?\n\nCheers,\nJordan".to_string(),
            variables: vars(&[
                ("name", "Michael"),
                ("topic", "sales automation challenges"),
                ("insight", "balancing personalization with scale"),
                ("our_company", "PitchAI"),
                ("mutual_connection", "David Chen"),
                ("company", "GrowthLabs"),
            ]),
        },
        EmailTemplate {
            subject: "Idea for {company}'s outbound strategy".to_string(),
            body: "Hey {name},\n\nI was researching {industry} leaders and {company} stood out – particularly your work on {achievement}.\n\nQuick question: How are you currently handling cold email personalization at scale?\n\nWe've built something that might interest you – AI that reads prospect websites and LinkedIn to craft emails that feel hand-written.\n\n{reference_client} saw a 5x increase in meetings booked. Happy to share the playbook if useful.\n\nTalk soon,\nChris".to_string(),
            variables: vars(&[
                ("name", "Emma"),
                ("company", "NexGen Solutions"),
                ("industry", "B2B SaaS"),
                ("achievement", "the new product launch"),
                ("reference_client", "Acme Corp"),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_replaces_all_occurrences() {
        let variables = vars(&[("name", "Sarah"), ("company", "TechFlow")]);
        let out = resolve("{name} at {company}. Bye {name}!", &variables);
        assert_eq!(out, "Sarah at TechFlow. Bye Sarah!");
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let variables = vars(&[("name", "Sarah")]);
        let out = resolve("Hi {name}, re: {unknown_key}", &variables);
        assert_eq!(out, "Hi Sarah, re: {unknown_key}");
    }

    #[test]
    fn resolve_is_idempotent_on_resolved_text() {
        let variables = vars(&[("name", "Sarah"), ("company", "TechFlow")]);
        let once = resolve("Quick question about {company}, {name}", &variables);
        let twice = resolve(&once, &variables);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_variable_map_leaves_text_untouched() {
        let text = "Hi {name}, {company} looks great";
        assert_eq!(resolve(text, &BTreeMap::new()), text);
    }

    #[test]
    fn export_format() {
        let template = EmailTemplate {
            subject: "Hi {name}".to_string(),
            body: "Hello".to_string(),
            variables: vars(&[("name", "Sarah")]),
        };
        assert_eq!(template.export_text(), "Subject: Hi Sarah\n\nHello");
    }

    #[test]
    fn builtin_templates_resolve_cleanly() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 3);
        for template in &templates {
            let subject = template.resolved_subject();
            let body = template.resolved_body();
            for key in template.variables.keys() {
                let token = format!("{{{key}}}");
                assert!(!subject.contains(&token), "unresolved {token} in subject");
                assert!(!body.contains(&token), "unresolved {token} in body");
            }
        }
    }

    #[test]
    fn first_builtin_resolves_known_values() {
        let templates = builtin_templates();
        let subject = templates[0].resolved_subject();
        assert_eq!(subject, "Quick question about TechFlow's growth strategy");
        let body = templates[0].resolved_body();
        assert!(body.starts_with("Hi Sarah,"));
        assert!(body.contains("SalesForce Pro"));
    }
}
