//! Static site content: landing page sections and the dashboard shell.
//!
//! Everything here is presentational data; the only behavior is the
//! how-it-works panel selection, a random-access [`StepSelector`].

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::onboarding::{SelectionPolicy, StepSelector};

/// Hero section copy.
#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub subtext: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

/// One benefit card with its headline stat.
#[derive(Debug, Clone, Serialize)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
    pub stat_label: &'static str,
}

/// One step of the how-it-works panel.
#[derive(Debug, Clone, Serialize)]
pub struct HowItWorksStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

/// One node of the personalization-engine diagram.
#[derive(Debug, Clone, Serialize)]
pub struct EngineNode {
    pub title: &'static str,
    pub description: &'static str,
}

/// A footer link column.
#[derive(Debug, Clone, Serialize)]
pub struct FooterGroup {
    pub heading: &'static str,
    pub links: Vec<&'static str>,
}

/// A dashboard stat placeholder. Values stay zero until a real pipeline
/// exists to count anything.
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn hero() -> Hero {
    Hero {
        badge: "AI-Powered Email Generation",
        headline: "Hyper-Personalized Cold Email Generator",
        subtext: "Upload your leads, let AI scrape company context and LinkedIn insights, \
                  then generate winning cold email pitches that actually convert.",
        primary_cta: "Get Started Free",
        secondary_cta: "Watch Demo",
    }
}

pub fn benefits() -> Vec<Benefit> {
    vec![
        Benefit {
            title: "Increase Reply Rates",
            description: "Our AI-crafted emails see 3-5x higher response rates compared to generic templates.",
            stat: "340%",
            stat_label: "avg. increase",
        },
        Benefit {
            title: "Save Hours Daily",
            description: "Automate the research and writing process. What took hours now takes seconds.",
            stat: "10x",
            stat_label: "faster",
        },
        Benefit {
            title: "Hyper-Personalization",
            description: "Every email feels hand-crafted with prospect-specific insights and context.",
            stat: "100%",
            stat_label: "personalized",
        },
        Benefit {
            title: "Scale Your Outreach",
            description: "Send personalized emails to hundreds of prospects without sacrificing quality.",
            stat: "100+",
            stat_label: "emails/batch",
        },
    ]
}

pub fn how_it_works_steps() -> Vec<HowItWorksStep> {
    vec![
        HowItWorksStep {
            id: 1,
            title: "Upload Your Leads",
            description: "Simply upload a CSV file with your prospect list. We support up to 100 rows per batch for optimal AI processing quality.",
        },
        HowItWorksStep {
            id: 2,
            title: "AI Context Scraping",
            description: "Our AI analyzes company websites and LinkedIn profiles to understand business context, pain points, and decision-maker roles.",
        },
        HowItWorksStep {
            id: 3,
            title: "Generate Personalized Pitches",
            description: "Using advanced language models, we craft hyper-personalized cold emails tailored to each prospect's unique situation.",
        },
        HowItWorksStep {
            id: 4,
            title: "Export & Send",
            description: "Download your polished emails and import them into your favorite email platform. Start getting replies instantly.",
        },
    ]
}

pub fn engine_nodes() -> Vec<EngineNode> {
    vec![
        EngineNode {
            title: "Company Signals",
            description: "Website & public business context",
        },
        EngineNode {
            title: "Prospect Context",
            description: "Role, seniority & relevance",
        },
        EngineNode {
            title: "Offer Alignment",
            description: "Matches offer to prospect pain points",
        },
    ]
}

pub fn footer_groups() -> Vec<FooterGroup> {
    vec![
        FooterGroup {
            heading: "Product",
            links: vec!["Features", "How It Works", "Pricing", "Demo"],
        },
        FooterGroup {
            heading: "Company",
            links: vec!["About", "Blog", "Careers", "Contact"],
        },
        FooterGroup {
            heading: "Legal",
            links: vec!["Privacy", "Terms", "Security"],
        },
    ]
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Emails Generated", value: "0" },
        StatCard { label: "Leads Processed", value: "0" },
        StatCard { label: "Avg. Reply Rate", value: "0%" },
        StatCard { label: "Time Saved", value: "0h" },
    ]
}

/// The assembled landing page.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub hero: Hero,
    pub benefits: Vec<Benefit>,
    pub how_it_works: Vec<HowItWorksStep>,
    pub engine_nodes: Vec<EngineNode>,
    pub footer: Vec<FooterGroup>,
}

pub fn landing_page() -> LandingPage {
    LandingPage {
        hero: hero(),
        benefits: benefits(),
        how_it_works: how_it_works_steps(),
        engine_nodes: engine_nodes(),
        footer: footer_groups(),
    }
}

/// How-it-works panel selection: any step directly selectable, exactly one
/// active at a time, the first by default. Display-only; no validation and
/// no terminal action.
#[derive(Debug, Clone)]
pub struct SectionDisplay {
    steps: Vec<HowItWorksStep>,
    selector: StepSelector,
}

impl Default for SectionDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionDisplay {
    pub fn new() -> Self {
        let steps = how_it_works_steps();
        let selector = StepSelector::new(steps.len() as u32, SelectionPolicy::RandomAccess);
        Self { steps, selector }
    }

    pub fn steps(&self) -> &[HowItWorksStep] {
        &self.steps
    }

    /// Select a step for display. Out-of-range ids are rejected.
    pub fn select(&mut self, id: u32) -> Result<u32, String> {
        self.selector.select(id)
    }

    /// The step currently shown.
    pub fn active(&self) -> &HowItWorksStep {
        &self.steps[(self.selector.current() - 1) as usize]
    }
}

// ── Routes ──────────────────────────────────────────────────────────────

/// Build the static content routes.
pub fn content_routes() -> Router {
    Router::new()
        .route("/api/landing", get(get_landing))
        .route("/api/dashboard", get(get_dashboard))
}

/// GET /api/landing — the full landing page composition.
async fn get_landing() -> impl IntoResponse {
    Json(landing_page())
}

/// GET /api/dashboard — the dashboard shell with placeholder stats.
async fn get_dashboard() -> impl IntoResponse {
    Json(serde_json::json!({
        "stats": dashboard_stats(),
        "recent_activity": [],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_has_all_sections() {
        let page = landing_page();
        assert_eq!(page.benefits.len(), 4);
        assert_eq!(page.how_it_works.len(), 4);
        assert_eq!(page.engine_nodes.len(), 3);
        assert_eq!(page.footer.len(), 3);
        assert_eq!(page.hero.headline, "Hyper-Personalized Cold Email Generator");
    }

    #[test]
    fn dashboard_stats_are_placeholders() {
        let stats = dashboard_stats();
        assert_eq!(stats.len(), 4);
        assert!(stats.iter().all(|s| s.value.starts_with('0')));
    }

    #[test]
    fn section_display_defaults_to_first_step() {
        let display = SectionDisplay::new();
        assert_eq!(display.active().id, 1);
        assert_eq!(display.active().title, "Upload Your Leads");
    }

    #[test]
    fn section_display_selects_any_step_directly() {
        let mut display = SectionDisplay::new();
        display.select(3).unwrap();
        assert_eq!(display.active().title, "Generate Personalized Pitches");
        // Not linear: jumping backward over a step is fine.
        display.select(1).unwrap();
        assert_eq!(display.active().id, 1);
    }

    #[test]
    fn section_display_rejects_out_of_range() {
        let mut display = SectionDisplay::new();
        assert!(display.select(9).is_err());
        assert_eq!(display.active().id, 1);
    }
}
