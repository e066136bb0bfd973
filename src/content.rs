//! Copy and accent colors for the framework page.

use crate::expansion::PillarId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Lock,
    Eye,
    Brain,
    Globe,
    Shield,
    ChevronDown,
    ArrowRight,
}

#[derive(Debug, PartialEq)]
pub struct SummaryItem {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
    pub color: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Pillar {
    pub id: PillarId,
    pub icon: Icon,
    pub label: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub color: &'static str,
    pub actions: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct MonitorItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SKY: &str = "#0ea5e9";
pub const PURPLE: &str = "#a855f7";
pub const ROSE: &str = "#f43f5e";

pub const HERO_EYEBROW: &str = "The New Imperative";
pub const HERO_SUBTITLE: &str = "AI is no longer a future consideration. It's the present interface between your brand and your audience. This framework ensures we're visible where it matters.";
pub const SCROLL_HINT: &str = "Explore the framework";

pub const CHALLENGE_LABEL: &str = "The Challenge";
pub const CHALLENGE_TEXT: &str = "We need to control the data AI engines consume to predict how they represent our brand.";

pub const FRAMEWORK_LABEL: &str = "GEO Maturity Framework";
pub const FRAMEWORK_INTRO: &str = "Three interconnected pillars that build upon each other, from basic accessibility to full AI readiness.";

pub const MONITOR_LABEL: &str = "Critical Insight";
pub const MONITOR_QUOTE: &str = "You cannot optimize what you cannot measure.";
pub const MONITOR_BODY: &str = "Listening to the digital footprints of AI agents is the first step. Without visibility into how AI crawlers interact with our content, we're operating blind in an increasingly AI-mediated landscape.";

pub const CLOSING_TEXT: &str = "To succeed with GEO, think of it as having a polite conversation with a robot: you have to present your ID to prove you're authentic, unlock the door to ensure you're accessible, speak clearly using semantic HTML and Schema so you are understood, and finally, check your analytics to make sure they were actually listening.";

pub const FOOTER_TEXT: &str = "GEO Maturity Framework";

pub static SUMMARY_ITEMS: [SummaryItem; 3] = [
    SummaryItem {
        icon: Icon::Lock,
        title: "Trusted",
        text: "HTTPS + Provenance Metadata",
        color: PURPLE,
    },
    SummaryItem {
        icon: Icon::Eye,
        title: "Visible",
        text: "Robots.txt + Prerendering + Performance",
        color: SKY,
    },
    SummaryItem {
        icon: Icon::Brain,
        title: "Understood",
        text: "Schema + Semantics + Structure",
        color: ROSE,
    },
];

pub static PILLARS: [Pillar; 3] = [
    Pillar {
        id: PillarId::Enhance,
        icon: Icon::Globe,
        label: "ENHANCE",
        title: "Accessibility & Performance",
        question: "Can an AI bot crawl the site quickly and comprehensively?",
        color: SKY,
        actions: &[
            "Update robots.txt to allow AI agents and pre-render all content.",
            "Maximize WCAG accessibility compliance and optimize Core Web Vitals for faster AI processing.",
        ],
    },
    Pillar {
        id: PillarId::Establish,
        icon: Icon::Shield,
        label: "ESTABLISH",
        title: "Authority & Trust",
        question: "Does the AI bot trust your website to be an authentic source of data and content?",
        color: PURPLE,
        actions: &[
            "Enforce HTTPS connections and add provenance",
            "Metadata (C2PA watermarking) to signal authority to AI engines",
        ],
    },
    Pillar {
        id: PillarId::Provide,
        icon: Icon::Brain,
        label: "PROVIDE",
        title: "Semantic Clarity",
        question: "Is your website speaking the language of AI Engines?",
        color: ROSE,
        actions: &[
            "Add Schema.org markup to provide an AI agent-view for each page",
            "Use automated entity tagging to identify key entities (products, locations, organizations)",
            "Add an llms.txt file as a content map for AIs.",
        ],
    },
];

pub static MONITOR_ITEMS: [MonitorItem; 3] = [
    MonitorItem {
        label: "Goal",
        value: "Report specifically on AI Crawler traffic.",
    },
    MonitorItem {
        label: "Action",
        value: "Update Web Log Analytics tags.",
    },
    MonitorItem {
        label: "Rationale",
        value: "Monitor AI-agent content consumption patterns.",
    },
];

pub fn pillar(id: PillarId) -> &'static Pillar {
    match id {
        PillarId::Enhance => &PILLARS[0],
        PillarId::Establish => &PILLARS[1],
        PillarId::Provide => &PILLARS[2],
    }
}

/// Faint background for an accent: the hex color with a `15` alpha byte.
pub fn tint(color: &str) -> String {
    format!("{}15", color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_pillar_per_id_in_order() {
        let ids: Vec<PillarId> = PILLARS.iter().map(|p| p.id).collect();
        assert_eq!(ids, PillarId::ALL.to_vec());
        for id in PillarId::ALL {
            assert_eq!(pillar(id).id, id);
        }
    }

    #[test]
    fn labels_match_ids() {
        for p in &PILLARS {
            assert_eq!(p.label.to_lowercase(), p.id.as_str());
        }
    }

    #[test]
    fn every_pillar_has_actions() {
        assert_eq!(pillar(PillarId::Enhance).actions.len(), 2);
        assert_eq!(pillar(PillarId::Establish).actions.len(), 2);
        assert_eq!(pillar(PillarId::Provide).actions.len(), 3);
        assert!(PILLARS.iter().flat_map(|p| p.actions).all(|a| !a.is_empty()));
    }

    #[test]
    fn accents_are_hex_colors() {
        let colors = PILLARS
            .iter()
            .map(|p| p.color)
            .chain(SUMMARY_ITEMS.iter().map(|s| s.color));
        for color in colors {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn tint_appends_alpha() {
        assert_eq!(tint(SKY), "#0ea5e915");
    }

    #[test]
    fn monitor_card_reads_goal_action_rationale() {
        let labels: Vec<&str> = MONITOR_ITEMS.iter().map(|m| m.label).collect();
        assert_eq!(labels, ["Goal", "Action", "Rationale"]);
    }
}
