use yew::prelude::*;

use crate::components::icons::IconView;
use crate::components::pillar_card::PillarCard;
use crate::components::summary_card::SummaryCard;
use crate::config;
use crate::content::{self, Icon, MONITOR_ITEMS, SUMMARY_ITEMS};
use crate::expansion::{ExpansionAction, PillarId};
use crate::hooks::{use_active_section, use_scroll_progress};
use crate::styles::PAGE_CSS;


#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <div class="hero-eyebrow">
                    <IconView icon={Icon::Sparkles} size={14} />
                    <span>{content::HERO_EYEBROW}</span>
                </div>
                <h1 class="hero-title">
                    {"Getting AI engines to"}
                    <br />
                    <em>{"discover"}</em>{", "}<em>{"understand"}</em>{","}
                    <br />
                    {"and "}<em>{"trust"}</em>{" our content"}
                </h1>
                <div class="hero-line"></div>
                <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>

                <div class="hero-summary-grid">
                    { for SUMMARY_ITEMS.iter().map(|item| html! {
                        <SummaryCard key={item.title} {item} />
                    }) }
                </div>

                <div class="scroll-hint">
                    <span>{content::SCROLL_HINT}</span>
                    <IconView icon={Icon::ChevronDown} size={20} />
                </div>
            </div>
            <div class="hero-glow"></div>
        </section>
    }
}

#[function_component(MonitorSection)]
fn monitor_section() -> Html {
    let items = MONITOR_ITEMS.iter().enumerate().map(|(i, item)| {
        html! {
            <>
                if i > 0 {
                    <div class="monitor-divider"></div>
                }
                <div class="monitor-item">
                    <span class="monitor-label">{item.label}</span>
                    <p class="monitor-value">{item.value}</p>
                </div>
            </>
        }
    });

    html! {
        <section class="monitor-section">
            <div class="monitor-content">
                <div class="monitor-text">
                    <h2 class="section-label">{content::MONITOR_LABEL}</h2>
                    <blockquote class="monitor-quote">{content::MONITOR_QUOTE}</blockquote>
                    <p class="monitor-body">{content::MONITOR_BODY}</p>
                </div>
                <div class="monitor-card">
                    { for items }
                </div>
            </div>
        </section>
    }
}

#[function_component(GeoFramework)]
pub fn geo_framework() -> Html {
    let progress = use_scroll_progress();
    let active = use_active_section();

    let on_toggle = {
        let active = active.clone();
        Callback::from(move |id: PillarId| active.dispatch(ExpansionAction::Toggle(id)))
    };

    html! {
        <div class="geo-page">
            <style>{PAGE_CSS}</style>
            <link href={config::FONT_STYLESHEET} rel="stylesheet" />

            <div class="progress-bar" style={progress.width_style()}></div>

            <Hero />

            <section class="stakes-section">
                <div class="stakes-inner">
                    <h2 class="section-label">{content::CHALLENGE_LABEL}</h2>
                    <p class="stakes-text">{content::CHALLENGE_TEXT}</p>
                </div>
            </section>

            <section class="framework-section">
                <div class="framework-header">
                    <h2 class="section-label">{content::FRAMEWORK_LABEL}</h2>
                    <p class="framework-intro">{content::FRAMEWORK_INTRO}</p>
                </div>

                <div class="pillars-grid">
                    { for PillarId::ALL.into_iter().map(content::pillar).enumerate().map(|(index, pillar)| html! {
                        <PillarCard
                            key={pillar.id.as_str()}
                            {pillar}
                            {index}
                            expanded={active.is_expanded(pillar.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </section>

            <MonitorSection />

            <section class="closing-section">
                <h2 class="closing-title">{content::CLOSING_TEXT}</h2>
            </section>

            <footer class="footer">
                <p class="footer-text">{content::FOOTER_TEXT}</p>
            </footer>
        </div>
    }
}
