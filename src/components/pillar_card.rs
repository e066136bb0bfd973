use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::IconView;
use crate::content::{tint, Icon, Pillar};
use crate::expansion::PillarId;

/// How a card's action panel presents for a given expansion state.
#[derive(Debug, PartialEq, Eq)]
pub struct PanelView {
    pub panel_class: &'static str,
    pub button_label: &'static str,
}

impl PanelView {
    pub fn for_state(expanded: bool) -> Self {
        if expanded {
            PanelView {
                panel_class: "pillar-actions expanded",
                button_label: "Collapse",
            }
        } else {
            PanelView {
                panel_class: "pillar-actions",
                button_label: "View actions",
            }
        }
    }
}

/// Entrance animation offset so the cards fade in one after another.
pub fn entrance_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * 0.1)
}

#[derive(Properties, PartialEq)]
pub struct PillarCardProps {
    pub pillar: &'static Pillar,
    pub index: usize,
    pub expanded: bool,
    pub on_toggle: Callback<PillarId>,
}

#[function_component(PillarCard)]
pub fn pillar_card(props: &PillarCardProps) -> Html {
    let pillar = props.pillar;
    let view = PanelView::for_state(props.expanded);

    // The button has no handler of its own, its click bubbles up to the card.
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = pillar.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };

    html! {
        <div class="pillar-card" style={entrance_delay(props.index)} {onclick}>
            <div class="pillar-header">
                <div
                    class="pillar-icon"
                    style={format!("background: {}; color: {};", tint(pillar.color), pillar.color)}
                >
                    <IconView icon={pillar.icon} size={24} />
                </div>
                <div class="pillar-meta">
                    <span class="pillar-label" style={format!("color: {};", pillar.color)}>
                        {pillar.label}
                    </span>
                    <h3 class="pillar-title">{pillar.title}</h3>
                </div>
            </div>

            <p class="pillar-question">{pillar.question}</p>

            <div class={view.panel_class}>
                <div class="actions-divider" style={format!("background: {};", pillar.color)}></div>
                <p class="actions-label">{"Recommended Actions"}</p>
                { for pillar.actions.iter().map(|action| html! {
                    <div class="action-item">
                        <IconView
                            icon={Icon::ArrowRight}
                            size={14}
                            color={AttrValue::Static(pillar.color)}
                            class="action-arrow"
                        />
                        <span>{*action}</span>
                    </div>
                }) }
            </div>

            <button class="expand-btn" style={format!("color: {};", pillar.color)}>
                {view.button_label}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_panel_offers_to_expand() {
        let view = PanelView::for_state(false);
        assert_eq!(view.panel_class, "pillar-actions");
        assert_eq!(view.button_label, "View actions");
    }

    #[test]
    fn expanded_panel_offers_to_collapse() {
        let view = PanelView::for_state(true);
        assert!(view.panel_class.split(' ').any(|c| c == "expanded"));
        assert_eq!(view.button_label, "Collapse");
    }

    #[test]
    fn cards_enter_a_tenth_of_a_second_apart() {
        assert_eq!(entrance_delay(0), "animation-delay: 0.0s;");
        assert_eq!(entrance_delay(1), "animation-delay: 0.1s;");
        assert_eq!(entrance_delay(2), "animation-delay: 0.2s;");
    }
}
