use yew::prelude::*;

use crate::components::icons::IconView;
use crate::content::SummaryItem;

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub item: &'static SummaryItem,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let item = props.item;

    html! {
        <div class="hero-summary-card">
            <div class="hero-summary-icon" style={format!("color: {};", item.color)}>
                <IconView icon={item.icon} size={20} />
            </div>
            <div class="hero-summary-text">
                <h3 class="hero-summary-title">{item.title}</h3>
                <p class="hero-summary-items">{item.text}</p>
            </div>
        </div>
    }
}
