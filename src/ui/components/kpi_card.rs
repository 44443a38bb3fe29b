use dioxus::prelude::*;

use crate::domain::{KpiCardModel, KPI_CAPTION};
use crate::ui::{components::Glyph, theme};

#[component]
pub fn KpiCard(card: KpiCardModel, on_tap: Option<EventHandler<()>>) -> Element {
    let badge = theme::badge_style(card.accent);
    let tinted = theme::accent_text(card.accent);
    let title = card.title.clone();

    rsx! {
        div {
            class: "kpi-card",
            role: "button",
            tabindex: "0",
            onclick: move |_| dispatch_tap(&title, on_tap.as_ref()),
            div { class: "kpi-header",
                span { class: "kpi-title", "{card.title}" }
                span { class: "kpi-icon", style: "{badge}",
                    Glyph { icon: card.icon, style: tinted.clone() }
                }
            }
            p { class: "kpi-amount", "{card.amount}" }
            p { class: "kpi-meta", style: "{tinted}", "{KPI_CAPTION}" }
        }
    }
}

/// Forwards a tap to the card's handler. Cards without one stay inert.
pub(crate) fn dispatch_tap(title: &str, on_tap: Option<&EventHandler<()>>) {
    match on_tap {
        Some(handler) => handler.call(()),
        None => tracing::debug!(card = title, "KPI card tapped without a handler"),
    }
}
