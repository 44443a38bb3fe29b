//! Monthly summary screen: greeting, net balance banner and the KPI grid.

use dioxus::prelude::*;

use crate::domain::{DashboardModel, Icon};
use crate::ui::{
    components::{Glyph, KpiCard},
    theme,
};
use crate::util::config::AppConfig;

#[component]
pub fn DashboardScreen() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let model = DashboardModel::monthly_summary(&config.display_name, config.accent);
    let balance = model.balance;
    let profile_tint = theme::accent_text(config.accent);

    rsx! {
        div { class: "safe-area",
            div { class: "content",
                div { class: "header-row",
                    div {
                        h1 { class: "greeting", "{model.greeting}" }
                        p { class: "subtitle", "{model.subtitle}" }
                    }
                    // No profile screen exists yet.
                    button {
                        class: "profile-button",
                        onclick: move |_| tracing::debug!("profile button tapped"),
                        Glyph { icon: Icon::User, style: profile_tint }
                    }
                }

                div {
                    class: "balance-card",
                    role: "button",
                    tabindex: "0",
                    onclick: move |_| tracing::debug!("balance banner tapped"),
                    p { class: "balance-label", "{balance.label}" }
                    p { class: "balance-amount", "{balance.amount}" }
                    div { class: "balance-action-row",
                        span { class: "balance-action-text", "{balance.action}" }
                        Glyph { icon: balance.icon }
                    }
                }

                div { class: "grid",
                    for card in model.kpis {
                        KpiCard { key: "{card.title}", card }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Accent, KPI_CAPTION};

    fn render_dashboard() -> String {
        let mut dom = VirtualDom::new(DashboardScreen);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_single_balance_banner() {
        let html = render_dashboard();

        assert_eq!(html.matches("\"balance-card\"").count(), 1);
        assert_eq!(html.matches("$2,845.40").count(), 1);
        assert_eq!(html.matches("BALANCE NETO").count(), 1);
        assert!(html.contains("Hola, Valentina"));
        assert!(html.contains("Resumen mensual"));
    }

    #[test]
    fn renders_four_kpis_in_order() {
        let html = render_dashboard();
        assert_eq!(html.matches("\"kpi-card\"").count(), 4);

        let expected = [
            ("Ingresos", "$4,150.00"),
            ("Gastos Fijos", "$850.00"),
            ("Ahorro", "$1,000.00"),
            ("Gastos Variables", "$454.60"),
        ];
        let mut cursor = 0;
        for (title, amount) in expected {
            let title_at = cursor + html[cursor..].find(title).expect(title);
            let amount_at = title_at + html[title_at..].find(amount).expect(amount);
            cursor = amount_at;
        }
    }

    #[test]
    fn every_caption_uses_the_accent() {
        let html = render_dashboard();
        let accent = format!("color: {};", Accent::EMERALD);

        let segments: Vec<&str> = html.split(KPI_CAPTION).collect();
        assert_eq!(segments.len(), 5);
        for segment in &segments[..4] {
            let caption_tag = &segment[segment.rfind("<p").unwrap()..];
            assert!(caption_tag.contains(&accent), "untinted caption: {caption_tag}");
        }
    }

    #[component]
    fn VioletDashboard() -> Element {
        use_context_provider(|| AppConfig {
            display_name: "Ana".to_string(),
            accent: Accent::from_rgb(0x8b, 0x5c, 0xf6),
        });
        rsx! { DashboardScreen {} }
    }

    #[test]
    fn configured_accent_tints_profile_button_and_cards() {
        let mut dom = VirtualDom::new(VioletDashboard);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Hola, Ana"));
        let (_, profile_button) = html.split_once("\"profile-button\"").expect("profile button");
        let glyph = &profile_button[..profile_button.find("</i>").unwrap()];
        assert!(glyph.contains("color: #8b5cf6;"), "untinted profile glyph: {glyph}");
        // 4 badge glyphs + 4 captions + the profile glyph.
        assert_eq!(html.matches("color: #8b5cf6;").count(), 9);
        assert!(!html.contains("#10b981"));
    }

    #[test]
    fn rerender_is_identical() {
        assert_eq!(render_dashboard(), render_dashboard());
    }

    #[test]
    fn screen_icons_resolve_by_name() {
        let html = render_dashboard();
        for glyph in ["user", "line-chart", "arrow-up", "credit-card", "bank", "arrow-down"] {
            assert!(html.contains(&format!("fa fa-{glyph}")), "missing {glyph}");
        }
    }
}
