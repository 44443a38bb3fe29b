use dioxus::prelude::*;

use crate::domain::Icon;
use crate::ui::theme;

/// Icon-font glyph; resolution of the name is left to the loaded icon stylesheet.
#[component]
pub fn Glyph(icon: Icon, #[props(default)] style: String) -> Element {
    let class = theme::glyph_class(icon);

    rsx! {
        i { class: "{class}", style: "{style}", aria_hidden: "true" }
    }
}
