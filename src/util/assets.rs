use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Glyph stylesheet resolving `fa fa-<name>` classes.
pub const ICON_FONT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

/// Stylesheet and favicon, compiled into the binary so every renderer gets the same files.
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.svg"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| embedded_text("main.css"))
}

/// The SVG favicon as a `utf8` data URI; no binary encoding is needed for markup.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_URI.get_or_init(|| {
        let svg = embedded_text("favicon.svg");
        format!("data:image/svg+xml;utf8,{}", urlencoding::encode(svg.trim()))
    })
}

fn embedded_text(name: &str) -> String {
    let file = EmbeddedAssets::get(name)
        .unwrap_or_else(|| panic!("asset {name} missing from the embedded bundle"));
    String::from_utf8_lossy(&file.data).into_owned()
}
