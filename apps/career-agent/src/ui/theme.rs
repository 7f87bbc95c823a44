//! Light and dark palettes and the stylesheet generated from them.

use crate::session::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub sidebar: &'static str,
    pub text: &'static str,
    pub input: &'static str,
    pub border: &'static str,
    pub hero_text: &'static str,
    pub hero_background: &'static str,
}

const DARK: Palette = Palette {
    primary: "#4F8BF9",
    background: "#0E1117",
    sidebar: "#262730",
    text: "#FFFFFF",
    input: "#1E1E1E",
    border: "#41444C",
    hero_text: "#FFFFFF",
    hero_background: "linear-gradient(135deg, #0F2027 0%, #203A43 50%, #2C5364 100%)",
};

// High contrast: pure black text, darker borders.
const LIGHT: Palette = Palette {
    primary: "#2563EB",
    background: "#FFFFFF",
    sidebar: "#F8F9FA",
    text: "#000000",
    input: "#FFFFFF",
    border: "#AAAAAA",
    hero_text: "#000000",
    hero_background: "linear-gradient(135deg, #E0EAFC 0%, #CFDEF3 100%)",
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Label for the sidebar toggle: names the theme it switches to.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "🌙 Dark Mode",
        Theme::Dark => "☀️ Light Mode",
    }
}

pub fn stylesheet(theme: Theme) -> String {
    let p = palette(theme);
    format!(
        r#"
body {{ margin: 0; display: flex; min-height: 100vh; background-color: {bg}; color: {text}; font-family: 'Segoe UI', sans-serif; }}
.sidebar {{ width: 240px; padding: 24px 16px; background-color: {sidebar}; border-right: 1px solid {border}; box-sizing: border-box; }}
.sidebar * {{ color: {text}; }}
.sidebar h2 {{ text-align: center; }}
.sidebar form {{ margin: 0 0 8px 0; }}
.sidebar hr {{ border: none; border-top: 1px solid {border}; margin: 16px 0; }}
main {{ flex: 1; padding: 32px 48px; }}
h1, h2, h3, h4, h5, h6, p, label, li {{ color: {text}; }}
input[type=text], input[type=email], textarea, input[type=file] {{
    width: 100%; box-sizing: border-box; padding: 8px; margin: 4px 0 12px 0;
    color: {text}; background-color: {input}; border: 1px solid {border}; border-radius: 8px;
}}
textarea {{ min-height: 96px; }}
.grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 0 24px; }}
.features {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }}
button {{
    width: 100%; padding: 8px 12px; cursor: pointer; font-weight: 600;
    background-color: {input}; color: {text}; border: 1px solid {border}; border-radius: 8px;
}}
button.primary {{ background-color: {primary}; color: white; border: none; }}
button.active {{ border-color: {primary}; }}
.hero-box {{
    background: {hero_bg}; padding: 60px; border-radius: 20px; text-align: center;
    margin-bottom: 40px; box-shadow: 0 4px 15px rgba(0,0,0,0.1);
}}
.hero-box h1, .hero-box p {{ color: {hero_text}; }}
.job-card {{
    background-color: {input}; border: 1px solid {border}; padding: 20px; border-radius: 10px;
    margin-bottom: 15px; box-shadow: 0 2px 5px rgba(0,0,0,0.05);
}}
.match-tag {{ background-color: {primary}; color: white; padding: 4px 8px; border-radius: 5px; font-size: 0.8rem; }}
.flash {{ padding: 12px 16px; border-radius: 8px; margin-bottom: 16px; }}
.flash.success {{ background-color: #DCFCE7; color: #14532D; }}
.flash.error {{ background-color: #FEE2E2; color: #7F1D1D; }}
.flash.info {{ background-color: #DBEAFE; color: #1E3A8A; }}
"#,
        bg = p.background,
        text = p.text,
        sidebar = p.sidebar,
        border = p.border,
        input = p.input,
        primary = p.primary,
        hero_bg = p.hero_background,
        hero_text = p.hero_text,
    )
}
