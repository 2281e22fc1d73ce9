//! Styling for the dashboard.
//!
//! Every theme shares [`BASE_CSS`] for layout and only swaps the palette, so pages never branch on the theme.
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownTheme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light blue gradient with navy headings.
    #[default]
    Azure,
    /// Dark slate background.
    Slate,
    /// Plain white, no gradient.
    Paper,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Azure, Theme::Slate, Theme::Paper];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Azure => "azure",
            Theme::Slate => "slate",
            Theme::Paper => "paper",
        }
    }

    pub fn palette(&self) -> &'static str {
        match self {
            Theme::Azure => AZURE_PALETTE,
            Theme::Slate => SLATE_PALETTE,
            Theme::Paper => PAPER_PALETTE,
        }
    }

    /// Full stylesheet for this theme, palette first.
    pub fn stylesheet(&self) -> String {
        format!("{}\n{}", self.palette(), BASE_CSS)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme::Name(s.to_string()))
    }
}

const AZURE_PALETTE: &str = r#"
:root {
  --bg: linear-gradient(135deg, #e0f7fa, #f0f4f8);
  --sidebar: #e0f7fa;
  --panel: rgba(255, 255, 255, 0.85);
  --heading: #0d47a1;
  --text: #444444;
  --accent: #0d47a1;
  --accent-soft: rgba(13, 71, 161, 0.1);
  --expander: #d6eaf8;
  --metric: rgba(240, 244, 248, 0.95);
  --warning-bg: #fff8e1;
  --warning-text: #8a6d00;
  --success-bg: #e8f5e9;
  --success-text: #1b5e20;
  --error-bg: #fdecea;
  --error-text: #b71c1c;
}
"#;

const SLATE_PALETTE: &str = r#"
:root {
  --bg: linear-gradient(135deg, #0b111a, #111a26);
  --sidebar: #0d1520;
  --panel: rgba(17, 26, 38, 0.92);
  --heading: #7ac6ff;
  --text: #e6edf7;
  --accent: #5cb0ff;
  --accent-soft: rgba(92, 176, 255, 0.12);
  --expander: #16324f;
  --metric: rgba(11, 17, 26, 0.95);
  --warning-bg: #3a3012;
  --warning-text: #f7c843;
  --success-bg: #12352a;
  --success-text: #3fb68b;
  --error-bg: #3d1616;
  --error-text: #f0635c;
}
"#;

const PAPER_PALETTE: &str = r#"
:root {
  --bg: #ffffff;
  --sidebar: #f5f5f5;
  --panel: #ffffff;
  --heading: #222222;
  --text: #333333;
  --accent: #2563eb;
  --accent-soft: rgba(37, 99, 235, 0.08);
  --expander: #eeeeee;
  --metric: #fafafa;
  --warning-bg: #fff8e1;
  --warning-text: #8a6d00;
  --success-bg: #e8f5e9;
  --success-text: #1b5e20;
  --error-bg: #fdecea;
  --error-text: #b71c1c;
}
"#;

pub const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--bg);
  background-attachment: fixed;
  font-family: 'Arial', sans-serif;
  color: var(--text);
}
.app { display: flex; min-height: 100vh; }
.sidebar {
  width: 240px;
  flex-shrink: 0;
  padding: 2rem 1rem;
  background-color: var(--sidebar);
}
.sidebar h1 { font-size: 1.4rem; color: var(--heading); }
.sidebar p { font-weight: 600; color: var(--heading); }
.sidebar ul { list-style: none; padding: 0; margin: 0; }
.sidebar a {
  display: block;
  padding: 6px 10px;
  border-radius: 8px;
  color: var(--accent);
  font-weight: 600;
  text-decoration: none;
  transition: background-color 0.3s ease;
}
.sidebar a:hover, .sidebar a[aria-current="page"] { background-color: var(--accent-soft); }
.block-container {
  flex-grow: 1;
  background-color: var(--panel);
  padding: 2rem 3rem;
  margin: 2rem auto;
  border-radius: 16px;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
  max-width: 1000px;
}
h1, h2, h3 { color: var(--heading); font-weight: 600; letter-spacing: 0.5px; }
p, li, label { font-size: 15px; line-height: 1.6; }
img, video {
  border-radius: 12px;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
  max-width: 100%;
}
figure { margin: 0; }
figcaption { font-size: 13px; opacity: 0.7; text-align: center; }
details { margin: 1rem 0; }
details > summary {
  background-color: var(--expander);
  border-radius: 8px;
  padding: 8px;
  font-weight: bold;
  cursor: pointer;
}
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.metric {
  background-color: var(--metric);
  border-radius: 10px;
  padding: 10px;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
}
.metric .label { font-size: 13px; opacity: 0.8; }
.metric .value { font-size: 2rem; font-weight: 600; }
.alert { padding: 12px 16px; border-radius: 8px; margin: 1rem 0; }
.alert.warning { background-color: var(--warning-bg); color: var(--warning-text); }
.alert.success { background-color: var(--success-bg); color: var(--success-text); }
.alert.error { background-color: var(--error-bg); color: var(--error-text); }
.block-container > progress { width: 100%; height: 12px; accent-color: var(--accent); }
.block-container > progress:not(:last-of-type),
.block-container > output:not(:last-of-type) { display: none; }
.block-container > output { display: block; font-size: 14px; }
.chart svg { width: 100%; height: auto; }
.chart text { fill: var(--text); font-size: 11px; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: 6px 10px; border-bottom: 1px solid var(--accent-soft); text-align: left; }
"#;
