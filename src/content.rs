use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
}

/// Colour family used to tint a card, a badge or a highlighted phrase.
///
/// Every class is spelled out in full so the Tailwind scanner picks it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Amber,
    Purple,
    Green,
    Blue,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Accent::Cyan => "text-cyan-400",
            Accent::Amber => "text-amber-400",
            Accent::Purple => "text-purple-400",
            Accent::Green => "text-green-400",
            Accent::Blue => "text-blue-400",
        }
    }

    pub fn hover_text(self) -> &'static str {
        match self {
            Accent::Cyan => "group-hover:text-cyan-400",
            Accent::Amber => "group-hover:text-amber-400",
            Accent::Purple => "group-hover:text-purple-400",
            Accent::Green => "group-hover:text-green-400",
            Accent::Blue => "group-hover:text-blue-400",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-cyan-500/20 text-cyan-400 border-cyan-500/30",
            Accent::Amber => "bg-amber-500/20 text-amber-400 border-amber-500/30",
            Accent::Purple => "bg-purple-500/20 text-purple-400 border-purple-500/30",
            Accent::Green => "bg-green-500/20 text-green-400 border-green-500/30",
            Accent::Blue => "bg-blue-500/20 text-blue-400 border-blue-500/30",
        }
    }

    pub fn bar(self) -> &'static str {
        match self {
            Accent::Cyan => "from-cyan-400 to-blue-500",
            Accent::Amber => "from-amber-400 to-orange-500",
            Accent::Purple => "from-purple-400 to-pink-500",
            Accent::Green => "from-green-400 to-emerald-500",
            Accent::Blue => "from-blue-400 to-indigo-500",
        }
    }

    pub fn dot(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-cyan-400",
            Accent::Amber => "bg-amber-400",
            Accent::Purple => "bg-purple-400",
            Accent::Green => "bg-green-400",
            Accent::Blue => "bg-blue-400",
        }
    }

    pub fn hover_border(self) -> &'static str {
        match self {
            Accent::Cyan => "hover:border-cyan-400/50",
            Accent::Amber => "hover:border-amber-400/50",
            Accent::Purple => "hover:border-purple-400/50",
            Accent::Green => "hover:border-green-400/50",
            Accent::Blue => "hover:border-blue-400/50",
        }
    }
}

/// Icon drawn in the corner of an expertise or education card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Code,
    Server,
    Chip,
    Cog,
    Flask,
    Book,
    Globe,
}

/// A run of text, optionally tinted.
///
/// In the content file a plain run is a bare string and a tinted one is
/// `{ "accent": "cyan", "text": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Span {
    Plain(String),
    Accented { accent: Accent, text: String },
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(s) => s,
            Span::Accented { text, .. } => text,
        }
    }
}

pub type RichText = Vec<Span>;

/// Concatenates the runs of a rich text, dropping the tints.
pub fn plain_text(rich: &[Span]) -> String {
    rich.iter().map(Span::text).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub role: String,
    pub photo: String,
    pub greeting: String,
    pub tagline: RichText,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub primary_email: String,
    pub alternate_email: String,
    pub linkedin: String,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub accent: Accent,
    pub icon: Glyph,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub accent: Accent,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Study {
    pub title: String,
    pub program: String,
    pub school: String,
    pub period: String,
    pub accent: Accent,
    pub icon: Glyph,
    pub summary: RichText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<RichText>,
    pub highlights: Vec<Highlight>,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterText {
    pub rights: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub links: Links,
    pub expertise: Vec<SkillGroup>,
    pub experience: Vec<Job>,
    pub education: Vec<Study>,
    pub about: About,
    pub footer: FooterText,
}

/// Parses an embedded content file.
pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        message: e.to_string(),
    })
}

/// The page content, parsed once per process (or once per page load in the browser).
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let p = portfolio().expect("embedded content should parse");
        assert_eq!(p.owner.full_name(), "Giovanni Podbersig");
        assert_eq!(p.owner.initials, "GP");
        assert_eq!(p.expertise.len(), 4);
        assert_eq!(p.experience.len(), 3);
        assert_eq!(p.education.len(), 3);
        assert_eq!(p.about.paragraphs.len(), 2);
    }

    #[test]
    fn test_contact_addresses() {
        let p = portfolio().unwrap();
        assert_eq!(p.links.primary_email, "giovanni.podbersig@outlook.it");
        assert_eq!(p.links.alternate_email, "giopoddi13@gmail.com");
        assert!(p.links.github.is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = load("nope.json").unwrap_err();
        assert_eq!(err, ContentError::Missing("nope.json".to_string()));
    }

    #[test]
    fn test_rich_text_spans() {
        let spans: RichText =
            serde_json::from_str(r#"["Hello ", {"accent": "amber", "text": "world"}, "!"]"#)
                .unwrap();
        assert_eq!(spans[0], Span::Plain("Hello ".to_string()));
        assert_eq!(
            spans[1],
            Span::Accented {
                accent: Accent::Amber,
                text: "world".to_string()
            }
        );
        assert_eq!(plain_text(&spans), "Hello world!");
    }

    #[test]
    fn test_unknown_accent_is_rejected() {
        let res = serde_json::from_str::<Accent>(r#""magenta""#);
        assert!(res.is_err());
    }

    #[test]
    fn test_tagline_reads_naturally() {
        let p = portfolio().unwrap();
        let tagline = plain_text(&p.owner.tagline);
        assert!(tagline.starts_with("Specialized in AI & Software Development"));
        assert!(tagline.ends_with("Metaverse & Digital Twins"));
    }
}
