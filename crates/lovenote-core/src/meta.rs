//! Page metadata: title, description, Open Graph, Twitter, canonical URL.
//!
//! [`PageMeta::tags`] yields the head tags in a fixed order. The desktop app
//! renders them through `dioxus::document`; `--print-head` uses
//! [`PageMeta::to_html`] to dump them for static hosting.

use serde::{Deserialize, Serialize};

/// `<link rel="icon">`-style entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    pub rel: String,
    pub href: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

impl Default for OpenGraph {
    fn default() -> Self {
        Self {
            kind: "website".to_string(),
            title: "Happy National Princess Day 👑".to_string(),
            description: "A special surprise for Propose Day - A delightful interactive experience with love letters, music, and memories".to_string(),
            image: "/og-image.jpg".to_string(),
            url: "https://national-princess-day.vercel.app".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl Default for TwitterCard {
    fn default() -> Self {
        Self {
            card: "summary_large_image".to_string(),
            title: "Happy National Propose Day 👑".to_string(),
            description: "A special surprise for National Propose Day".to_string(),
            image: "/og-image.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub icons: Vec<IconLink>,
    pub og: OpenGraph,
    pub twitter: TwitterCard,
    pub theme_color: String,
    pub canonical_url: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Happy Propose Day 👑".to_string(),
            description: "A special surprise for National Princess Day - A delightful interactive experience with love letters, music, and memories".to_string(),
            keywords: "National Propose Day, love letter, surprise, interactive".to_string(),
            author: "Bleh".to_string(),
            icons: vec![
                IconLink {
                    rel: "icon".to_string(),
                    href: "/favicon.svg".to_string(),
                    sizes: None,
                    mime: Some("image/svg+xml".to_string()),
                },
                IconLink {
                    rel: "icon".to_string(),
                    href: "/favicon.ico".to_string(),
                    sizes: Some("any".to_string()),
                    mime: None,
                },
                IconLink {
                    rel: "apple-touch-icon".to_string(),
                    href: "/favicon.svg".to_string(),
                    sizes: None,
                    mime: None,
                },
            ],
            og: OpenGraph::default(),
            twitter: TwitterCard::default(),
            theme_color: "#fff8e7".to_string(),
            canonical_url: "https://national-propose-day.vercel.app".to_string(),
        }
    }
}

/// Whether a `<meta>` is keyed by `name` or by `property` (Open Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    pub fn attr(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// A single tag in the document head (other than `<title>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Meta {
        key: MetaKey,
        value: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
        sizes: Option<String>,
        mime: Option<String>,
    },
}

impl HeadTag {
    fn name(value: &str, content: &str) -> Self {
        HeadTag::Meta {
            key: MetaKey::Name,
            value: value.to_string(),
            content: content.to_string(),
        }
    }

    fn property(value: &str, content: &str) -> Self {
        HeadTag::Meta {
            key: MetaKey::Property,
            value: value.to_string(),
            content: content.to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            HeadTag::Meta {
                key,
                value,
                content,
            } => format!(
                r#"<meta {}="{}" content="{}" />"#,
                key.attr(),
                escape_attr(value),
                escape_attr(content)
            ),
            HeadTag::Link {
                rel,
                href,
                sizes,
                mime,
            } => {
                let mut html = format!(r#"<link rel="{}""#, escape_attr(rel));
                if let Some(mime) = mime {
                    html.push_str(&format!(r#" type="{}""#, escape_attr(mime)));
                }
                html.push_str(&format!(r#" href="{}""#, escape_attr(href)));
                if let Some(sizes) = sizes {
                    html.push_str(&format!(r#" sizes="{}""#, escape_attr(sizes)));
                }
                html.push_str(" />");
                html
            }
        }
    }
}

impl PageMeta {
    /// Head tags in document order.
    pub fn tags(&self) -> Vec<HeadTag> {
        let mut tags = vec![
            HeadTag::name("description", &self.description),
            HeadTag::name("viewport", "width=device-width, initial-scale=1"),
            HeadTag::name("keywords", &self.keywords),
            HeadTag::name("author", &self.author),
        ];

        tags.extend(self.icons.iter().map(|icon| HeadTag::Link {
            rel: icon.rel.clone(),
            href: icon.href.clone(),
            sizes: icon.sizes.clone(),
            mime: icon.mime.clone(),
        }));

        tags.extend([
            HeadTag::property("og:type", &self.og.kind),
            HeadTag::property("og:title", &self.og.title),
            HeadTag::property("og:description", &self.og.description),
            HeadTag::property("og:image", &self.og.image),
            HeadTag::property("og:url", &self.og.url),
            HeadTag::name("twitter:card", &self.twitter.card),
            HeadTag::name("twitter:title", &self.twitter.title),
            HeadTag::name("twitter:description", &self.twitter.description),
            HeadTag::name("twitter:image", &self.twitter.image),
            HeadTag::name("theme-color", &self.theme_color),
            HeadTag::Link {
                rel: "canonical".to_string(),
                href: self.canonical_url.clone(),
                sizes: None,
                mime: None,
            },
        ]);

        tags
    }

    /// `<title>` followed by every head tag, one per line.
    pub fn to_html(&self) -> String {
        let mut lines = vec![format!("<title>{}</title>", escape_text(&self.title))];
        lines.extend(self.tags().iter().map(HeadTag::to_html));
        lines.join("\n")
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}
