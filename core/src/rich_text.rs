//! Rich-text fields and their HTML / plain-text rendering.
//!
//! The content store returns text fields either as a plain string or as an
//! array of block nodes. `RichText` settles which one at deserialization so
//! rendering code never inspects raw JSON.
//!
//! The walk is single-level: a block's leaf children (or a list item's leaf
//! children) are rendered, deeper nesting is not.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A text field that is either a plain string or structured blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    PlainText(String),
    RichBlocks(#[serde(deserialize_with = "lenient_blocks")] Vec<Block>),
}

/// A block that does not parse (no `type`, malformed children) becomes
/// `Block::Unknown` so the rest of the field survives.
fn lenient_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|block| Block::deserialize(block).unwrap_or(Block::Unknown))
        .collect())
}

impl Default for RichText {
    fn default() -> Self {
        RichText::PlainText(String::new())
    }
}

impl RichText {
    pub fn is_empty(&self) -> bool {
        match self {
            RichText::PlainText(text) => text.trim().is_empty(),
            RichText::RichBlocks(blocks) => blocks.is_empty(),
        }
    }

    /// HTML markup. Plain strings are escaped and returned without a wrapper.
    pub fn to_html(&self) -> String {
        match self {
            RichText::PlainText(text) => escape_html(text),
            RichText::RichBlocks(blocks) => render_html(blocks),
        }
    }

    pub fn to_plain_text(&self) -> String {
        match self {
            RichText::PlainText(text) => text.clone(),
            RichText::RichBlocks(blocks) => render_plain_text(blocks),
        }
    }
}

/// One top-level block node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: Vec<TextLeaf>,
    },
    Heading {
        #[serde(default)]
        level: Option<u8>,
        #[serde(default)]
        children: Vec<TextLeaf>,
    },
    List {
        #[serde(default)]
        format: ListFormat,
        #[serde(default)]
        children: Vec<ListItem>,
    },
    /// Images, quotes, code and anything newer than this client.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub children: Vec<TextLeaf>,
}

/// Inline text with style marks. Non-text inline nodes (links) deserialize
/// with empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLeaf {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextLeaf {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    fn to_html(&self) -> String {
        let mut out = escape_html(&self.text);
        if self.bold {
            out = format!("<strong>{out}</strong>");
        }
        if self.italic {
            out = format!("<em>{out}</em>");
        }
        if self.underline {
            out = format!("<u>{out}</u>");
        }
        out
    }
}

fn leaves_html(leaves: &[TextLeaf]) -> String {
    leaves.iter().map(TextLeaf::to_html).collect()
}

fn leaves_text(leaves: &[TextLeaf]) -> String {
    leaves.iter().map(|leaf| leaf.text.as_str()).collect()
}

/// Render blocks as HTML. Unknown blocks contribute nothing.
pub fn render_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph { children } => format!("<p>{}</p>", leaves_html(children)),
            Block::Heading { level, children } => {
                let level = level.unwrap_or(2).clamp(1, 6);
                format!("<h{level}>{}</h{level}>", leaves_html(children))
            }
            Block::List { format, children } => {
                let tag = match format {
                    ListFormat::Ordered => "ol",
                    ListFormat::Unordered => "ul",
                };
                let items: String = children
                    .iter()
                    .map(|item| format!("<li>{}</li>", leaves_html(&item.children)))
                    .collect();
                format!("<{tag}>{items}</{tag}>")
            }
            Block::Unknown => String::new(),
        })
        .collect()
}

/// Render blocks as plain text: one line per block, list items bulleted.
pub fn render_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph { children } | Block::Heading { children, .. } => {
                leaves_text(children)
            }
            Block::List { children, .. } => children
                .iter()
                .map(|item| format!("• {}", leaves_text(&item.children)))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Unknown => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
