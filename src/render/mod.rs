//! Display tree shared by every renderer.
//!
//! Renderers are pure: they take data and return a `Vec<Node>`. The iced
//! shell ([`crate::ui::tree`]) and the plain-text printer ([`text`]) both
//! interpret the same tree, so tests can assert on structure directly.

pub mod order;
pub mod recent;
pub mod text;

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::config::{DisplayConfig, TimeZoneChoice, DEFAULT_PLACEHOLDER};
use crate::model::{OrderId, Scalar};

pub use order::render_order;
pub use recent::render_recent;

/// What happens when an activatable node is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Put the UID into the search field and look it up
    SelectRecent(OrderId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Titled block (e.g. "Delivery")
    Section { title: String, children: Vec<Node> },
    /// Untitled group, used for line items and recent entries
    Card { children: Vec<Node> },
    /// `label: value` pair; `value` is never empty
    Field { label: String, value: String },
    /// Clickable wrapper
    Activate { action: Action, child: Box<Node> },
}

impl Node {
    pub fn section(title: &str, children: Vec<Node>) -> Self {
        Node::Section {
            title: title.to_string(),
            children,
        }
    }

    pub fn field(label: &str, value: String) -> Self {
        Node::Field {
            label: label.to_string(),
            value,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Node::Section { title, .. } => Some(title),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children, .. } | Node::Card { children } => children,
            Node::Activate { child, .. } => std::slice::from_ref(child.as_ref()),
            Node::Field { .. } => &[],
        }
    }

    /// `(label, value)` pairs of the direct `Field` children, in order
    pub fn fields(&self) -> Vec<(&str, &str)> {
        self.children()
            .iter()
            .filter_map(|n| match n {
                Node::Field { label, value } => Some((label.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Value of the first direct field with this label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }
}

/// Formatting knobs shared by the renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub placeholder: String,
    pub date_format: String,
    pub timezone: TimeZoneChoice,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for RenderOptions {
    fn from(config: &DisplayConfig) -> Self {
        let placeholder = if config.placeholder.trim().is_empty() {
            tracing::warn!("Blank display.placeholder, using {:?}", DEFAULT_PLACEHOLDER);
            DEFAULT_PLACEHOLDER.to_string()
        } else {
            config.placeholder.clone()
        };
        Self {
            placeholder,
            date_format: config.date_format.clone(),
            timezone: config.timezone,
        }
    }
}

impl RenderOptions {
    /// The value as text, or the placeholder when absent or blank
    pub fn value(&self, value: Option<&Scalar>) -> String {
        match value {
            Some(Scalar::Text(s)) if s.trim().is_empty() => self.placeholder.clone(),
            Some(v) => v.to_string(),
            None => self.placeholder.clone(),
        }
    }

    fn is_absent(value: Option<&Scalar>) -> bool {
        match value {
            None => true,
            Some(Scalar::Text(s)) => s.trim().is_empty(),
            Some(_) => false,
        }
    }

    /// `"<amount> <currency>"`; a missing half is filled with the placeholder
    pub fn amount(&self, amount: Option<&Scalar>, currency: Option<&Scalar>) -> String {
        if Self::is_absent(amount) && Self::is_absent(currency) {
            return self.placeholder.clone();
        }
        format!("{} {}", self.value(amount), self.value(currency))
    }

    /// `"<sale>%"`
    pub fn percent(&self, value: Option<&Scalar>) -> String {
        if Self::is_absent(value) {
            return self.placeholder.clone();
        }
        format!("{}%", self.value(value))
    }

    /// RFC 3339 timestamps are reformatted in the configured zone;
    /// anything else is shown as sent.
    pub fn timestamp(&self, value: Option<&Scalar>) -> String {
        if Self::is_absent(value) {
            return self.placeholder.clone();
        }
        let raw = self.value(value);
        let parsed = match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(dt) => dt,
            Err(_) => return raw,
        };

        let mut out = String::new();
        let written = match self.timezone {
            TimeZoneChoice::Local => write!(
                out,
                "{}",
                parsed.with_timezone(&Local).format(&self.date_format)
            ),
            TimeZoneChoice::Utc => write!(
                out,
                "{}",
                parsed.with_timezone(&Utc).format(&self.date_format)
            ),
        };
        match written {
            Ok(()) => out,
            Err(_) => {
                tracing::warn!("Invalid date_format {:?}, showing raw timestamp", self.date_format);
                raw
            }
        }
    }
}
