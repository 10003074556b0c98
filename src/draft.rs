//! Initial draft generation from curated source items.
//!
//! Source items arrive as JSON tagged by `type` (`reddit` or `newsletter`).
//! Each platform has a fixed template; blog posts share the email layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{HookError, Result};
use crate::refine::Platform;

/// A curated item a draft is written about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceItem {
    Reddit(RedditArticle),
    Newsletter(NewsletterHighlight),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedditArticle {
    pub id: String,
    pub title: String,
    pub source_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub snippet: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterHighlight {
    pub id: String,
    pub title: String,
    pub source_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl SourceItem {
    /// Parse an item from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| HookError::InvalidSourceItem(err.to_string()))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Reddit(item) => &item.id,
            Self::Newsletter(item) => &item.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Reddit(item) => &item.title,
            Self::Newsletter(item) => &item.title,
        }
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        match self {
            Self::Reddit(item) => &item.source_name,
            Self::Newsletter(item) => &item.source_name,
        }
    }

    fn snippet(&self) -> Option<&str> {
        match self {
            Self::Reddit(item) if !item.snippet.is_empty() => Some(item.snippet.as_str()),
            _ => None,
        }
    }

    fn key_points(&self) -> &[String] {
        match self {
            Self::Reddit(_) => &[],
            Self::Newsletter(item) => &item.key_points,
        }
    }

    /// Snippet, else the first key point, else nothing.
    fn lead(&self) -> &str {
        self.snippet()
            .or_else(|| self.key_points().first().map(String::as_str))
            .unwrap_or("")
    }

    /// Snippet, else all key points joined.
    fn takeaway(&self) -> String {
        self.snippet()
            .map_or_else(|| self.key_points().join(", "), str::to_string)
    }

    /// Source name reduced to letters, as used in a hashtag.
    fn source_tag(&self) -> String {
        self.source_name()
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect()
    }
}

/// A generated draft, ready to be refined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: String,
    pub original_item_id: String,
    pub platform: Platform,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Generate the first draft for `item` on `platform`.
#[must_use]
pub fn generate_draft(item: &SourceItem, platform: Platform) -> Draft {
    let content = render(item, platform);
    debug!(item = item.id(), %platform, chars = content.len(), "generated draft");

    Draft {
        id: Uuid::new_v4().simple().to_string(),
        original_item_id: item.id().to_string(),
        platform,
        content,
        created_at: Utc::now(),
    }
}

/// Render the platform template for `item`.
#[must_use]
pub fn render(item: &SourceItem, platform: Platform) -> String {
    let title = item.title();
    let source = item.source_name();

    match platform {
        Platform::Twitter => format!(
            "🧵 {title}\n\n{lead}\n\nHere's why this matters:\n\n1. First insight derived from content\n2. Second critical point\n3. The actionable takeaway\n\n#{tag} #Growth",
            lead = item.lead(),
            tag = item.source_tag(),
        ),
        Platform::Linkedin => format!(
            "{upper}\n\nI recently came across this insight from {source}, and it completely changed my perspective.\n\n\"{lead}\"\n\nIn my experience, we often overlook this simple fact. Here are 3 ways to apply this today:\n\n✅ Step 1\n✅ Step 2\n✅ Step 3\n\nWhat are your thoughts? 👇\n\n#Business #Strategy #Innovation",
            upper = title.to_uppercase(),
            lead = item.lead(),
        ),
        Platform::Email | Platform::Blog => format!(
            "Subject: Quick thought on {title}\n\nHey,\n\nI saw this piece on {source} and thought of you.\n\nKey takeaway: {takeaway}\n\nWorth a read when you have 5 minutes.\n\nBest,\n[Your Name]",
            takeaway = item.takeaway(),
        ),
    }
}
