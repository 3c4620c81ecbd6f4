//! Document properties written into the output head.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::markup::escape;

/// Document properties shown by the word processor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the keywords.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Stamp the creation date with the current time.
    pub fn created_now(mut self) -> Self {
        self.created = Some(Utc::now());
        self
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
            && self.created.is_none()
    }

    /// `<title>` plus an Office `DocumentProperties` island, or nothing when
    /// no property is set.
    pub fn to_head_markup(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut head = String::new();
        if let Some(ref title) = self.title {
            head.push_str(&format!("<title>{}</title>", escape(title)));
        }

        head.push_str("<!--[if gte mso 9]><xml><o:DocumentProperties>");
        let properties = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Keywords", &self.keywords),
        ];
        for (name, value) in properties {
            if let Some(value) = value {
                head.push_str(&format!("<o:{name}>{}</o:{name}>", escape(value)));
            }
        }
        if let Some(ref created) = self.created {
            head.push_str(&format!(
                "<o:Created>{}</o:Created>",
                created.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        head.push_str("</o:DocumentProperties></xml><![endif]-->");

        head
    }
}
