use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    Agent,
    User,
    Lead,
    Visitor,
}

impl ParticipantKind {
    /// Leads and visitors write from outside the team.
    pub fn is_external(&self) -> bool {
        use ParticipantKind::*;
        matches!(self, Lead | Visitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: Uuid,
    #[serde(default)]
    pub display_name: Option<String>,
    pub kind: ParticipantKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content: String,
    pub app_user: AppUser,
    pub created_at: DateTime<Utc>,
}

/// Live push payload: a message plus the conversation it lands in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub conversation_key: Uuid,
    pub message: Message,
}

/// Lightweight roster entry, distinct from a conversation's full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub key: Uuid,
    pub main_participant: AppUser,
    #[serde(default)]
    pub last_message: Option<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub prev_page: Option<u32>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub collection: Vec<ConversationSummary>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationSort {
    #[default]
    Newest,
    Oldest,
}

impl ConversationSort {
    pub fn as_str(&self) -> &'static str {
        use ConversationSort::*;
        match self {
            Newest => "newest",
            Oldest => "oldest",
        }
    }
}

impl fmt::Display for ConversationSort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationFilter {
    #[default]
    Opened,
    Closed,
}

impl ConversationFilter {
    pub fn as_str(&self) -> &'static str {
        use ConversationFilter::*;
        match self {
            Opened => "opened",
            Closed => "closed",
        }
    }
}

impl fmt::Display for ConversationFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
