use async_trait::async_trait;
use uuid::Uuid;

use crate::AppResult;

use super::{ConversationFilter, ConversationSort, ConversationSummary, Message, PageResult};

/// Remote source of conversation data. Retries and timeouts live behind
/// this seam, not in the roster.
#[async_trait]
pub trait ConversationFetch: Send + Sync {
    async fn conversations_page(
        &self,
        app_key: &str,
        page: u32,
        sort: ConversationSort,
        filter: ConversationFilter,
    ) -> AppResult<PageResult>;

    async fn conversation_with_last_message(
        &self,
        app_key: &str,
        key: Uuid,
    ) -> AppResult<ConversationSummary>;
}

pub trait SoundPlayer: Send + Sync {
    fn play_sound(&self);
}

/// Receives messages for the conversation the operator has open.
pub trait TranscriptSink: Send + Sync {
    fn append_message(&self, message: &Message);
}
