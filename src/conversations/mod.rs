mod collaborators;
mod roster;
mod summary;

pub use collaborators::{ConversationFetch, SoundPlayer, TranscriptSink};
pub use roster::{ConversationRoster, RosterSnapshot};
pub use summary::{
    AppUser, ConversationFilter, ConversationSort, ConversationSummary, Message, MessageEvent,
    PageMeta, PageResult, ParticipantKind,
};
