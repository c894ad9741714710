use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use uuid::Uuid;

use crate::AppResult;

use super::{
    ConversationFetch, ConversationFilter, ConversationSort, ConversationSummary, MessageEvent,
    PageMeta, PageResult, SoundPlayer, TranscriptSink,
};

/// What the UI renders from. Snapshots are immutable; every roster
/// mutation swaps in a fresh one, so holders can diff cheaply.
#[derive(Debug, Clone, Default)]
pub struct RosterSnapshot {
    pub collection: Vec<ConversationSummary>,
    pub meta: PageMeta,
    pub sort: ConversationSort,
    pub filter: ConversationFilter,
    pub loading: bool,
}

enum FetchTicket {
    Leader(watch::Sender<bool>),
    Joiner(watch::Receiver<bool>),
}

pub struct ConversationRoster {
    app_key: String,
    api: Arc<dyn ConversationFetch>,
    sounds: Arc<dyn SoundPlayer>,
    transcript: Arc<dyn TranscriptSink>,
    state: Mutex<Arc<RosterSnapshot>>,
    // one in-flight summary fetch per unseen conversation key
    pending: Mutex<HashMap<Uuid, watch::Receiver<bool>>>,
}

impl ConversationRoster {
    pub fn new(
        app_key: impl Into<String>,
        api: Arc<dyn ConversationFetch>,
        sounds: Arc<dyn SoundPlayer>,
        transcript: Arc<dyn TranscriptSink>,
    ) -> ConversationRoster {
        ConversationRoster {
            app_key: app_key.into(),
            api,
            sounds,
            transcript,
            state: Mutex::new(Arc::new(RosterSnapshot::default())),
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn snapshot(&self) -> Arc<RosterSnapshot> {
        self.state.lock().unwrap().clone()
    }

    fn swap(&self, update: impl FnOnce(&mut RosterSnapshot)) {
        let mut state = self.state.lock().unwrap();
        let mut next = (**state).clone();
        update(&mut next);
        *state = Arc::new(next);
    }

    /// Page 1 replaces the collection; later pages append in arrival
    /// order. On a failed fetch the collection and meta stay as they
    /// were, only the loading flag is cleared.
    pub async fn load_page(
        &self,
        sort: ConversationSort,
        filter: ConversationFilter,
        page: u32,
    ) -> AppResult<PageResult> {
        self.swap(|state| {
            state.loading = true;
            state.sort = sort;
            state.filter = filter;
        });

        let fetched = match self
            .api
            .conversations_page(&self.app_key, page, sort, filter)
            .await
        {
            Ok(fetched) => fetched,
            Err(err) => {
                self.swap(|state| state.loading = false);
                return Err(err);
            }
        };

        self.swap(|state| {
            if page > 1 {
                state.collection.extend(fetched.collection.iter().cloned());
            } else {
                state.collection = fetched.collection.clone();
            }
            state.meta = fetched.meta.clone();
            state.loading = false;
        });

        tracing::debug!(page, %sort, %filter, "loaded conversations page");
        Ok(fetched)
    }

    /// The next page under the current sort and filter, as tracked by the
    /// pagination meta.
    pub async fn load_more(&self) -> AppResult<PageResult> {
        let current = self.snapshot();
        let page = current.meta.next_page.unwrap_or(1);
        self.load_page(current.sort, current.filter, page).await
    }

    /// Reconcile one live message event. Known conversations get their
    /// last message replaced without moving in the list; unseen ones are
    /// fetched in full and prepended. `open_conversation` is whatever the
    /// operator is currently viewing.
    pub async fn apply_incoming_event(
        &self,
        event: MessageEvent,
        open_conversation: Option<Uuid>,
    ) -> AppResult<()> {
        let key = event.conversation_key;

        if open_conversation != Some(key) && event.message.app_user.kind.is_external() {
            self.sounds.play_sound();
        }

        let known = self.snapshot().collection.iter().any(|c| c.key == key);
        if known {
            self.swap(|state| {
                for conversation in &mut state.collection {
                    if conversation.key == key {
                        conversation.last_message = Some(event.message.clone());
                    }
                }
            });
            if open_conversation == Some(key) {
                self.transcript.append_message(&event.message);
            }
            return Ok(());
        }

        let ticket = {
            let mut pending = self.pending.lock().unwrap();
            match pending.get(&key) {
                Some(rx) => FetchTicket::Joiner(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(false);
                    pending.insert(key, rx);
                    FetchTicket::Leader(tx)
                }
            }
        };

        let done = match ticket {
            FetchTicket::Joiner(mut rx) => {
                // the fetch already under way will carry this event's
                // message as the conversation's last message
                tracing::debug!(%key, "summary fetch already in flight");
                let _ = rx.wait_for(|merged| *merged).await;
                return Ok(());
            }
            FetchTicket::Leader(tx) => tx,
        };

        let fetched = self
            .api
            .conversation_with_last_message(&self.app_key, key)
            .await;
        self.pending.lock().unwrap().remove(&key);

        let summary = match fetched {
            Ok(summary) => summary,
            Err(err) => {
                let _ = done.send(true);
                return Err(err);
            }
        };

        self.swap(|state| {
            // a page load may have brought the key in while we were away
            if let Some(existing) = state.collection.iter_mut().find(|c| c.key == key) {
                existing.last_message = summary.last_message.clone();
            } else {
                state.collection.insert(0, summary.clone());
            }
        });
        let _ = done.send(true);
        Ok(())
    }
}
