//! Typing sequencer — the timed reveal behind the landing page live demo.
//!
//! A reveal is a spawned task that advances the shared [`TypingState`]
//! through timer ticks: subject character by character, a short pause, then
//! body word by word. Every `start()` bumps a generation counter; a task
//! whose generation is stale stops touching state, so at most one reveal is
//! ever live and a superseded sequence never lands another character.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::TypingConfig;
use crate::error::ClipboardError;

use super::clipboard::Clipboard;
use super::template::EmailTemplate;

/// Observable state of the demo, fanned out over a watch channel.
#[derive(Debug, Clone, Serialize)]
pub struct TypingState {
    /// Index of the active template in the fixed list.
    pub active_template: usize,
    /// Revealed-so-far prefix of the resolved subject.
    pub revealed_subject: String,
    /// Revealed-so-far word accumulation of the resolved body.
    pub revealed_body: String,
    /// True while a reveal sequence is in progress.
    pub is_running: bool,
    /// Transient "copied" acknowledgement.
    pub copied: bool,
}

impl TypingState {
    fn initial() -> Self {
        Self {
            active_template: 0,
            revealed_subject: String::new(),
            revealed_body: String::new(),
            is_running: false,
            copied: false,
        }
    }
}

/// Owns the template list and drives the reveal sequence.
pub struct TypingSequencer {
    templates: Vec<EmailTemplate>,
    config: TypingConfig,
    clipboard: Arc<dyn Clipboard>,
    state: watch::Sender<TypingState>,
    active: AtomicUsize,
    reveal_gen: AtomicU64,
    copied_gen: AtomicU64,
}

impl TypingSequencer {
    /// Create a sequencer over a non-empty template list.
    pub fn new(
        templates: Vec<EmailTemplate>,
        config: TypingConfig,
        clipboard: Arc<dyn Clipboard>,
    ) -> Arc<Self> {
        assert!(!templates.is_empty(), "sequencer needs at least one template");
        let (state, _rx) = watch::channel(TypingState::initial());
        Arc::new(Self {
            templates,
            config,
            clipboard,
            state,
            active: AtomicUsize::new(0),
            reveal_gen: AtomicU64::new(0),
            copied_gen: AtomicU64::new(0),
        })
    }

    /// Subscribe to state updates. Each WS client calls this.
    pub fn subscribe(&self) -> watch::Receiver<TypingState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> TypingState {
        self.state.borrow().clone()
    }

    pub fn templates(&self) -> &[EmailTemplate] {
        &self.templates
    }

    /// Index of the active template.
    pub fn active_index(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// The active template.
    pub fn current_template(&self) -> &EmailTemplate {
        &self.templates[self.active_index()]
    }

    /// Begin a reveal of the active template, superseding any prior reveal.
    ///
    /// Resets the revealed strings, marks the sequence running, and spawns
    /// the timer task. The returned handle completes when the reveal finishes
    /// or notices it was superseded.
    pub fn start(self: &Arc<Self>) -> JoinHandle<()> {
        let generation = self.reveal_gen.fetch_add(1, Ordering::SeqCst) + 1;
        let index = self.active_index();
        let template = self.templates[index].clone();

        self.state.send_modify(|s| {
            s.active_template = index;
            s.revealed_subject.clear();
            s.revealed_body.clear();
            s.is_running = true;
        });
        debug!(template = index, generation, "reveal started");

        let this = Arc::clone(self);
        tokio::spawn(async move { this.run_reveal(generation, template).await })
    }

    /// Advance to the next template, wrapping after the last, and restart.
    pub fn cycle(self: &Arc<Self>) -> JoinHandle<()> {
        let next = (self.active_index() + 1) % self.templates.len();
        self.active.store(next, Ordering::SeqCst);
        self.start()
    }

    /// Export the fully resolved active template to the clipboard
    /// collaborator and raise the transient `copied` flag, which clears on
    /// its own after the configured display duration.
    ///
    /// Clipboard failures are non-fatal: state is left untouched and the
    /// error is handed back as a notice.
    pub async fn copy_text(self: &Arc<Self>) -> Result<String, ClipboardError> {
        let text = self.current_template().export_text();
        if let Err(e) = self.clipboard.write_text(&text).await {
            warn!(error = %e, "clipboard hand-off failed");
            return Err(e);
        }

        self.state.send_modify(|s| s.copied = true);

        // A newer copy supersedes this one's pending clear.
        let generation = self.copied_gen.fetch_add(1, Ordering::SeqCst) + 1;
        let this = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(this.config.copied_display).await;
            if this.copied_gen.load(Ordering::SeqCst) == generation {
                this.state.send_modify(|s| s.copied = false);
            }
        });

        Ok(text)
    }

    async fn run_reveal(&self, generation: u64, template: EmailTemplate) {
        let subject = template.resolved_subject();
        let body = template.resolved_body();

        // Subject: one character per tick, strictly in order.
        let chars: Vec<char> = subject.chars().collect();
        for i in 1..=chars.len() {
            tokio::time::sleep(self.config.char_interval).await;
            let prefix: String = chars[..i].iter().collect();
            if !self.apply_if_current(generation, |s| s.revealed_subject = prefix) {
                return;
            }
        }

        tokio::time::sleep(self.config.section_pause).await;

        // Body: one space-delimited word per tick. Splitting on single
        // spaces keeps newlines inside the tokens, so the rejoined text
        // reproduces the resolved body exactly.
        let mut revealed = String::new();
        for (i, word) in body.split(' ').enumerate() {
            tokio::time::sleep(self.config.word_interval).await;
            if i > 0 {
                revealed.push(' ');
            }
            revealed.push_str(word);
            let snapshot = revealed.clone();
            if !self.apply_if_current(generation, |s| s.revealed_body = snapshot) {
                return;
            }
        }

        if self.apply_if_current(generation, |s| s.is_running = false) {
            debug!(generation, "reveal complete");
        }
    }

    /// Apply a state mutation only if this reveal is still the live one.
    /// The generation check runs inside the watch lock, so a superseding
    /// `start()`'s reset can never be overwritten by a stale tick.
    fn apply_if_current(&self, generation: u64, apply: impl FnOnce(&mut TypingState)) -> bool {
        let mut live = true;
        self.state.send_modify(|s| {
            if self.reveal_gen.load(Ordering::SeqCst) == generation {
                apply(s);
            } else {
                live = false;
            }
        });
        live
    }
}
