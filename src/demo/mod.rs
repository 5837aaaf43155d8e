//! Live email-generation demo: templates, typing sequencer, clipboard.

pub mod clipboard;
pub mod routes;
pub mod sequencer;
pub mod template;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use routes::demo_routes;
pub use sequencer::{TypingSequencer, TypingState};
pub use template::{EmailTemplate, builtin_templates};
