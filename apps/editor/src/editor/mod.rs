// Resume editor: document editing, checklist evaluation, bullet suggestions,
// export, and preview rendering. The engines are pure functions over
// `ResumeDocument`; only `handlers` touches shared state.

pub mod checklist;
pub mod document;
pub mod export;
pub mod handlers;
pub mod preview;
pub mod suggestions;
