pub mod cli;
pub mod entity;
pub mod error;
pub mod storage;

pub use entity::Note;
pub use error::{NoteError, Result};
pub use storage::{Clock, ManualClock, NoteStore, SystemClock};
