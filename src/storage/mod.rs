mod clock;
mod note_store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use note_store::{NoteStore, DEFAULT_NOTES_FILE};
