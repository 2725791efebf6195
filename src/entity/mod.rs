mod note;
pub mod timestamp;

pub use note::Note;
