use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use crate::entity::Note;
use crate::error::{NoteError, Result};

pub const DEFAULT_NOTES_FILE: &str = "notes.json";

const INDENT: &[u8] = b"    ";

/// In-memory notes mirrored to a single JSON file.
///
/// Every successful mutation rewrites the whole backing file. If that write
/// fails the mutation still stands in memory and `NoteError::Persist` is
/// returned.
pub struct NoteStore<C: Clock = SystemClock> {
    path: PathBuf,
    notes: Vec<Note>,
    clock: C,
}

impl NoteStore<SystemClock> {
    /// Open the store at `path` using the wall clock.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_clock(path, SystemClock)
    }
}

impl<C: Clock> NoteStore<C> {
    /// Open the store at `path`. A missing file is an empty store; nothing is
    /// written until the first mutation.
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: C) -> Result<Self> {
        let path = path.into();

        let notes = match fs::read(&path) {
            Ok(bytes) => decode(&path, &bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(NoteError::load(&path, e)),
        };

        debug!(path = %path.display(), count = notes.len(), "loaded notes");

        Ok(Self { path, notes, clock })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// All notes in stored order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Append a new note and persist. Returns the assigned id.
    pub fn add(&mut self, title: String, body: String) -> Result<u64> {
        let id = self.next_id();
        let note = Note::new(id, title, body, self.clock.now());
        self.notes.push(note);
        info!(id, "added note");

        self.save()?;
        Ok(id)
    }

    /// Returns `false` without touching the file when `id` is unknown.
    pub fn update(&mut self, id: u64, title: String, body: String) -> Result<bool> {
        let now = self.clock.now();
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        note.update(title, body, now);
        info!(id, "updated note");

        self.save()?;
        Ok(true)
    }

    /// Returns `false` without touching the file when `id` is unknown.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };
        self.notes.remove(pos);
        info!(id, "deleted note");

        self.save()?;
        Ok(true)
    }

    /// Overwrite the backing file with every note, in order.
    pub fn save(&self) -> Result<()> {
        let bytes = encode(&self.notes)?;

        if let Err(source) = fs::write(&self.path, bytes) {
            warn!(path = %self.path.display(), error = %source, "failed to persist notes");
            return Err(NoteError::Persist {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), count = self.notes.len(), "saved notes");
        Ok(())
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// `len + 1`, so ids freed by a delete get handed out again. When that id
    /// is still held by a surviving note the lowest free id is used instead.
    fn next_id(&self) -> u64 {
        let candidate = self.notes.len() as u64 + 1;
        if self.position(candidate).is_none() {
            return candidate;
        }
        (1..candidate)
            .find(|id| self.position(*id).is_none())
            .unwrap_or(candidate)
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<Note>> {
    let notes: Vec<Note> = serde_json::from_slice(bytes).map_err(|e| NoteError::load(path, e))?;

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id) {
            return Err(NoteError::load(path, format!("duplicate note id {}", note.id)));
        }
    }

    Ok(notes)
}

fn encode(notes: &[Note]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    notes.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
