use std::io::{self, Read};
use std::path::Path;

use chrono::{DateTime, Local, Utc};

use super::shell::run_shell;
use crate::entity::Note;
use crate::error::{NoteError, Result};
use crate::storage::NoteStore;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local-time rendering used by every human-readable output.
pub(crate) fn display_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

/// One line of `list` output.
pub(crate) fn summary_line(note: &Note) -> String {
    format!("  {}. {} ({})", note.id, note.title, display_time(&note.created_at))
}

/// Parse a user-supplied note id.
pub fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| NoteError::InvalidId(raw.trim().to_string()))
}

fn read_body(body: Option<String>, stdin: bool) -> Result<Option<String>> {
    if stdin {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(Some(content));
    }
    Ok(body)
}

pub fn handle_add(
    file: &Path,
    title: String,
    body: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = NoteStore::open(file)?;

    let body = read_body(body, stdin)?.unwrap_or_default();
    let id = store.add(title, body)?;

    let note = store.get_by_id(id).ok_or(NoteError::NotFound(id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Created note {} - {}", note.id, note.title);
    }

    Ok(())
}

pub fn handle_list(file: &Path, json: bool) -> Result<()> {
    let store = NoteStore::open(file)?;
    let notes = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(notes)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        for note in notes {
            println!("{}", summary_line(note));
        }
    }

    Ok(())
}

pub fn handle_get(file: &Path, id: String, json: bool) -> Result<()> {
    let id = parse_id(&id)?;
    let store = NoteStore::open(file)?;

    let note = store.get_by_id(id).ok_or(NoteError::NotFound(id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Note {}", note.id);
        println!("Title: {}", note.title);
        println!("Created: {}", display_time(&note.created_at));
        println!("Updated: {}", display_time(&note.updated_at));
        if !note.body.is_empty() {
            println!("\n{}", note.body);
        }
    }

    Ok(())
}

pub fn handle_update(
    file: &Path,
    id: String,
    title: String,
    body: Option<String>,
    stdin: bool,
) -> Result<()> {
    let id = parse_id(&id)?;
    let mut store = NoteStore::open(file)?;

    let body = match read_body(body, stdin)? {
        Some(body) => body,
        None => match store.get_by_id(id) {
            Some(note) => note.body.clone(),
            None => return Err(NoteError::NotFound(id)),
        },
    };

    if !store.update(id, title, body)? {
        return Err(NoteError::NotFound(id));
    }
    println!("Updated note {}", id);

    Ok(())
}

pub fn handle_delete(file: &Path, id: String) -> Result<()> {
    let id = parse_id(&id)?;
    let mut store = NoteStore::open(file)?;

    if !store.delete(id)? {
        return Err(NoteError::NotFound(id));
    }
    println!("Deleted note {}", id);

    Ok(())
}

pub fn handle_shell(file: &Path) -> Result<()> {
    let mut store = NoteStore::open(file)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut store, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_id_accepts_padded_numbers() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert_eq!(parse_id(" 12 \n").unwrap(), 12);
    }

    #[test]
    fn test_parse_id_rejects_text() {
        for raw in ["abc", "", "-1", "1.5"] {
            let err = parse_id(raw).unwrap_err();
            assert!(matches!(err, NoteError::InvalidId(_)), "{:?} accepted", raw);
        }
    }

    #[test]
    fn test_summary_line_contains_id_and_title() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let note = Note::new(4, "Groceries".to_string(), "Milk".to_string(), ts);
        let line = summary_line(&note);
        assert!(line.starts_with("  4. Groceries ("));
        assert!(line.ends_with(&format!("({})", display_time(&ts))));
    }

    #[test]
    fn test_display_time_has_no_fraction() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let shown = display_time(&ts);
        assert_eq!(shown.len(), "2024-02-03 04:05:06".len());
        assert!(!shown.contains('.'));
    }
}
