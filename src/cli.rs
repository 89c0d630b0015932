//! CLI interface for Meihua.
//!
//! Each subcommand is non-interactive: arguments in, text or JSON out.
//!
//! - `meihua cast <method> …` casts a reading, optionally saving it.
//! - `meihua history list|show|note|delete|clear` manages saved readings.
//! - `meihua prompt <id>` builds narration messages for a saved reading.
//! - `meihua table` lists the sixty-four hexagrams.
//!
//! Reading ids take a full UUID or unambiguous prefix.

mod cast;
mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use uuid::Uuid;

use meihua::hexagrams::strict_hexagram;
use meihua::model::{Hexagram, Trigram};
use meihua::perform_divination;
use meihua::prompt::{self, ChatTurn};
use meihua::storage::{HistoryEntry, Storage};

use crate::config::Config;

use cast::CastMethod;
use format::{format_entry, format_reading, format_table_row, short_id};

/// Meihua: Plum Blossom numerology.
#[derive(Debug, Parser)]
#[command(name = "meihua", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: cast, keep, narrate
  1. meihua cast number 3 7 --note "换工作？"
     → prints the reading and a reading ID (e.g. a3b0fc12)
  2. meihua history list
  3. meihua prompt a3b --question "三个月内会有变化吗？"

Casting:
  meihua cast time --lunar
  meihua cast text 梅花易数
  meihua cast direction 东南
  meihua cast sound 雷声"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cast a reading.
    Cast {
        #[command(subcommand)]
        method: CastMethod,

        /// Save the reading to history.
        #[arg(long, global = true)]
        save: bool,

        /// Attach a note to the saved reading. Implies `--save`.
        #[arg(long, global = true)]
        note: Option<String>,
    },

    /// Manage saved readings.
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Build the messages that narrate a saved reading through a language
    /// model, printed as JSON with their fingerprint.
    Prompt {
        /// Reading ID: full UUID or unambiguous prefix.
        id: String,

        /// What the asker wants to know.
        #[arg(long, conflicts_with = "chat")]
        question: Option<String>,

        /// Continue a conversation with this message instead.
        #[arg(long)]
        chat: Option<String>,

        /// Earlier turns of the conversation: a JSON array of
        /// `{"role": "user" | "assistant", "content": "..."}`.
        #[arg(long, requires = "chat")]
        turns: Option<PathBuf>,

        /// Persona for the model. Falls back to `MEIHUA_SYSTEM_PROMPT`,
        /// then `system-prompt` in the config.
        #[arg(long)]
        system_prompt: Option<String>,
    },

    /// List the sixty-four hexagrams.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List saved readings, newest first.
    List,

    /// Show one saved reading.
    Show { id: String },

    /// Replace a reading's note. Omit the note to clear it.
    Note { id: String, note: Option<String> },

    /// Delete one saved reading.
    Delete { id: String },

    /// Delete every saved reading.
    Clear,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Command::Cast { method, save, note } => {
            cmd_cast(config, storage, &method, save, note.as_deref(), json)
        }
        Command::History { command } => match command {
            HistoryCommand::List => cmd_list(storage, json),
            HistoryCommand::Show { id } => cmd_show(storage, &id, json),
            HistoryCommand::Note { id, note } => cmd_note(storage, &id, note.as_deref()),
            HistoryCommand::Delete { id } => cmd_delete(storage, &id),
            HistoryCommand::Clear => cmd_clear(storage),
        },
        Command::Prompt {
            id,
            question,
            chat,
            turns,
            system_prompt,
        } => {
            let entry = resolve_reading(storage, &id)?;
            let persona = config.system_prompt(system_prompt.as_deref());
            cmd_prompt(
                &entry,
                question.as_deref(),
                chat.as_deref(),
                turns.as_deref(),
                &persona,
            )
        }
        Command::Table => cmd_table(json),
    }
}

fn cmd_cast(
    config: &Config,
    storage: &Storage,
    method: &CastMethod,
    save: bool,
    note: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let input = method.to_input(config);
    let reading = perform_divination(&input).map_err(|e| e.to_string())?;

    let saved = if save || note.is_some() {
        let entry = storage
            .save_reading(&reading, note)
            .map_err(|e| format!("failed to save reading: {e}"))?;
        Some(entry)
    } else {
        None
    };

    if json {
        let out = match &saved {
            Some(entry) => serde_json::to_string_pretty(entry),
            None => serde_json::to_string_pretty(&reading),
        }
        .map_err(|e| format!("failed to serialize reading: {e}"))?;
        println!("{out}");
    } else {
        println!("{}", format_reading(&reading));
    }

    if let Some(entry) = saved {
        eprintln!("Saved as {}", short_id(entry.id));
    }
    Ok(())
}

fn cmd_list(storage: &Storage, json: bool) -> Result<(), String> {
    let entries = storage
        .list_readings()
        .map_err(|e| format!("failed to list readings: {e}"))?;

    if json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("No saved readings");
        return Ok(());
    }
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

fn cmd_show(storage: &Storage, id: &str, json: bool) -> Result<(), String> {
    let entry = resolve_reading(storage, id)?;
    if json {
        return print_json(&entry);
    }
    println!("{}", format_entry(&entry));
    println!();
    println!("{}", format_reading(&entry.reading));
    Ok(())
}

fn cmd_note(storage: &Storage, id: &str, note: Option<&str>) -> Result<(), String> {
    let entry = resolve_reading(storage, id)?;
    let updated = storage
        .update_note(entry.id, note)
        .map_err(|e| format!("failed to update note: {e}"))?;
    match updated.note {
        Some(note) => eprintln!("Reading {} noted: {note}", short_id(updated.id)),
        None => eprintln!("Reading {} note cleared", short_id(updated.id)),
    }
    Ok(())
}

fn cmd_delete(storage: &Storage, id: &str) -> Result<(), String> {
    let entry = resolve_reading(storage, id)?;
    storage
        .delete_reading(entry.id)
        .map_err(|e| format!("failed to delete reading: {e}"))?;
    eprintln!("Reading {} deleted", short_id(entry.id));
    Ok(())
}

fn cmd_clear(storage: &Storage) -> Result<(), String> {
    let removed = storage
        .clear_history()
        .map_err(|e| format!("failed to clear history: {e}"))?;
    eprintln!("Deleted {removed} reading(s)");
    Ok(())
}

fn cmd_prompt(
    entry: &HistoryEntry,
    question: Option<&str>,
    chat: Option<&str>,
    turns: Option<&Path>,
    persona: &str,
) -> Result<(), String> {
    let messages = match chat {
        Some(input) => {
            let history = match turns {
                Some(path) => read_turns(path)?,
                None => Vec::new(),
            };
            prompt::chat_messages(&entry.reading, &history, input, persona)
                .map_err(|e| e.to_string())?
        }
        None => prompt::insight_messages(&entry.reading, question, persona),
    };

    print_json(&serde_json::json!({
        "fingerprint": prompt::fingerprint(&messages),
        "messages": messages,
    }))
}

fn cmd_table(json: bool) -> Result<(), String> {
    let mut table: Vec<Hexagram> = Vec::with_capacity(64);
    for upper in Trigram::ALL {
        for lower in Trigram::ALL {
            table.push(strict_hexagram(upper, lower).map_err(|e| e.to_string())?);
        }
    }
    table.sort_by_key(|h| h.number);

    if json {
        return print_json(&table);
    }
    for hexagram in &table {
        println!("{}", format_table_row(hexagram));
    }
    Ok(())
}

fn read_turns(path: &Path) -> Result<Vec<ChatTurn>, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("invalid chat turns in {}: {e}", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Resolve a reading reference (full UUID or unambiguous prefix) to a saved
/// reading.
fn resolve_reading(storage: &Storage, reference: &str) -> Result<HistoryEntry, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage
            .load_reading(id)
            .map_err(|e| format!("reading not found: {e}"));
    }

    // Try as a prefix match against all saved readings.
    let entries = storage
        .list_readings()
        .map_err(|e| format!("failed to list readings: {e}"))?;

    let mut matches: Vec<HistoryEntry> = entries
        .into_iter()
        .filter(|e| e.id.to_string().starts_with(reference))
        .collect();

    match matches.len() {
        0 => Err(format!("no reading matching '{reference}'")),
        1 => Ok(matches.remove(0)),
        n => {
            let ids: Vec<String> = matches.iter().map(|e| short_id(e.id)).collect();
            Err(format!(
                "'{reference}' is ambiguous, matches {n} readings: {}",
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use meihua::model::DivinationInput;
    use tempfile::TempDir;

    fn storage_with(count: usize) -> (TempDir, Storage, Vec<HistoryEntry>) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let reading = perform_divination(&DivinationInput::Number {
            numbers: vec![3, 7],
        })
        .unwrap();
        let saved = (0..count)
            .map(|_| storage.save_reading(&reading, None).unwrap())
            .collect();
        (dir, storage, saved)
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolves_full_ids_and_prefixes() {
        let (_dir, storage, saved) = storage_with(1);
        let id = saved[0].id;

        assert_eq!(resolve_reading(&storage, &id.to_string()).unwrap().id, id);
        assert_eq!(resolve_reading(&storage, &short_id(id)).unwrap().id, id);
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let (_dir, storage, _) = storage_with(1);
        let err = resolve_reading(&storage, "zzz").unwrap_err();
        assert!(err.contains("no reading matching"));
    }

    #[test]
    fn empty_prefix_is_ambiguous_with_several_readings() {
        let (_dir, storage, _) = storage_with(2);
        let err = resolve_reading(&storage, "").unwrap_err();
        assert!(err.contains("ambiguous"));
    }

    #[test]
    fn number_cast_accepts_negatives() {
        let cli = Cli::try_parse_from(["meihua", "cast", "number", "-3", "7"]).unwrap();
        let Command::Cast { method, .. } = cli.command else {
            panic!("expected cast");
        };
        assert_eq!(
            method.to_input(&Config::default()),
            DivinationInput::Number {
                numbers: vec![-3, 7]
            }
        );
    }

    #[test]
    fn cast_errors_become_messages() {
        let (_dir, storage, _) = storage_with(0);
        let method = CastMethod::Number { numbers: vec![3] };
        let err = cmd_cast(&Config::default(), &storage, &method, true, None, false).unwrap_err();
        assert!(err.starts_with("invalid"), "{err}");
        assert!(storage.list_readings().unwrap().is_empty());
    }

    #[test]
    fn saved_cast_lands_in_history() {
        let (_dir, storage, _) = storage_with(0);
        let method = CastMethod::Number {
            numbers: vec![3, 7],
        };
        cmd_cast(&Config::default(), &storage, &method, false, Some("旅"), true).unwrap();
        let entries = storage.list_readings().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].note.as_deref(), Some("旅"));
    }

    #[test]
    fn empty_chat_input_is_an_error() {
        let (_dir, storage, saved) = storage_with(1);
        let entry = resolve_reading(&storage, &short_id(saved[0].id)).unwrap();
        let err = cmd_prompt(&entry, None, Some("  "), None, "persona").unwrap_err();
        assert_eq!(err, "chat input is empty");
    }

    #[test]
    fn table_covers_every_pair() {
        assert!(cmd_table(true).is_ok());
    }

    #[test]
    fn turns_require_chat() {
        let parsed = Cli::try_parse_from(["meihua", "prompt", "a3b", "--turns", "t.json"]);
        assert!(parsed.is_err());
    }
}
