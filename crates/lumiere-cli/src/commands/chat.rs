//! Interactive concierge chat.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use uuid::Uuid;

use lumiere_core::concierge::{ConciergeEngine, ConversationContext};
use lumiere_core::menu::{Catalog, MenuEntry};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sender {
    Guest,
    Concierge,
}

impl Sender {
    fn label(&self) -> &'static str {
        match self {
            Sender::Guest => "guest",
            Sender::Concierge => "concierge",
        }
    }
}

/// One line of the session transcript.
struct ChatMessage {
    id: String,
    sender: Sender,
    sent_at: String,
    text: String,
    recommendations: Vec<MenuEntry>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>, recommendations: Vec<MenuEntry>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            sent_at: Utc::now().to_rfc3339(),
            text: text.into(),
            recommendations,
        }
    }
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/history".to_string(), "/menu".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Runs the concierge REPL until the guest leaves.
pub fn run(catalog: Catalog) -> Result<()> {
    let engine = ConciergeEngine::new(catalog);
    let mut transcript: Vec<ChatMessage> = Vec::new();

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Lumière Concierge ===".bright_magenta().bold());
    println!(
        "{}",
        "Ask about moods, occasions, pairings or dietary needs. '/history' replays the session, '/menu' prints the card, 'quit' exits."
            .bright_black()
    );
    println!();

    let greeting = engine.initial_greeting();
    print_concierge(&greeting, &[]);
    transcript.push(ChatMessage::new(Sender::Concierge, &greeting, Vec::new()));

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Good night!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if trimmed == "/history" {
                    print_history(&transcript);
                    continue;
                }
                if trimmed == "/menu" {
                    super::menu::print_card(engine.catalog().entries());
                    continue;
                }

                // Each turn starts from a fresh default context; the engine
                // accepts context but no caller threads it between turns.
                let response = engine.respond(trimmed, &ConversationContext::default());

                transcript.push(ChatMessage::new(Sender::Guest, trimmed, Vec::new()));
                print_concierge(&response.reply, &response.recommendations);
                transcript.push(ChatMessage::new(
                    Sender::Concierge,
                    &response.reply,
                    response.recommendations,
                ));
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Good night!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

fn print_concierge(reply: &str, recommendations: &[MenuEntry]) {
    for line in reply.lines() {
        println!("{}", line.bright_blue());
    }
    for entry in recommendations {
        println!(
            "  {} {}",
            format!("{} ({})", entry.name, entry.price).bright_white(),
            entry.description.bright_black()
        );
    }
    println!();
}

fn print_history(transcript: &[ChatMessage]) {
    if transcript.is_empty() {
        println!("{}", "Nothing said yet.".bright_black());
        return;
    }
    for message in transcript {
        let short_id = &message.id[..8];
        println!(
            "{} {}",
            format!("[{} {} {}]", short_id, message.sender.label(), message.sent_at).bright_magenta(),
            message.text
        );
        for entry in &message.recommendations {
            println!("    {}", format!("* {}", entry.name).bright_black());
        }
    }
    println!();
}
