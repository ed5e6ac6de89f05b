use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use feed_core::EpisodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(EpisodeId),
    Reload,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => None,
        "r" | "reload" | "retry" => Some(Command::Reload),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        other => other.parse().ok().map(Command::Click),
    }
}

pub const HELP: &str = "commands: <episode id> select/unselect, r reload, h help, q quit";

/// Reads stdin on its own thread. The receiver disconnects at end of input.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
