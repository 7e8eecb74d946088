//! Interactive divination session.
//!
//! Cooldown state lives for the life of the process: repeated questions
//! from the same identity are throttled unless the bypass is on, and the
//! state is cleared when the session ends.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use augur_engine::{DivinationService, EngineConfig, Request};

const HELP: &str = "\
Session Commands:
  <question>        Ask the oracle (answers are rate-limited)
  user <name>       Switch the asking identity
  op                Toggle the cooldown bypass
  help              Show this help
  quit              Exit the session";

enum Response {
    Text(String),
    Warning(String),
    Quit,
}

/// Run the interactive session loop over stdin.
pub fn run(user: &str, privileged: bool, seed: Option<u64>) -> Result<(), String> {
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let service = DivinationService::new(config);

    let mut user = user.to_string();
    let mut privileged = privileged;

    println!("  {} divination session as {user}", "Starting".bold());
    println!("  Each line is a question. Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            println!("{}\n", "usage: ask a question, or 'help'".yellow());
            continue;
        }

        match respond(&service, &mut user, &mut privileged, input) {
            Response::Quit => break,
            Response::Text(text) => println!("{text}\n"),
            Response::Warning(text) => println!("{}\n", text.yellow()),
        }
    }

    service.shutdown();
    Ok(())
}

fn respond(
    service: &DivinationService,
    user: &mut String,
    privileged: &mut bool,
    input: &str,
) -> Response {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd.as_str() {
        "quit" | "q" => Response::Quit,
        "help" => Response::Text(HELP.to_string()),
        "op" => {
            *privileged = !*privileged;
            Response::Text(format!(
                "Cooldown bypass {} for {user}.",
                if *privileged { "enabled" } else { "disabled" }
            ))
        }
        "user" if !rest.is_empty() => {
            *user = rest.to_string();
            Response::Text(format!("Now asking as {user}."))
        }
        _ => {
            let request = Request::from_player(user.clone(), *privileged, input);
            match service.dispatch(&request) {
                Ok(divination) => Response::Text(divination.to_string()),
                Err(e) => Response::Warning(e.to_string()),
            }
        }
    }
}
