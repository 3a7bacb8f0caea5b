// skypebot - a chat bot that answers a handful of keyword commands
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{Context, Result};
use skypebot_lib::{telemetry, Config, Entry, Interpreter, Session};
use std::env;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    let config = Config::load().context("could not load skypebot config")?;
    telemetry::init_with_level(&config.log_level);

    let command = args.get(1).map(String::as_str).unwrap_or("chat");
    let rest = args.get(2..).unwrap_or_default();

    match command {
        "chat" | "--json" => handle_chat(&config, &args[1..]).await,
        "exec" => handle_exec(&config, rest),
        "version" | "-v" | "--version" => {
            println!("skypebot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

async fn handle_chat(config: &Config, args: &[String]) -> Result<()> {
    let json = args.iter().any(|arg| arg == "--json");

    let mut interpreter = Interpreter::from_config(config);
    let mut session = Session::for_user(&config.default_user);
    info!(user = %session.user_id(), "chat session started");

    if !json {
        println!("skypebot v{} - type 'help' for commands, 'quit' to leave", env!("CARGO_PKG_VERSION"));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !json {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };

        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        // blank lines produce nothing, just prompt again
        if let Some(reply) = interpreter.process(&mut session, &line) {
            println!("{}", render(&reply, json)?);
        }
    }

    info!(
        entries = session.transcript().len(),
        todos = session.todos().len(),
        "chat session ended"
    );

    Ok(())
}

fn handle_exec(config: &Config, args: &[String]) -> Result<()> {
    let json = args.iter().any(|arg| arg == "--json");
    let line = args
        .iter()
        .filter(|arg| *arg != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let mut interpreter = Interpreter::from_config(config);
    let mut session = Session::for_user(&config.default_user);

    if interpreter.process(&mut session, &line).is_none() {
        eprintln!("Error: No command provided");
        return Ok(());
    }

    if json {
        let entries = serde_json::to_string_pretty(session.transcript().entries())
            .context("could not serialize transcript")?;
        println!("{}", entries);
    } else if let Some(reply) = session.transcript().entries().last() {
        println!("{}", reply);
    }

    Ok(())
}

fn render(entry: &Entry, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(entry)?)
    } else {
        Ok(entry.to_string())
    }
}

fn print_usage() {
    println!(
        r#"skypebot v{} - a chat bot for your terminal

USAGE:
    skypebot [COMMAND] [OPTIONS]

COMMANDS:
    chat [--json]            Start an interactive chat (default)
    exec <line> [--json]     Run one chat command and print the reply
    version                  Show version
    help                     Show this help

CHAT COMMANDS:
    ping, help, history [filter], whatdayis [today|M/d|weekday],
    say <text>, hello, inoffice, lunch, calculator <a> <op> <b>,
    todo add|list|done, mynewsongis <song>, playmysong,
    lorem [count], play <song>, vol <0-100>, twitter <query>, define <word>

EXAMPLES:
    skypebot
    skypebot exec calculator 5 + 7
    skypebot exec --json todo add Buy milk

CONFIGURATION:
    ~/.skypebot/config.toml (or $SKYPEBOT_CONFIG). RUST_LOG overrides log_level.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
