//! rpncalc - interactive RPN calculator CLI
use rpncalc::repl::{ReplConfig, ReplEvent, ReplSession, RpnHelper, StateTransition};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::io;
use std::process;
use tracing::debug;

type LineEditor = Editor<RpnHelper, DefaultHistory>;

fn init_logging(config: &ReplConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();
}

/// Read one line from the editor and turn it into a session event
fn read_event(rl: &mut LineEditor, prompt: &str) -> Result<ReplEvent, ReadlineError> {
    match rl.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
                if let Some(helper) = rl.helper_mut() {
                    helper.add_to_history(line.clone());
                }
            }
            Ok(ReplEvent::LineSubmitted(line))
        }
        Err(ReadlineError::Interrupted) => Ok(ReplEvent::Interrupted),
        Err(ReadlineError::Eof) => Ok(ReplEvent::Eof),
        Err(err) => Err(err),
    }
}

fn run_repl(config: &ReplConfig) -> Result<(), String> {
    let mut rl =
        LineEditor::new().map_err(|e| format!("Failed to initialise line editor: {}", e))?;
    rl.set_helper(Some(RpnHelper::new(config)));

    let mut session = ReplSession::new(io::stdout(), io::stderr());
    session
        .print_banner()
        .map_err(|e| format!("Failed to write output: {}", e))?;

    loop {
        let event = read_event(&mut rl, &config.prompt)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        debug!(target: "rpncalc::repl", ?event, "event");

        let transition = session
            .process_event(event)
            .map_err(|e| format!("Failed to write output: {}", e))?;
        if transition == StateTransition::Exit {
            return Ok(());
        }
    }
}

fn main() {
    let config = ReplConfig::load();
    init_logging(&config);

    if let Err(e) = run_repl(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
