mod highlighter;
mod lexer;
mod prompt;
mod validator;

use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;

use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{
    EditCommand, Emacs, FileBackedHistory, KeyCode, KeyModifiers, Keybindings, Reedline,
    ReedlineEvent, Signal, default_emacs_keybindings,
};
use rylisp::{render_error_to, render_error_to_no_color};
use rylisp_core::{
    evaluator::evaluate,
    parser::{self, DEFAULT_MAX_DEPTH},
};

use crate::{highlighter::Highlighter, prompt::RyLispPrompt, validator::ParenValidator};

const HISTORY_CAPACITY: usize = 1000;

/// RyLisp - prefix-notation integer arithmetic
#[derive(Parser, Debug)]
#[command(name = "rylisp")]
#[command(about = "Evaluate RyLisp expressions", long_about = None)]
struct Args {
    /// Print the parsed syntax tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Maximum parenthesis nesting accepted by the parser
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// History file for the interactive prompt
    /// (defaults to rylisp/history.txt in the user data directory)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("rylisp").join("history.txt"))
}

fn setup_reedline(history_file: Option<PathBuf>) -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(ParenValidator))
        .with_edit_mode(edit_mode);

    // Without a usable file, reedline keeps history in memory only.
    let Some(path) = history_file.or_else(default_history_path) else {
        return line_editor;
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("cannot create history directory {}: {}", parent.display(), e);
        }
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
        Ok(history) => {
            tracing::debug!("using history file {}", path.display());
            line_editor = line_editor.with_history(Box::new(history));
        }
        Err(e) => {
            tracing::warn!("history file {} unavailable: {}", path.display(), e);
        }
    }

    line_editor
}

/// Interpret one line of input: the value goes to `out`, a parse error is
/// rendered to `err`. Blank input prints nothing.
fn interpret_input(
    input: &str,
    debug_parse: bool,
    max_depth: usize,
    use_color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    if input.trim().is_empty() {
        return Ok(());
    }

    let arena = Bump::new();
    // Parse
    let tree = match parser::parse_with_max_depth(&arena, input, max_depth) {
        Ok(tree) => tree,
        Err(e) if use_color => return render_error_to(&e, err),
        Err(e) => return render_error_to_no_color(&e, err),
    };

    if debug_parse {
        writeln!(out, "=== Syntax Tree ===")?;
        writeln!(out, "{}", tree)?;
    }

    // Evaluate
    writeln!(out, "{}", evaluate(tree))
}

fn interpret_to_console(input: &str, args: &Args) -> Result<()> {
    interpret_input(
        input,
        args.debug_parse,
        args.max_depth,
        atty::is(atty::Stream::Stderr),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .into_diagnostic()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RYLISP_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("RYLISP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_to_console(expr, &args)?;
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline(args.history_file.clone());
        let prompt = RyLispPrompt;

        println!("RyLisp Version 0.0.0.0.0.0.1");
        println!("Press Ctrl-C to Exit\n");

        loop {
            match line_editor.read_line(&prompt).into_diagnostic()? {
                Signal::Success(buffer) => {
                    interpret_to_console(&buffer, &args)?;
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            interpret_to_console(&line, &args)?;
        }
    }

    Ok(())
}
