//! Interactive viewer REPL.
//!
//! Every accepted line triggers one full invocation: the table is
//! recomputed, the selection reconciled against the session store, and the
//! screen redrawn. Nothing except the store survives from one line to the
//! next, so quitting and restarting the REPL on a persistent session
//! resumes exactly where the user left off.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;
use keylens_application::{ViewerRender, ViewerUseCase};
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::output;

/// REPL helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/categories".to_string(),
                "/category".to_string(),
                "/toggle".to_string(),
                "/clear".to_string(),
                "/raw".to_string(),
                "/reload".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
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

impl Highlighter for ReplHelper {
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

impl Hinter for ReplHelper {
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

impl Validator for ReplHelper {}

/// What the REPL remembers between lines. Only UI navigation state; the
/// selection itself lives in the session store.
#[derive(Default)]
struct ReplState {
    category: Option<String>,
    last_render: Option<ViewerRender>,
}

/// Runs the interactive viewer until the user quits.
pub async fn run(viewer: &ViewerUseCase) -> Result<()> {
    let helper = ReplHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== KeyLens ===".bright_magenta().bold());
    println!(
        "{}",
        "Pick a category with '/category <name>', toggle a row with '/toggle <rank>'. Type '/help' for all commands or 'quit' to exit."
            .bright_black()
    );
    println!();

    let mut state = ReplState::default();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(e) = dispatch(viewer, &mut state, trimmed).await {
                    eprintln!("{}", format!("Error: {e}").red());
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

async fn dispatch(viewer: &ViewerUseCase, state: &mut ReplState, input: &str) -> Result<()> {
    let (command, arg) = match input.split_once(' ') {
        Some((command, arg)) => (command, arg.trim()),
        None => (input, ""),
    };

    match command {
        "/categories" => {
            output::print_categories(&viewer.categories().await?);
        }
        "/category" => {
            if arg.is_empty() {
                println!("{}", "Usage: /category <name>".bright_black());
                return Ok(());
            }
            invoke(viewer, state, arg.to_string(), HashMap::new()).await?;
        }
        "/toggle" => {
            let Some(category) = state.category.clone() else {
                println!("{}", "Pick a category first with '/category <name>'.".yellow());
                return Ok(());
            };
            let Some(flags) = toggle_flags(state, arg) else {
                println!(
                    "{}",
                    format!("No row matches '{arg}'. Use a rank number or the exact keyword.")
                        .yellow()
                );
                return Ok(());
            };
            invoke(viewer, state, category, flags).await?;
        }
        "/clear" => {
            let Some(category) = state.category.clone() else {
                println!("{}", "Pick a category first with '/category <name>'.".yellow());
                return Ok(());
            };
            let render = viewer.clear(&category).await?;
            output::print_render(&render);
            state.last_render = Some(render);
        }
        "/raw" => {
            output::print_raw(&viewer.raw_records().await?);
        }
        "/reload" => {
            viewer.reload_catalog().await;
            println!("{}", "Catalog cache dropped; next view reloads the file.".bright_black());
            if let Some(category) = state.category.clone() {
                invoke(viewer, state, category, HashMap::new()).await?;
            }
        }
        "/help" => print_help(),
        _ => {
            println!("{}", "Unknown command".bright_black());
        }
    }

    Ok(())
}

/// Runs one invocation and redraws, remembering the render for rank lookup.
async fn invoke(
    viewer: &ViewerUseCase,
    state: &mut ReplState,
    category: String,
    flags: HashMap<String, bool>,
) -> Result<()> {
    match viewer.render(&category, &flags).await {
        Ok(render) => {
            output::print_render(&render);
            state.category = Some(category);
            state.last_render = Some(render);
        }
        Err(e) if e.is_empty_category() => {
            output::print_empty_category(&category);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Builds the single-toggle payload for a row named by rank or keyword.
fn toggle_flags(state: &ReplState, arg: &str) -> Option<HashMap<String, bool>> {
    let render = state.last_render.as_ref()?;

    let row = match arg.parse::<u32>() {
        Ok(rank) => render.rows.iter().find(|r| r.rank == rank),
        Err(_) => render.rows.iter().find(|r| r.keyword == arg),
    }?;

    Some(HashMap::from([(row.keyword.clone(), !row.selected)]))
}

fn print_help() {
    println!("{}", "Commands".bright_magenta().bold());
    println!("  /categories          list the selectable categories");
    println!("  /category <name>     show the ranked table for a category");
    println!("  /toggle <rank|word>  toggle the checkbox of one row");
    println!("  /clear               clear the current selection");
    println!("  /raw                 dump the raw catalog records");
    println!("  /reload              reload the catalog file");
    println!("  /help                this help");
    println!("  quit                 exit the viewer");
}
