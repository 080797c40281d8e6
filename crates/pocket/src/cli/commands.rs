use super::render::{
    print_error, print_messages, render_counts, render_profile, render_todo_list,
};
use super::setup::{
    profile_help, rest_of_line, split_line, todo_help, Cli, Commands, ProfileCommand, ProfileLine,
    TodoCommand, TodoLine,
};
use super::terminal::{Input, TerminalConfirmer, TerminalPicker};
use chrono::Utc;
use clap::Parser;
use console::Term;
use pocketapp::api::PocketApi;
use pocketapp::commands::CmdResult;
use pocketapp::config::PocketConfig;
use pocketapp::error::{PocketError, Result};
use pocketapp::media::ImageSource;
use pocketapp::model::ProfileField;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "POCKET_LOG";

struct AppContext {
    api: PocketApi,
    config: PocketConfig,
    input: Input,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PocketConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    if !config.color || !Term::stdout().is_term() {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Todo) => todo_session(&mut init_context(config)),
        Some(Commands::Profile) => profile_session(&mut init_context(config)),
        Some(Commands::Config) => handle_config(&config),
        None => {
            println!("{}", <Cli as clap::CommandFactory>::command().render_help());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "pocket=debug,pocketapp=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(config: PocketConfig) -> AppContext {
    AppContext {
        api: PocketApi::new(),
        config,
        input: Input::stdin(),
    }
}

/// Runs `handle` on each line until it says quit or input ends. Bad input
/// is reported and the session carries on. `handle` gets the raw line for
/// free text alongside its words for parsing.
fn session_loop<F>(ctx: &mut AppContext, prompt: &str, mut handle: F) -> Result<()>
where
    F: FnMut(&mut AppContext, &str, &[&str]) -> Result<Flow>,
{
    info!(prompt, "session started");
    while let Some(line) = ctx.input.read_line(prompt)? {
        let words = split_line(&line);
        if words.is_empty() {
            continue;
        }
        match handle(ctx, &line, &words) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(PocketError::Validation(e)) => print_error(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
    info!("session ended, discarding state");
    Ok(())
}

// --- Todo session ---

fn todo_session(ctx: &mut AppContext) -> Result<()> {
    if ctx.input.is_attended() {
        println!("Todo App. Type 'help' for commands.");
    }
    session_loop(ctx, "todo> ", handle_todo_line)
}

fn handle_todo_line(ctx: &mut AppContext, raw: &str, words: &[&str]) -> Result<Flow> {
    let line = match TodoLine::try_parse_from(words) {
        Ok(line) => line,
        Err(e) => {
            print_error(e.to_string().trim_end());
            return Ok(Flow::Continue);
        }
    };

    match line.command {
        TodoCommand::Add { .. } => {
            let result = ctx.api.add_todo(rest_of_line(raw, 1))?;
            finish_todo_change(ctx, &result);
        }
        TodoCommand::Toggle { index } => {
            let id = ctx.api.todo_id_at(&index)?;
            let result = ctx.api.toggle_todo(&id)?;
            finish_todo_change(ctx, &result);
        }
        TodoCommand::Delete { index } => {
            let id = ctx.api.todo_id_at(&index)?;
            let mut confirmer = TerminalConfirmer::new(&mut ctx.input);
            let result = ctx.api.delete_with(id, &mut confirmer);
            finish_todo_change(ctx, &result);
        }
        TodoCommand::Clear => {
            let mut confirmer = TerminalConfirmer::new(&mut ctx.input);
            let result = ctx.api.clear_completed_with(&mut confirmer);
            finish_todo_change(ctx, &result);
        }
        TodoCommand::List { json } => {
            let result = ctx.api.list_todos();
            if json {
                println!("{}", serde_json::to_string_pretty(&result.listed_todos)?);
            } else {
                if ctx.config.show_counts {
                    if let Some(counts) = render_counts(&ctx.api.counts()) {
                        println!("{}", counts);
                    }
                }
                print!("{}", render_todo_list(&result.listed_todos, Utc::now()));
            }
        }
        TodoCommand::Help => print!("{}", todo_help()),
        TodoCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn finish_todo_change(ctx: &AppContext, result: &CmdResult) {
    print_messages(&result.messages);
    if ctx.config.show_counts && !result.affected_todos.is_empty() {
        if let Some(counts) = render_counts(&ctx.api.counts()) {
            println!("{}", counts);
        }
    }
}

// --- Profile session ---

fn profile_session(ctx: &mut AppContext) -> Result<()> {
    if ctx.input.is_attended() {
        println!("Profile editor. Type 'help' for commands.");
    }
    session_loop(ctx, "profile> ", handle_profile_line)
}

fn handle_profile_line(ctx: &mut AppContext, raw: &str, words: &[&str]) -> Result<Flow> {
    let line = match ProfileLine::try_parse_from(words) {
        Ok(line) => line,
        Err(e) => {
            print_error(e.to_string().trim_end());
            return Ok(Flow::Continue);
        }
    };

    let result = match line.command {
        ProfileCommand::Set { field, .. } => {
            let field: ProfileField = field.parse()?;
            ctx.api.update_profile_field(field, rest_of_line(raw, 2))?;
            CmdResult::default()
        }
        ProfileCommand::Save => ctx.api.save_profile()?,
        ProfileCommand::Edit => ctx.api.edit_profile(),
        ProfileCommand::Toggle => ctx.api.toggle_profile_mode(),
        ProfileCommand::Show { json } => {
            let result = ctx.api.show_profile();
            if json {
                println!("{}", serde_json::to_string_pretty(&result.profile)?);
                return Ok(Flow::Continue);
            }
            result
        }
        ProfileCommand::Photo { source } => {
            let source: ImageSource = match source.parse() {
                Ok(source) => source,
                Err(msg) => {
                    print_error(&msg);
                    return Ok(Flow::Continue);
                }
            };
            let mut picker = TerminalPicker::new(&mut ctx.input, &ctx.config);
            ctx.api.set_profile_image(&mut picker, source)
        }
        ProfileCommand::Permissions => {
            let mut picker = TerminalPicker::new(&mut ctx.input, &ctx.config);
            ctx.api.media_permissions(&mut picker)
        }
        ProfileCommand::Help => {
            print!("{}", profile_help());
            return Ok(Flow::Continue);
        }
        ProfileCommand::Quit => return Ok(Flow::Quit),
    };

    print_messages(&result.messages);
    if let Some(view) = &result.profile {
        print!("{}", render_profile(view));
    }
    Ok(Flow::Continue)
}

// --- Config ---

fn handle_config(config: &PocketConfig) -> Result<()> {
    match PocketConfig::default_path() {
        Some(path) => println!("# user config: {}", path.display()),
        None => println!("# user config: unavailable on this platform"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
