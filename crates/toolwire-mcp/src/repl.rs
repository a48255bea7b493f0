//! Interactive REPL for the Toolwire MCP server.
//!
//! Launch with `toolwire-mcp repl` to call tools by hand. Calls go through the
//! same validation and invocation path as `tools/call`.
//! Type `/help` for available commands, Tab for completion.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};
use serde_json::Value;

use crate::config::ServerConfig;
use crate::protocol::invoke_tool;
use crate::tools::{render_text, shared_store, ToolRegistry};
use crate::types::SUPPORTED_PROTOCOL_VERSIONS;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/tools", "List registered tools"),
    ("/call", "Call a tool: /call <name> [json arguments]"),
    ("/info", "Show server identity and protocol versions"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// REPL helper for tab completion of commands and tool names.
struct ToolHelper {
    tool_names: Vec<String>,
}

impl Completer for ToolHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        if let Some(partial) = input.strip_prefix("/call ") {
            if !partial.contains(' ') {
                let matches: Vec<Pair> = self
                    .tool_names
                    .iter()
                    .filter(|n| n.starts_with(partial))
                    .map(|n| Pair {
                        display: n.clone(),
                        replacement: format!("{n} "),
                    })
                    .collect();
                return Ok((input.len() - partial.len(), matches));
            }
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for ToolHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for ToolHelper {}
impl Validator for ToolHelper {}
impl Helper for ToolHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Run the interactive REPL.
pub fn run(config: ServerConfig) -> anyhow::Result<()> {
    let registry = ToolRegistry::builtin(shared_store(), config.server_info())?;

    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1m{} v{}\x1b[0m \x1b[90m\u{2014} {} tools loaded\x1b[0m",
        config.name,
        config.version,
        registry.len()
    );
    eprintln!();
    eprintln!(
        "    Press \x1b[36m/\x1b[0m to browse commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<ToolHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(ToolHelper {
        tool_names: registry.list().map(|d| d.name.clone()).collect(),
    }));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".toolwire_mcp_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let prompt = " \x1b[36mtools>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                        break;
                    }
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "info" => cmd_info(&config, &registry),
                    "tools" => cmd_tools(&registry),
                    "call" => cmd_call(args, &registry),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
    eprintln!("  Example: /call add_numbers {{\"a\": 15, \"b\": 25}}");
    eprintln!();
}

fn cmd_info(config: &ServerConfig, registry: &ToolRegistry) {
    eprintln!();
    eprintln!("  Server:   {} v{}", config.name, config.version);
    eprintln!("  Protocol: {}", SUPPORTED_PROTOCOL_VERSIONS.join(", "));
    eprintln!("  Tools:    {}", registry.len());
    eprintln!();
}

fn cmd_tools(registry: &ToolRegistry) {
    eprintln!();
    eprintln!("  {} tools available:", registry.len());
    eprintln!();
    for tool in registry.list() {
        let params: Vec<String> = tool
            .input_schema
            .params()
            .iter()
            .map(|p| {
                if p.required {
                    p.name.clone()
                } else {
                    format!("[{}]", p.name)
                }
            })
            .collect();
        eprintln!(
            "    {:<26} {} \x1b[90m({})\x1b[0m",
            tool.name,
            tool.description,
            params.join(", ")
        );
    }
    eprintln!();
}

fn cmd_call(args: &str, registry: &ToolRegistry) {
    let mut parts = args.splitn(2, ' ');
    let name = parts.next().unwrap_or("").trim();
    if name.is_empty() {
        eprintln!("  Usage: /call <name> [json arguments]");
        return;
    }

    let arguments: Option<Value> = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("  Invalid JSON arguments: {e}");
                return;
            }
        },
    };

    let tool = match registry.lookup(name) {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("  {e}");
            return;
        }
    };

    let result = invoke_tool(&tool, arguments.as_ref());
    eprintln!();
    if result.is_error {
        eprintln!("  \x1b[31merror\x1b[0m {}", result.text().unwrap_or(""));
    } else {
        eprintln!("  {}", result.text().unwrap_or("").replace('\n', "\n  "));
        if let Some(structured) = &result.structured_content {
            let rendered = render_text(structured);
            if Some(rendered.as_str()) != result.text() {
                eprintln!();
                eprintln!("  \x1b[90m{}\x1b[0m", rendered.replace('\n', "\n  "));
            }
        }
    }
    eprintln!();
}
