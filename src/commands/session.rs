use crate::*;
use std::io::BufRead;
use std::path::PathBuf;

/// One parsed line of session input.
#[derive(Debug)]
enum ShellCommand {
    Act(Action),
    Append(String),
    Status,
    Quit,
    Nothing,
}

fn parse_line(line: &str) -> anyhow::Result<ShellCommand> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ShellCommand::Nothing);
    }
    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (trimmed, ""),
    };
    let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());
    let cmd = match cmd {
        "open" => {
            if rest.is_empty() {
                anyhow::bail!("usage: open PATH");
            }
            ShellCommand::Act(Action::FileSelected(PathBuf::from(rest)))
        }
        "tab" => ShellCommand::Act(Action::TabClicked(UnitType::from_tag(rest))),
        "section" => ShellCommand::Act(Action::SectionChosen(optional(rest))),
        "directive" => ShellCommand::Act(Action::DirectiveChosen(optional(rest))),
        "help" => {
            if rest.is_empty() {
                anyhow::bail!("usage: help DIRECTIVE");
            }
            ShellCommand::Act(Action::DirectiveFocused(rest.to_string()))
        }
        "cursor" => {
            let at: usize = rest
                .parse()
                .map_err(|_| anyhow::anyhow!("usage: cursor N (char offset)"))?;
            ShellCommand::Act(Action::SetCursor(at))
        }
        "insert" => ShellCommand::Act(Action::InsertDirective),
        "append" => ShellCommand::Append(rest.to_string()),
        "name" => ShellCommand::Act(Action::FilenameChanged(rest.to_string())),
        "preview" => ShellCommand::Act(Action::Preview),
        "save" => ShellCommand::Act(Action::Save),
        "status" => ShellCommand::Status,
        "quit" | "exit" => ShellCommand::Quit,
        other => anyhow::bail!("unknown command: {}", other),
    };
    Ok(cmd)
}

fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Detected(r) => format!("{}\t{}", r.unit_type, r.display_name),
        Outcome::Tab(p) => {
            let mut out = format!("tab {}: {}\n{}", p.tab, p.display_name, p.description);
            if let Some(section) = &p.section {
                out.push_str(&format!("\n[{}] {}", section, p.directives.join(" ")));
            }
            out
        }
        Outcome::Directives(list) => list.join("\n"),
        Outcome::Help(text) => text.clone(),
        Outcome::Inserted { cursor } => format!("inserted (cursor {})", cursor),
        Outcome::Cursor(at) => format!("cursor {}", at),
        Outcome::Preview(text) => text.trim_end_matches('\n').to_string(),
        Outcome::Saved(r) => format!("saved {} ({} bytes)", r.path, r.bytes),
        Outcome::Ignored(reason) => format!("ignored: {}", reason),
    }
}

/// Default handlers, plus audit entries for loads and saves.
fn session_dispatcher(audit_enabled: bool) -> Dispatcher {
    let mut dispatcher = Dispatcher::with_defaults();
    if !audit_enabled {
        return dispatcher;
    }
    dispatcher.subscribe(
        ActionKind::FileSelected,
        Box::new(|s: &mut EditorSession<'_>, a: Action| -> anyhow::Result<Outcome> {
            let out = s.apply(a)?;
            if let Outcome::Detected(r) = &out {
                audit(
                    "load",
                    serde_json::json!({"file": r.filename, "unit_type": r.unit_type}),
                );
            }
            Ok(out)
        }),
    );
    dispatcher.subscribe(
        ActionKind::Save,
        Box::new(|s: &mut EditorSession<'_>, a: Action| -> anyhow::Result<Outcome> {
            let out = s.apply(a)?;
            if let Outcome::Saved(r) = &out {
                audit(
                    "save",
                    serde_json::json!({"path": r.path, "sha256": r.sha256}),
                );
            }
            Ok(out)
        }),
    );
    dispatcher
}

pub fn handle_session_command(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Commands::Session { dir } = &cli.command else {
        return Ok(false);
    };
    let save_dir = dir
        .clone()
        .or_else(|| config.save_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let mut session = EditorSession::new(Catalog::builtin(), config.clone(), save_dir);
    let mut dispatcher = session_dispatcher(config.audit);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let result = parse_line(&line).and_then(|cmd| match cmd {
            ShellCommand::Nothing => Ok(None),
            ShellCommand::Quit => Ok(Some(None)),
            ShellCommand::Status => {
                let status = session.status();
                if cli.json {
                    print_line(true, status)?;
                } else {
                    println!(
                        "file={} type={} tab={} section={} directive={} insert={} cursor={}/{}",
                        status.filename,
                        status.unit_type,
                        status.active_tab.map(|t| t.as_str()).unwrap_or("-"),
                        status.section.as_deref().unwrap_or("-"),
                        status.directive.as_deref().unwrap_or("-"),
                        status.insert_enabled,
                        status.cursor,
                        status.chars
                    );
                }
                Ok(None)
            }
            ShellCommand::Append(text) => {
                let edited = format!("{}{}\n", session.document().text(), text);
                dispatcher
                    .dispatch(&mut session, Action::Edit(edited))
                    .map(|o| Some(Some(o)))
            }
            ShellCommand::Act(action) => dispatcher
                .dispatch(&mut session, action)
                .map(|o| Some(Some(o))),
        });
        match result {
            Ok(None) => {}
            Ok(Some(None)) => break,
            Ok(Some(Some(outcome))) => {
                if cli.json {
                    print_line(true, &outcome)?;
                } else {
                    println!("{}", render(&outcome));
                }
            }
            Err(e) => {
                tracing::debug!("session command failed: {:#}", e);
                if cli.json {
                    print_line(false, e.to_string())?;
                } else {
                    eprintln!("error: {}", e);
                }
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_with_arguments() {
        assert!(matches!(
            parse_line("section Service").unwrap(),
            ShellCommand::Act(Action::SectionChosen(Some(ref s))) if s == "Service"
        ));
        assert!(matches!(
            parse_line("section").unwrap(),
            ShellCommand::Act(Action::SectionChosen(None))
        ));
        assert!(matches!(
            parse_line("tab timer").unwrap(),
            ShellCommand::Act(Action::TabClicked(UnitType::Timer))
        ));
        assert!(matches!(
            parse_line("cursor 12\r\n").unwrap(),
            ShellCommand::Act(Action::SetCursor(12))
        ));
    }

    #[test]
    fn comments_and_blanks_do_nothing() {
        assert!(matches!(parse_line("   ").unwrap(), ShellCommand::Nothing));
        assert!(matches!(parse_line("# note").unwrap(), ShellCommand::Nothing));
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("cursor x").is_err());
        assert!(parse_line("open").is_err());
    }

    #[test]
    fn ignored_outcome_renders_reason() {
        assert_eq!(
            render(&Outcome::Ignored("no file selected".into())),
            "ignored: no file selected"
        );
    }
}
