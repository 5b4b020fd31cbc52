use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::{env, process};
use text_format_config::SettingsStore;
use text_format_engine::{Command, Document, Editor, Settings, TextFormat};

/// Where the command should act
#[derive(Debug, PartialEq, Eq)]
enum Target {
    /// Caret at a char offset; defaults to the start of the document
    Caret(usize),
    /// Explicit (anchor, head) char offsets
    Selection(usize, usize),
    /// The entire document, ignoring any selection
    Whole,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Apply { command: Command, target: Target },
    List,
    ShowSettings,
    Set { key: String, value: bool },
}

const USAGE: &str = "\
Usage:
  text-format <command> [offset | anchor head | --whole] < input
  text-format list
  text-format settings
  text-format set <setting> <true|false>";

fn parse_offset(arg: &str) -> Result<usize, String> {
    arg.parse()
        .map_err(|_| format!("'{arg}' is not a character offset"))
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["list"] => Ok(Invocation::List),
        ["settings"] => Ok(Invocation::ShowSettings),
        ["set", key, value] => {
            let value = value
                .parse()
                .map_err(|_| format!("'{value}' is not true or false"))?;
            Ok(Invocation::Set {
                key: key.to_string(),
                value,
            })
        }
        [command, rest @ ..] => {
            let command: Command = command.parse().map_err(|e| format!("{e}"))?;
            let target = match rest {
                [] => Target::Caret(0),
                ["--whole"] => Target::Whole,
                [offset] => Target::Caret(parse_offset(offset)?),
                [anchor, head] => Target::Selection(parse_offset(anchor)?, parse_offset(head)?),
                _ => return Err("too many arguments".to_string()),
            };
            Ok(Invocation::Apply { command, target })
        }
        [] => Err("missing command".to_string()),
    }
}

fn apply(settings: Settings, command: Command, target: Target, input: &str) -> Result<String> {
    let mut document = Document::from_bytes(input.as_bytes())?;
    let engine = TextFormat::new(settings);

    match target {
        Target::Whole => {
            engine.apply_to_document(command, &mut document);
        }
        Target::Caret(offset) => {
            document.set_cursor_offset(offset)?;
            let patch = engine.apply(command, &mut document)?;
            log::info!("{command}: changed={} selection={:?}", patch.changed, patch.new_selection);
        }
        Target::Selection(anchor, head) => {
            document.set_selection_offsets(anchor, head)?;
            let patch = engine.apply(command, &mut document)?;
            log::info!("{command}: changed={} selection={:?}", patch.changed, patch.new_selection);
        }
    }

    Ok(document.text())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let store = SettingsStore::from_env();

    match invocation {
        Invocation::List => {
            for command in Command::ALL {
                println!("{:<28} {}", command.id(), command.name());
            }
        }
        Invocation::ShowSettings => {
            let settings = store.load()?;
            println!("# {}", store.path().display());
            for key in Settings::KEYS {
                println!("{key} = {}", settings.get(key)?);
            }
        }
        Invocation::Set { key, value } => {
            store.update(&key, value)?;
            println!("{key} = {value}");
        }
        Invocation::Apply { command, target } => {
            let settings = match store.load() {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("{e}; using default settings");
                    Settings::default()
                }
            };

            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input")?;

            let output = apply(settings, command, target, &input)?;
            std::io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_apply_targets() {
        assert_eq!(
            parse_args(&args(&["uppercase"])),
            Ok(Invocation::Apply {
                command: Command::Uppercase,
                target: Target::Caret(0)
            })
        );
        assert_eq!(
            parse_args(&args(&["merge-paragraph", "4", "20"])),
            Ok(Invocation::Apply {
                command: Command::MergeParagraph,
                target: Target::Selection(4, 20)
            })
        );
        assert_eq!(
            parse_args(&args(&["convert-chinese-punctuation", "--whole"])),
            Ok(Invocation::Apply {
                command: Command::ConvertChinesePunctuation,
                target: Target::Whole
            })
        );
    }

    #[test]
    fn test_parse_settings_commands() {
        assert_eq!(parse_args(&args(&["list"])), Ok(Invocation::List));
        assert_eq!(parse_args(&args(&["settings"])), Ok(Invocation::ShowSettings));
        assert_eq!(
            parse_args(&args(&["set", "lowercase-first", "true"])),
            Ok(Invocation::Set {
                key: "lowercase-first".to_string(),
                value: true
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_args(&[]), Err("missing command".to_string()));
        assert_eq!(
            parse_args(&args(&["shout"])),
            Err("unknown command 'shout'".to_string())
        );
        assert_eq!(
            parse_args(&args(&["uppercase", "x"])),
            Err("'x' is not a character offset".to_string())
        );
        assert_eq!(
            parse_args(&args(&["set", "lowercase-first", "yes"])),
            Err("'yes' is not true or false".to_string())
        );
        assert_eq!(
            parse_args(&args(&["uppercase", "1", "2", "3"])),
            Err("too many arguments".to_string())
        );
    }

    #[test]
    fn test_apply_at_caret() {
        let output = apply(
            Settings::default(),
            Command::CapitalizeSentence,
            Target::Caret(0),
            "first. second\nuntouched. line",
        )
        .unwrap();

        assert_eq!(output, "First. Second\nuntouched. line");
    }

    #[test]
    fn test_apply_whole_document() {
        let output = apply(
            Settings::default(),
            Command::ConvertChinesePunctuation,
            Target::Whole,
            "甲,乙\n丙?",
        )
        .unwrap();

        assert_eq!(output, "甲，乙\n丙？");
    }

    #[test]
    fn test_apply_rejects_offset_past_end() {
        let err = apply(
            Settings::default(),
            Command::Uppercase,
            Target::Caret(99),
            "short",
        )
        .unwrap_err();

        assert!(err.to_string().contains("offset 99"));
    }
}
