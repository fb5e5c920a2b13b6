use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use form_spec::{FormEngine, FormEvent, PresentedMessage, TextStyle, Toolkit, ValueStore};

const HELP_TEXT: &str = "Commands: set <n> <text> | press <n> | show | help | quit";

/// A parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set { index: usize, text: String },
    Press { index: usize },
    Show,
    Help,
    Quit,
}

/// Error produced when a shell line cannot be understood.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandParseError {
    pub user_message: String,
}

impl CommandParseError {
    fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
        }
    }
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        match verb {
            "set" => {
                let rest = rest.trim_start();
                let (index, text) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(ShellCommand::Set {
                    index: parse_index(index)?,
                    text: text.to_string(),
                })
            }
            "press" => Ok(ShellCommand::Press {
                index: parse_index(rest.trim())?,
            }),
            "show" => Ok(ShellCommand::Show),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            "" => Err(CommandParseError::new("empty command")),
            other => Err(CommandParseError::new(format!("unknown command '{}'", other))),
        }
    }
}

fn parse_index(raw: &str) -> Result<usize, CommandParseError> {
    raw.parse::<usize>()
        .map_err(|_| CommandParseError::new(format!("'{}' is not a field number", raw)))
}

/// Paints elements as terminal lines.
pub struct LinePainter;

impl Toolkit for LinePainter {
    type Widget = String;

    fn text(&mut self, style: TextStyle, text: &str) -> String {
        match style {
            TextStyle::Title => format!("== {} ==", text),
            TextStyle::Subtitle => text.to_string(),
            TextStyle::Heading => format!("# {}", text),
        }
    }

    fn text_input(&mut self, key: usize, placeholder: Option<&str>, value: &str) -> String {
        match placeholder {
            Some(placeholder) if value.is_empty() => format!("[{}] > <{}>", key, placeholder),
            _ => format!("[{}] > {}", key, value),
        }
    }

    fn button(&mut self, key: usize, label: &str) -> String {
        format!("[{}] ( {} )", key, label)
    }
}

pub fn paint_screen(engine: &FormEngine) -> String {
    let mut painter = LinePainter;
    engine
        .render_screen()
        .iter()
        .map(|element| element.paint(&mut painter))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the read-eval loop until `quit` or end of input and returns the final values.
pub fn run<R: BufRead, W: Write>(
    mut engine: FormEngine,
    input: R,
    output: &mut W,
) -> io::Result<ValueStore> {
    writeln!(output, "{}", paint_screen(&engine))?;
    writeln!(output, "{}", HELP_TEXT)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(output, "Invalid command: {}", error.user_message)?;
                continue;
            }
        };

        let mut shown: Vec<PresentedMessage> = Vec::new();
        match command {
            ShellCommand::Set { index, text } => {
                engine.handle(FormEvent::Change { index, text }, &mut shown)
            }
            ShellCommand::Press { index } => engine.handle(FormEvent::Press { index }, &mut shown),
            ShellCommand::Show => writeln!(output, "{}", paint_screen(&engine))?,
            ShellCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
            ShellCommand::Quit => break,
        }
        for message in shown {
            writeln!(output, "[{}] {}", message.title, message.body)?;
        }
    }

    Ok(engine.into_values())
}

pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        },
    )
}
