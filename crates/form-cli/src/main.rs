mod shell;

use clap::{Parser, Subcommand, ValueEnum};
use form_spec::{
    FormEngine, ResolutionMode, ScreenConfig, TemplateResolver, ValueStore, render_json_ui,
    render_text, screen_config_schema,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal host for schema-driven screen forms",
    long_about = "Renders a screen config, binds typed input to field ids and resolves button messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

/// Policy for `${id}` placeholders without a stored value.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum MissingMode {
    Empty,
    Verbatim,
}

impl From<MissingMode> for ResolutionMode {
    fn from(mode: MissingMode) -> Self {
        match mode {
            MissingMode::Empty => ResolutionMode::Empty,
            MissingMode::Verbatim => ResolutionMode::Verbatim,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run a screen interactively on stdin.
    Run {
        /// Path to the screen config JSON (defaults to the bundled sample screen).
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
        /// Optional JSON object of initial field values.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// What unresolved placeholders become.
        #[arg(long, value_enum, default_value_t = MissingMode::Empty)]
        mode: MissingMode,
        /// Also print the final values as JSON.
        #[arg(long)]
        values_json: bool,
    },
    /// Render a screen once and exit.
    Render {
        /// Path to the screen config JSON (defaults to the bundled sample screen).
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
        /// Optional JSON object of field values.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Resolve a message template against a set of values.
    Resolve {
        /// Template text with ${id} placeholders.
        #[arg(long)]
        template: String,
        /// Optional JSON object of field values.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// What unresolved placeholders become.
        #[arg(long, value_enum, default_value_t = MissingMode::Empty)]
        mode: MissingMode,
    },
    /// Print the JSON Schema of the screen config format.
    Schema,
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            spec,
            values,
            mode,
            values_json,
        } => run_shell(spec, values, mode, values_json),
        Command::Render {
            spec,
            values,
            format,
        } => run_render(spec, values, format),
        Command::Resolve {
            template,
            values,
            mode,
        } => run_resolve(&template, values, mode),
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&screen_config_schema())?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run_shell(
    spec_path: Option<PathBuf>,
    values_path: Option<PathBuf>,
    mode: MissingMode,
    values_json: bool,
) -> CliResult<()> {
    let engine = load_engine(spec_path.as_deref(), values_path.as_deref())?.with_mode(mode.into());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let values = shell::run(engine, stdin.lock(), &mut stdout)?;

    println!("Values (CBOR hex): {}", shell::encode_hex(&values.to_cbor()?));
    if values_json {
        println!("{}", values.to_json_pretty()?);
    }
    Ok(())
}

fn run_render(
    spec_path: Option<PathBuf>,
    values_path: Option<PathBuf>,
    format: RenderMode,
) -> CliResult<()> {
    let engine = load_engine(spec_path.as_deref(), values_path.as_deref())?;
    let elements = engine.render_screen();
    match format {
        RenderMode::Text => println!("{}", render_text(&elements)),
        RenderMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&render_json_ui(&elements))?
        ),
    }
    Ok(())
}

fn run_resolve(template: &str, values_path: Option<PathBuf>, mode: MissingMode) -> CliResult<()> {
    let store = load_values(values_path.as_deref())?;
    let resolver = TemplateResolver::new(mode.into());
    debug!(
        placeholders = ?TemplateResolver::placeholders(template),
        mode = resolver.mode().as_str(),
        "resolving template"
    );
    println!("{}", resolver.resolve(template, &store));
    Ok(())
}

fn load_engine(spec_path: Option<&Path>, values_path: Option<&Path>) -> CliResult<FormEngine> {
    let config = match spec_path {
        Some(path) => ScreenConfig::load(path)?,
        None => ScreenConfig::tech_assessment(),
    };
    info!(
        title = %config.title,
        fields = config.fields.len(),
        "screen loaded"
    );
    Ok(FormEngine::new(config).with_values(load_values(values_path)?))
}

fn load_values(path: Option<&Path>) -> CliResult<ValueStore> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(ValueStore::from_json_str(&contents)?)
        }
        None => Ok(ValueStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_mode_maps_to_resolution_mode() {
        assert_eq!(ResolutionMode::from(MissingMode::Empty), ResolutionMode::Empty);
        assert_eq!(
            ResolutionMode::from(MissingMode::Verbatim),
            ResolutionMode::Verbatim
        );
    }

    #[test]
    fn load_engine_defaults_to_bundled_screen() {
        let engine = load_engine(None, None).expect("bundled screen");
        assert_eq!(engine.config().title, "Tech assessment");
        assert!(engine.values().is_empty());
    }

    #[test]
    fn load_engine_reads_spec_and_values() {
        let temp_dir = TempDir::new().expect("temp dir");
        let spec = temp_dir.path().join("screen.json");
        let values = temp_dir.path().join("values.json");
        fs::write(
            &spec,
            r#"{ "title": "Mini", "fields": [{ "id": "x", "type": "TextInput" }] }"#,
        )
        .expect("write spec");
        fs::write(&values, r#"{ "x": "seeded" }"#).expect("write values");

        let engine = load_engine(Some(spec.as_path()), Some(values.as_path())).expect("load");
        assert_eq!(engine.config().title, "Mini");
        assert_eq!(engine.values().get("x"), "seeded");
    }

    #[test]
    fn load_values_reports_missing_files() {
        let temp_dir = TempDir::new().expect("temp dir");
        assert!(load_values(Some(temp_dir.path().join("absent.json").as_path())).is_err());
    }
}
