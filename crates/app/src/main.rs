use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flash_core::QuizError;
use flash_core::model::{ResourceRequest, Vocabulary};
use services::config::{parse_origin, parse_speech_command};
use services::{AppConfig, AppServices, QuizService, SpeechTrigger};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidOrigin { raw: String },
    MissingPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidOrigin { raw } => write!(f, "invalid --origin value: {raw}"),
            ArgsError::MissingPath => write!(f, "fetch requires a resource path"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    vocabulary: Arc<Vocabulary>,
    quiz: Result<Arc<QuizService>, QuizError>,
    speech: SpeechTrigger,
}

impl UiApp for DesktopApp {
    fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    fn quiz(&self) -> Result<Arc<QuizService>, QuizError> {
        self.quiz.clone()
    }

    fn speech(&self) -> SpeechTrigger {
        self.speech.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [options]");
    eprintln!("  cargo run -p app -- install [options]");
    eprintln!("  cargo run -p app -- fetch <path> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --vocab <file.json>    vocabulary file (default: built-in starter set)");
    eprintln!("  --db <sqlite_url>      offline cache database");
    eprintln!("  --cache-name <name>    cache region name");
    eprintln!("  --origin <url>         origin for cached assets");
    eprintln!("  --speech-cmd <cmd>     text-to-speech command, empty to disable");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASH_VOCAB_PATH, FLASH_CACHE_DB, FLASH_CACHE_NAME, FLASH_ORIGIN,");
    eprintln!("  FLASH_SPEECH_CMD, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    Install,
    Fetch,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "install" => Some(Self::Install),
            "fetch" => Some(Self::Fetch),
            _ => None,
        }
    }
}

/// Applies command-line overrides on top of the environment config.
fn parse_overrides(
    config: &mut AppConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Vec<String>, ArgsError> {
    let mut positional = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--vocab" => {
                config.vocab_path = Some(PathBuf::from(require_value(args, "--vocab")?));
            }
            "--db" => {
                let value = require_value(args, "--db")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidDbUrl { raw: value });
                }
                config.cache_db_url = normalize_sqlite_url(value);
            }
            "--cache-name" => {
                config.cache_name = require_value(args, "--cache-name")?;
            }
            "--origin" => {
                let value = require_value(args, "--origin")?;
                config.origin =
                    parse_origin(&value).map_err(|_| ArgsError::InvalidOrigin { raw: value })?;
            }
            "--speech-cmd" => {
                config.speech_command = parse_speech_command(&require_value(args, "--speech-cmd")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
            _ => positional.push(arg),
        }
    }
    Ok(positional)
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url.starts_with("sqlite::memory:") || db_url.contains("mode=memory") {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut config = AppConfig::from_env()?;
    let positional = parse_overrides(&mut config, &mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&config.cache_db_url)?;
    let services = AppServices::from_config(&config).await?;
    let offline = services.offline();

    match cmd {
        Command::Ui => {
            if let Some(extra) = positional.into_iter().next() {
                return Err(ArgsError::UnknownArg(extra).into());
            }
            // The UI works without the offline cache; a failed install only logs.
            if let Err(err) = offline.activate().await {
                tracing::warn!(error = %err, "offline cache unavailable");
            }

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                vocabulary: services.vocabulary(),
                quiz: services.quiz(),
                speech: services.speech(),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Flashcards")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Install => {
            offline.install().await?;
            println!(
                "installed {} assets into cache '{}'",
                offline.config().manifest.len(),
                offline.config().cache_name
            );
            Ok(())
        }
        Command::Fetch => {
            let path = positional.into_iter().next().ok_or(ArgsError::MissingPath)?;
            if let Err(err) = offline.activate().await {
                tracing::warn!(error = %err, "offline cache unavailable");
            }
            let request = ResourceRequest::get_path(&offline.config().origin, &path)?;
            let proxied = offline.handle_fetch(&request).await?;
            println!(
                "{} {} ({:?}, {} bytes)",
                proxied.response.status,
                request.url(),
                proxied.source,
                proxied.response.body.len()
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
