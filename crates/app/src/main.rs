use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learnify_core::model::ColorMode;
use services::{
    API_KEY_VAR, AppServices, BASE_URL_VAR, DEFAULT_POLL_INTERVAL, DashboardService, FactService,
    FactServiceConfig, MODEL_VAR, ManualPreference, PreferenceSource, SystemPreference,
    TIMEOUT_SECS_VAR, ThemeSynchronizer,
};
use storage::repository::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const THEME_VAR: &str = "LEARNIFY_THEME";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    InvalidTimeout { raw: String },
    InvalidTheme { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidTimeout { raw } => {
                write!(f, "invalid --timeout-secs value: {raw} (expected a positive integer)")
            }
            ArgsError::InvalidTheme { raw } => {
                write!(f, "invalid theme: {raw} (expected system, light or dark)")
            }
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Fixed(ColorMode),
}

impl ThemeChoice {
    fn parse(raw: &str) -> Result<Self, ArgsError> {
        if raw.trim().eq_ignore_ascii_case("system") {
            return Ok(Self::System);
        }
        raw.parse::<ColorMode>()
            .map(Self::Fixed)
            .map_err(|_| ArgsError::InvalidTheme { raw: raw.to_string() })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Help,
    Ui(Args),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    /// Flag values keyed by the environment variable they override.
    fact_overrides: BTreeMap<&'static str, String>,
    theme: ThemeChoice,
    catalog: Option<PathBuf>,
}

impl Args {
    /// Parse `argv` (without the program name). `env` supplies defaults that
    /// flags override.
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut args = argv.into_iter().peekable();
        if let Some(first) = args.peek() {
            if !first.starts_with('-') {
                if first != "ui" {
                    return Err(ArgsError::UnknownSubcommand(first.clone()));
                }
                args.next();
            }
        }

        let mut theme = match env(THEME_VAR) {
            Some(raw) if !raw.trim().is_empty() => ThemeChoice::parse(&raw)?,
            _ => ThemeChoice::System,
        };
        let mut fact_overrides = BTreeMap::new();
        let mut catalog = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-key" => {
                    fact_overrides.insert(API_KEY_VAR, require_value(&mut args, "--api-key")?);
                }
                "--model" => {
                    fact_overrides.insert(MODEL_VAR, require_value(&mut args, "--model")?);
                }
                "--base-url" => {
                    fact_overrides.insert(BASE_URL_VAR, require_value(&mut args, "--base-url")?);
                }
                "--timeout-secs" => {
                    let value = require_value(&mut args, "--timeout-secs")?;
                    match value.trim().parse::<u64>() {
                        Ok(secs) if secs > 0 => {
                            fact_overrides.insert(TIMEOUT_SECS_VAR, secs.to_string());
                        }
                        _ => return Err(ArgsError::InvalidTimeout { raw: value }),
                    }
                }
                "--theme" => {
                    theme = ThemeChoice::parse(&require_value(&mut args, "--theme")?)?;
                }
                "--catalog" => {
                    catalog = Some(PathBuf::from(require_value(&mut args, "--catalog")?));
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Ui(Self {
            fact_overrides,
            theme,
            catalog,
        }))
    }

    fn fact_config(&self, env: impl Fn(&str) -> Option<String>) -> Option<FactServiceConfig> {
        FactServiceConfig::from_lookup(|name| {
            self.fact_overrides.get(name).cloned().or_else(|| env(name))
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --api-key <key>           Text-generation API key");
    eprintln!("  --model <name>            Model name (default: gemini-2.5-flash-preview-05-20)");
    eprintln!("  --base-url <url>          API base URL");
    eprintln!("  --timeout-secs <n>        Fun fact request timeout (default: 20)");
    eprintln!("  --theme <system|light|dark>");
    eprintln!("                            Follow the OS color scheme or force one");
    eprintln!("  --catalog <path.json>     Dashboard content (default: built-in)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_KEY_VAR}, {BASE_URL_VAR}, {MODEL_VAR},");
    eprintln!("  {TIMEOUT_SECS_VAR}, {THEME_VAR}, RUST_LOG");
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn facts(&self) -> Arc<FactService> {
        self.services.facts()
    }

    fn theme(&self) -> ThemeSynchronizer {
        self.services.theme()
    }

    fn preference(&self) -> Arc<dyn PreferenceSource> {
        self.services.preference()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::parse(std::env::args().skip(1), env_var) {
        Ok(Parsed::Ui(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();

    let storage = match &args.catalog {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            Storage::from_catalog_file(path)?
        }
        None => Storage::in_memory(),
    };

    // Background runtime for the OS theme probe. The desktop launcher runs its
    // own runtime, so this one must not be entered while launching.
    let background = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("learnify-theme")
        .enable_time()
        .build()?;
    let preference: Arc<dyn PreferenceSource> = match args.theme {
        ThemeChoice::System => {
            let _guard = background.enter();
            Arc::new(SystemPreference::spawn(DEFAULT_POLL_INTERVAL))
        }
        ThemeChoice::Fixed(mode) => {
            tracing::info!(mode = %mode, "using fixed color mode");
            Arc::new(ManualPreference::new(Some(mode)))
        }
    };

    let services = AppServices::new(&storage, args.fact_config(env_var), preference);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learnify")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    drop(background);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
