use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learn_core::model::CourseId;
use services::{AppServices, CatalogService, Clock, ProgressService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log value: {raw}"),
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
    services: AppServices,
    launch_course: Option<CourseId>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn launch_course(&self) -> Option<CourseId> {
        self.launch_course.clone()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    course: Option<String>,
    log_filter: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--course <slug>] [--log <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --course <slug>  open a course page at launch (html, css, javascript)");
    eprintln!("  --log <filter>   tracing filter, e.g. info or services=debug");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARNTECH_COURSE, LEARNTECH_LOG (falls back to RUST_LOG)");
}

impl Args {
    /// Parse flags on top of environment defaults. Flags win.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_course: Option<String>,
        env_log: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            course: env_course,
            log_filter: env_log,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--course" => parsed.course = Some(require_value(args, "--course")?),
                "--log" => {
                    let value = require_value(args, "--log")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLogFilter { raw: value });
                    }
                    parsed.log_filter = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn env_filter(explicit: Option<&str>) -> Result<EnvFilter, ArgsError> {
    match explicit {
        Some(raw) => EnvFilter::try_new(raw).map_err(|_| ArgsError::InvalidLogFilter {
            raw: raw.to_owned(),
        }),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(
        &mut argv,
        std::env::var("LEARNTECH_COURSE").ok(),
        std::env::var("LEARNTECH_LOG").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if parsed.help {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(parsed.log_filter.as_deref())?)
        .init();

    let services = AppServices::in_memory(Clock::default_clock())?;
    let launch_course = services
        .resolve_launch_course(parsed.course.as_deref())
        .await?;
    info!(launch_course = ?launch_course, "starting LearnTech");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        launch_course,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("LearnTech")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, None, None)
    }

    #[test]
    fn flags_are_parsed() {
        let args = parse(&["--course", "css", "--log", "debug"]).unwrap();
        assert_eq!(args.course.as_deref(), Some("css"));
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
        assert!(!args.help);
    }

    #[test]
    fn flags_override_environment() {
        let mut iter = ["--course", "html"].iter().map(|s| (*s).to_string());
        let args = Args::parse(&mut iter, Some("css".into()), Some("warn".into())).unwrap();
        assert_eq!(args.course.as_deref(), Some("html"));
        assert_eq!(args.log_filter.as_deref(), Some("warn"));
    }

    #[test]
    fn missing_value_is_reported() {
        assert_eq!(
            parse(&["--course"]),
            Err(ArgsError::MissingValue { flag: "--course" })
        );
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
    }

    #[test]
    fn blank_log_filter_is_rejected() {
        assert!(matches!(
            parse(&["--log", " "]),
            Err(ArgsError::InvalidLogFilter { .. })
        ));
    }
}
