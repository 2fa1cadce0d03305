use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mastery_core::Catalog;
use services::TutorialService;
use ui::{App, UiApp, build_app_context};

const DEFAULT_APP_NAME: &str = "CSS Mastery";

#[derive(Debug, Parser)]
#[command(name = "css-mastery", version, about = "Interactive CSS tutorial")]
struct Cli {
    /// Log filter, e.g. `info` or `ui=debug` (overrides RUST_LOG).
    #[arg(long, global = true, env = "CSS_MASTERY_LOG")]
    log_level: Option<String>,

    /// Window options used when no subcommand is given.
    #[command(flatten)]
    ui: UiArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
struct UiArgs {
    #[arg(long, env = "CSS_MASTERY_TITLE", default_value = DEFAULT_APP_NAME)]
    title: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the tutorial window (default).
    Ui(UiArgs),
    /// Print the lesson catalog.
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Print the progress percentage for a route path.
    Progress { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    app_name: String,
    window_title: String,
}

impl AppConfig {
    fn new(args: UiArgs) -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            window_title: args.title,
        }
    }
}

struct DesktopApp {
    config: AppConfig,
    tutorial: Arc<TutorialService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        self.config.app_name.clone()
    }

    fn window_title(&self) -> String {
        self.config.window_title.clone()
    }

    fn tutorial(&self) -> Arc<TutorialService> {
        Arc::clone(&self.tutorial)
    }
}

fn init_logging(filter: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn print_catalog(catalog: &Catalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    for group in catalog.groups() {
        println!("{}", group.name());
        for entry in group.items() {
            println!("  {} {:<20} {}", entry.icon(), entry.label(), entry.path());
        }
    }
    Ok(())
}

fn launch_ui(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let tutorial = Arc::new(TutorialService::builtin(config.app_name.clone())?);
    let window_title = config.window_title.clone();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config, tutorial });
    let context = build_app_context(&app);

    log::info!("launching desktop window \"{window_title}\"");

    // Some tao setups open always-on-top windows unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(window_title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    // No subcommand launches the UI.
    match cli.command.unwrap_or(Command::Ui(cli.ui)) {
        Command::Ui(args) => launch_ui(AppConfig::new(args)),
        Command::Catalog { json } => {
            let catalog = Catalog::builtin()?;
            print_catalog(&catalog, json)
        }
        Command::Progress { path } => {
            let tutorial = TutorialService::builtin(DEFAULT_APP_NAME)?;
            let progress = tutorial.progress(&path);
            if progress.position.is_none() {
                log::warn!("{path} is not in the catalog");
            }
            println!("{}", progress.percent);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_ui() {
        let cli = Cli::try_parse_from(["css-mastery"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli =
            Cli::try_parse_from(["css-mastery", "progress", "/flexbox", "--log-level", "debug"])
                .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Some(Command::Progress { ref path }) if path == "/flexbox"));

        let cli = Cli::try_parse_from(["css-mastery", "catalog", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Catalog { json: true })));

        let cli = Cli::try_parse_from(["css-mastery", "ui", "--title", "Learn CSS"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Ui(ref args)) if args.title == "Learn CSS"));
    }

    #[test]
    fn title_applies_without_a_subcommand() {
        let cli = Cli::try_parse_from(["css-mastery", "--title", "Learn CSS"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.ui.title, "Learn CSS");
    }

    #[test]
    fn configured_title_reaches_the_ui_context() {
        let config = AppConfig::new(UiArgs {
            title: "Learn CSS".into(),
        });
        let tutorial = Arc::new(TutorialService::builtin(config.app_name.clone()).unwrap());
        let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config, tutorial });
        let context = build_app_context(&app);
        assert_eq!(context.window_title(), "Learn CSS");
        assert_eq!(context.app_name(), DEFAULT_APP_NAME);
    }

    #[test]
    fn catalog_prints_as_json_and_text() {
        let catalog = Catalog::builtin().unwrap();
        assert!(print_catalog(&catalog, true).is_ok());
        assert!(print_catalog(&catalog, false).is_ok());
    }
}
