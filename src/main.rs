use anyhow::{Context, Result};
use clap::Parser;
use rustyline::{history::FileHistory, CompletionType, Config, Editor};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_style;
mod repl;

use catalog_browser::browse::{BrowserState, FilterAction, SortField, UserSelection};
use catalog_browser::catalog::{load_catalog, Catalog, SeedData, SeedSource};
use catalog_browser::config::{AppConfig, CliConfig, FileConfig};
use cli_style::{
    get_prompt, get_styles, print_error, print_goodbye, print_products, print_success,
    print_warning, print_welcome,
};
use repl::{execute_command, BrowserHelper, CommandExecutionResult};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Directory holding users.json, categories.json and products.json. The
    /// built-in catalog is used when omitted.
    #[clap(value_parser = parse_path)]
    pub data_dir: Option<PathBuf>,

    /// Path to a TOML config file, its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Load and check the catalog, then exit.
    #[clap(long)]
    pub check_only: bool,

    /// Print the table once with the given filters instead of starting the
    /// interactive browser.
    #[clap(long)]
    pub once: bool,

    /// Show only the products of this owner.
    #[clap(long)]
    pub user: Option<String>,

    /// Show only products whose name contains this text, ignoring case.
    #[clap(long)]
    pub query: Option<String>,

    /// Keep only products of this category, can be repeated.
    #[clap(long = "category")]
    pub categories: Vec<String>,

    /// Sort the table by ID, Product, Category or User.
    #[clap(long)]
    pub sort: Option<SortField>,

    /// File to load and save the interactive history from.
    #[clap(long, value_parser = parse_path)]
    pub history_file: Option<PathBuf>,
}

fn source_label(source: &SeedSource) -> String {
    match source {
        SeedSource::Builtin => "built-in catalog".to_string(),
        SeedSource::Dir(dir) => dir.display().to_string(),
    }
}

fn check_catalog(source: &SeedSource) -> Result<()> {
    let seed = SeedData::read(source)?;
    let catalog_result = Catalog::build(seed);
    let problems = catalog_result.problems;
    let catalog = catalog_result.catalog;

    if !problems.is_empty() {
        println!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            if problem.is_fatal() {
                print_error(&problem.to_string());
            } else {
                print_warning(&problem.to_string());
            }
        }
        println!();
    }

    match (&catalog, problems.is_empty()) {
        (Some(_), true) => print_success("Catalog checked, no issues found."),
        (Some(_), false) => print_warning("Catalog was built, but check the issues above."),
        (None, _) => print_error("Check the problems above, the catalog could not be initialized."),
    }
    if let Some(catalog) = catalog {
        println!(
            "Catalog has:\n{} users\n{} categories\n{} products",
            catalog.get_users_count(),
            catalog.get_categories_count(),
            catalog.get_products_count()
        );
    }
    Ok(())
}

/// The filters given on the command line, in the order the filter panel
/// applies them.
fn initial_actions(cli_args: &CliArgs, default_sort: SortField) -> Vec<FilterAction> {
    let mut actions = vec![];
    if let Some(user) = &cli_args.user {
        actions.push(FilterAction::SelectUser(UserSelection::from_name(user)));
    }
    if let Some(query) = &cli_args.query {
        actions.push(FilterAction::SetQuery(query.clone()));
    }
    // a repeated title would toggle the category back off
    let mut seen = BTreeSet::new();
    for title in &cli_args.categories {
        if seen.insert(title) {
            actions.push(FilterAction::ToggleCategory(title.clone()));
        }
    }
    actions.push(FilterAction::SortBy(default_sort));
    actions
}

fn run_browser(
    mut state: BrowserState,
    source: &SeedSource,
    history_file: Option<PathBuf>,
) -> Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<BrowserHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(BrowserHelper::new()));

    if let Some(path) = &history_file {
        if rl.load_history(path).is_err() {
            info!("No previous history at {}", path.display());
        }
    }

    let _ = rl.clear_screen();
    print_welcome(&source_label(source), &state);
    print_products(&state.visible());

    let prompt = get_prompt();
    loop {
        let readline = rl.readline(&prompt);

        let _ = rl.clear_screen();
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(&line, &mut state) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        print_error(&err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                print_error(&format!("{:?}", e));
                break;
            }
        }
    }

    if let Some(path) = &history_file {
        rl.save_history(path)
            .with_context(|| format!("Failed to save history to {}", path.display()))?;
    }
    print_goodbye();
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // The interactive table owns the terminal, keep logs quiet unless asked.
    let default_level = if cli_args.once || cli_args.check_only {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        data_dir: cli_args.data_dir.clone(),
        default_sort: cli_args.sort.unwrap_or_default(),
        history_file: cli_args.history_file.clone(),
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    if cli_args.check_only {
        return check_catalog(&app_config.seed_source);
    }

    let catalog = load_catalog(&app_config.seed_source)?;
    let mut state = BrowserState::new(catalog);
    for action in initial_actions(&cli_args, app_config.default_sort) {
        state.dispatch(action)?;
    }

    if cli_args.once {
        print_products(&state.visible());
        return Ok(());
    }

    run_browser(state, &app_config.seed_source, app_config.history_file)
}
