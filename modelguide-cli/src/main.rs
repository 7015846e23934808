mod display;

use clap::{Parser, Subcommand};
use modelguide_core::catalog::{
    self, FileCatalogSource, HttpCatalogSource, ModelCatalog, ModelDescriptor,
};
use modelguide_core::rank;
use modelguide_core::taxonomy::{Dimension, PreferenceSelection};
use modelguide_core::wizard::{WizardState, WizardStep};
use modelguide_core::{preset, taxonomy};

#[derive(Parser)]
#[command(name = "modelguide")]
#[command(about = "Find the AI models that match your needs and hardware", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load the catalog from a local JSON file instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<std::path::PathBuf>,

    /// Fetch the catalog from an HTTP endpoint instead of the built-in one
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every model in the catalog
    List,

    /// Search for models by name, provider or type
    Search {
        /// Search query (substring, case-insensitive)
        query: String,
    },

    /// Show the wizard dimensions and their option ids
    Options,

    /// Show the quick-scenario presets
    Presets,

    /// Rank the catalog against a preference selection
    Recommend {
        /// Use a quick-scenario preset instead of the four ids
        #[arg(long, conflicts_with_all = ["use_case", "priority", "hardware", "language"])]
        preset: Option<String>,

        /// Use-case option id (see `options`)
        #[arg(long)]
        use_case: Option<String>,

        /// Priority option id
        #[arg(long)]
        priority: Option<String>,

        /// Hardware option id
        #[arg(long)]
        hardware: Option<String>,

        /// Language option id
        #[arg(long)]
        language: Option<String>,

        /// Output as JSON (for tool integration)
        #[arg(long)]
        json: bool,
    },

    /// Answer the four questions interactively
    Wizard,
}

/// Resolve the catalog from the chosen source, degrading failures to an
/// empty catalog.
fn load_catalog(cli: &Cli) -> Vec<ModelDescriptor> {
    if let Some(path) = &cli.catalog {
        catalog::load_or_empty(&FileCatalogSource::new(path.clone()))
    } else if let Some(url) = &cli.url {
        catalog::load_or_empty(&HttpCatalogSource::new(url.clone()))
    } else {
        ModelCatalog::embedded().models().to_vec()
    }
}

fn run_recommend(selection: &PreferenceSelection, models: &[ModelDescriptor], json: bool) {
    let shortlist = rank::rank(selection, models);
    if json {
        display::display_json_shortlist(selection, &shortlist);
    } else {
        display::display_shortlist(selection, &shortlist);
    }
}

/// Prompt for one option id on stdin. Accepts a 1-based number or the id
/// itself; anything unrecognized is ignored, exactly like the engine does.
fn prompt_choice(dimension: Dimension) -> Option<String> {
    use std::io::Write;

    let ids = taxonomy::option_ids(dimension);
    println!("\n{}:", display::dimension_label(dimension));
    for (i, id) in ids.iter().enumerate() {
        println!("  {}. {}", i + 1, display::option_label(dimension, id));
    }
    print!("> ");
    std::io::stdout().flush().ok()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok()?;
    let input = line.trim();

    if let Ok(n) = input.parse::<usize>() {
        return ids.get(n.checked_sub(1)?).map(|id| id.to_string());
    }
    ids.iter().find(|id| **id == input).map(|id| id.to_string())
}

fn run_wizard(models: &[ModelDescriptor]) {
    println!("Answer four quick questions to get a ranked shortlist.");
    println!("(enter the number of your choice)");

    let mut state = WizardState::new();
    while state.step() != WizardStep::Results {
        let Some(dimension) = state.step().dimension() else {
            break;
        };
        match prompt_choice(dimension) {
            Some(id) => state = state.choose(dimension, &id),
            None => {
                eprintln!("Input closed, aborting.");
                return;
            }
        }
    }

    match state.selection() {
        Some(selection) => run_recommend(&selection, models, false),
        None => eprintln!("Wizard ended without a complete selection."),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::List => {
            let models = load_catalog(&cli);
            display::display_catalog(&models);
        }

        Commands::Search { query } => {
            let catalog = ModelCatalog::embedded();
            let results = catalog.find(query);
            display::display_search_results(&results, query);
        }

        Commands::Options => display::display_options(),

        Commands::Presets => display::display_presets(),

        Commands::Recommend {
            preset: preset_id,
            use_case,
            priority,
            hardware,
            language,
            json,
        } => {
            let selection = if let Some(id) = preset_id {
                match preset::resolve(id) {
                    Some(sel) => sel,
                    None => {
                        eprintln!("Unknown preset '{}'. See `modelguide presets`.", id);
                        std::process::exit(2);
                    }
                }
            } else {
                match (use_case, priority, hardware, language) {
                    (Some(uc), Some(pr), Some(hw), Some(lang)) => {
                        match PreferenceSelection::from_ids(uc, pr, hw, lang) {
                            Some(sel) => sel,
                            None => {
                                eprintln!(
                                    "One of the option ids is unknown. See `modelguide options`."
                                );
                                std::process::exit(2);
                            }
                        }
                    }
                    _ => {
                        eprintln!(
                            "Provide --preset, or all of --use-case --priority --hardware --language."
                        );
                        std::process::exit(2);
                    }
                }
            };

            let models = load_catalog(&cli);
            run_recommend(&selection, &models, *json);
        }

        Commands::Wizard => {
            let models = load_catalog(&cli);
            run_wizard(&models);
        }
    }
}
