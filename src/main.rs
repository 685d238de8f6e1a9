use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boardseed::cleanup::CleanupEngine;
use boardseed::config::{self, Settings};
use boardseed::content::TemplateCatalog;
use boardseed::remote::AzdoClient;
use boardseed::sync::{sprints, HierarchySynchronizer};

#[derive(Parser)]
#[command(name = "bseed")]
#[command(about = "Seed an Azure DevOps project with demo work items")]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one sample epic/feature/backlog item with tasks
    Sample,
    /// Generate the full demo backlog for every configured team
    Generate,
    /// Delete all demo work items under the configured team areas
    Cleanup {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write a starter config file to fill in
    Init,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "boardseed=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    println!("boardseed - Azure DevOps demo backlog generator");
    println!("===============================================\n");

    let config_path = config::resolve_path(cli.config);

    let command = match cli.command {
        Some(command) => command,
        None => match prompt_menu()? {
            Some(command) => command,
            None => return Ok(()),
        },
    };

    match command {
        Commands::Init => {
            Settings::write_starter(&config_path)?;
            println!("Wrote starter config to {}", config_path.display());
            println!("Fill in the organization URL, project, and token, then run 'bseed generate'.");
        }
        Commands::Sample => run_sample(&config_path, cli.seed).await?,
        Commands::Generate => run_generate(&config_path, cli.seed).await?,
        Commands::Cleanup { yes } => run_cleanup(&config_path, yes).await?,
    }

    Ok(())
}

/// Load and validate settings, then build the API client and content
/// catalog they describe.
fn connect(config_path: &Path) -> anyhow::Result<(Settings, AzdoClient, TemplateCatalog)> {
    let settings = Settings::load(config_path)?;
    settings.validate()?;
    let template = settings.template()?;

    let client = AzdoClient::new(&settings.organization_url, &settings.personal_access_token);
    println!("Organization: {}", settings.organization_url);
    println!("Project: {}\n", settings.project);

    Ok((settings, client, TemplateCatalog::new(template)))
}

async fn run_sample(config_path: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let (settings, client, catalog) = connect(config_path)?;

    println!("Creating sample work items...\n");
    let mut synchronizer =
        HierarchySynchronizer::new(&client, &catalog, &settings.project, false, seed);
    let report = synchronizer.generate_sample(&settings.teams).await?;

    println!(
        "\nSample complete: {} created, {} skipped as already present.",
        report.created(),
        report.skipped
    );
    Ok(())
}

async fn run_generate(config_path: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let (settings, client, catalog) = connect(config_path)?;

    println!("Generating full backlog...\n");

    if settings.use_sprint_history {
        sprints::ensure_sprints(&client, &settings.project, Utc::now()).await;
        print_iteration_guidance();
    }

    let mut synchronizer = HierarchySynchronizer::new(
        &client,
        &catalog,
        &settings.project,
        settings.use_sprint_history,
        seed,
    );
    let report = synchronizer.generate(&settings.teams).await?;

    println!(
        "\nBacklog generation complete: {} created, {} skipped as already present.",
        report.created(),
        report.skipped
    );
    println!(
        "  {} epics, {} features, {} backlog items, {} tasks",
        report.epics, report.features, report.backlog_items, report.tasks
    );
    Ok(())
}

/// Sprint boards only show the generated history once each team subscribes
/// to the iterations, which the API cannot do for us.
fn print_iteration_guidance() {
    println!("\nIMPORTANT: configure team iterations so the sprint boards pick these up:");
    println!("1. Go to Project Settings -> Teams and select a team");
    println!("2. Open 'Iterations and areas'");
    println!("3. Under 'Select iterations', add Sprint 1 through Sprint 5");
    println!("4. Set Sprint 4 as the default iteration");
    println!("5. Repeat for each team\n");
}

async fn run_cleanup(config_path: &Path, assume_yes: bool) -> anyhow::Result<()> {
    let (settings, client, _catalog) = connect(config_path)?;

    println!("Searching for demo work items to delete...\n");
    let engine = CleanupEngine::new(&client, &settings.project);
    let plan = engine.survey(&settings.teams).await?;

    if plan.is_empty() {
        println!("No work items found to delete.");
        println!("\nTip: make sure the area paths in the config match the project's areas.");
        return Ok(());
    }

    println!("Found {} work items:", plan.len());
    for (type_name, count) in plan.counts_by_type() {
        println!("  {count} {type_name}(s)");
    }

    if !assume_yes {
        println!("\nWARNING: this will delete every work item listed above.");
        if !confirm("Are you sure you want to continue? (y/n): ")? {
            println!("Cleanup cancelled.");
            return Ok(());
        }
    }

    println!("\nDeleting work items...");
    let report = engine.execute(&plan).await;

    println!("\nDeleted: {} work items", report.deleted);
    if report.failed > 0 {
        println!("Failed:  {} work items", report.failed);
    }
    println!("\nWork items go to the recycle bin and can be restored if needed.");
    println!("To restore: Project Settings -> Boards -> Process -> Recycle Bin");
    Ok(())
}

fn prompt_menu() -> anyhow::Result<Option<Commands>> {
    println!("Choose an option:");
    println!("1. Create sample work items (single epic/feature/backlog item/tasks)");
    println!("2. Generate full backlog (100+ work items)");
    println!("3. Delete all demo work items");
    println!("4. Exit");
    print!("\nEnter your choice (1-4): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    match line.trim() {
        "1" => Ok(Some(Commands::Sample)),
        "2" => Ok(Some(Commands::Generate)),
        "3" => Ok(Some(Commands::Cleanup { yes: false })),
        "4" => {
            println!("Exiting...");
            Ok(None)
        }
        _ => {
            println!("Invalid choice");
            Ok(None)
        }
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
