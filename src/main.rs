//! CLI entry point for musoclef

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "musoclef")]
#[command(version)]
#[command(about = "Content front-end for the Musoclef music-learning blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with an editable catalog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Share a post (twitter, facebook, linkedin, copy)
    Share {
        /// Post id
        id: i64,

        /// Platform to share to
        platform: String,

        /// Print the action instead of performing it
        #[arg(long)]
        print: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, related, tag, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "musoclef=debug,info"
    } else {
        "musoclef=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            musoclef::commands::init::init_site(&target_dir)?;
            println!("Initialized Musoclef site in {:?}", target_dir);
        }

        Commands::Generate => {
            let site = musoclef::Musoclef::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, open } => {
            let site = musoclef::Musoclef::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            musoclef::server::start(&site, &ip, port, open).await?;
        }

        Commands::Share {
            id,
            platform,
            print,
        } => {
            let site = musoclef::Musoclef::new(&base_dir)?;
            let action = if print {
                musoclef::commands::share::build(&site, id, &platform)?
            } else {
                let gateway = musoclef::share::SystemGateway;
                musoclef::commands::share::run(&site, id, &platform, &gateway)?
            };
            match action {
                Some(action) => println!("{}", musoclef::commands::share::describe(&action)),
                None => println!("Unknown platform: {}", platform),
            }
        }

        Commands::Clean => {
            let site = musoclef::Musoclef::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = musoclef::Musoclef::new(&base_dir)?;
            musoclef::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("musoclef version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
