//! Dog Viewer - command-line front end
//!
//! Fetches random dogs and manages the local favorites list.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dog_viewer::{
    DogApiClient, DogImage, DogViewer, FavoritesStore, JsonFileStorage, MemoryStorage,
    RetryPolicy, DEFAULT_BATCH_SIZE, DOG_API_BASE,
};

/// Browse random dog pictures and keep your favorites
#[derive(Parser, Debug)]
#[command(name = "dog_viewer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Dog CEO API base URL
    #[arg(long, env = "DOG_VIEWER_API_BASE", default_value = DOG_API_BASE)]
    api_base: String,

    /// Path to the favorites file [default: ~/.local/share/dog_viewer/dog-viewer-favorites.json]
    #[arg(long, env = "DOG_VIEWER_FAVORITES")]
    favorites_file: Option<PathBuf>,

    /// Keep favorites in memory only for this run
    #[arg(long, default_value_t = false)]
    ephemeral: bool,

    /// Number of requests made before a fetch fails
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,

    /// Delay before the first retry in milliseconds (doubles per retry)
    #[arg(long, default_value_t = 1000)]
    retry_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a batch of random dogs
    Random {
        /// Number of images to fetch
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        count: u32,
    },
    /// Fetch a batch and show one randomly picked dog
    Show {
        /// Number of images to fetch
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        count: u32,

        /// Add the shown dog to favorites
        #[arg(long, default_value_t = false)]
        favorite: bool,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    /// Print all favorites
    List,
    /// Add an image URL to favorites
    Add { url: String },
    /// Remove an image URL from favorites
    Remove { url: String },
}

#[tokio::main]
async fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("Application error: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let favorites = open_favorites(&args);
    let api = DogApiClient::with_base_url(&args.api_base).with_retry_policy(RetryPolicy {
        max_attempts: args.max_attempts,
        base_delay: Duration::from_millis(args.retry_delay_ms),
    });

    match args.command {
        Command::Random { count } => {
            let dogs = api
                .get_random_dogs(count)
                .await
                .context("Failed to fetch random dogs")?;
            for dog in &dogs {
                let marker = if favorites.is_favorited(&dog.url) { "*" } else { " " };
                println!("{} {:<24} {}", marker, dog.breed, dog.url);
            }
        }
        Command::Show { count, favorite } => {
            let mut viewer = DogViewer::new(api, favorites).with_batch_size(count);
            viewer
                .refresh()
                .await
                .context("Failed to fetch random dogs")?;

            match viewer.main_dog() {
                Some(dog) => println!("{}\n{}", dog.breed, dog.url),
                None => println!("No dogs returned"),
            }

            if favorite {
                if viewer.add_current_to_favorites() {
                    println!("Added to favorites");
                } else if viewer.is_current_favorited() {
                    println!("Already a favorite");
                }
            } else if viewer.is_current_favorited() {
                println!("(favorite)");
            }
        }
        Command::Favorites { action } => run_favorites(favorites, action),
    }

    Ok(())
}

fn run_favorites(mut favorites: FavoritesStore, action: FavoritesAction) {
    match action {
        FavoritesAction::List => {
            if favorites.is_empty() {
                println!("No favorites yet");
            }
            for dog in favorites.favorites() {
                println!("{:<24} {}", dog.breed, dog.url);
            }
        }
        FavoritesAction::Add { url } => {
            let dog = DogImage::from_url(url);
            if favorites.add(dog.clone()) {
                println!("Added {} to favorites", dog.breed);
            } else {
                println!("Already a favorite: {}", dog.url);
            }
        }
        FavoritesAction::Remove { url } => {
            let dog = DogImage::from_url(url);
            if favorites.remove_dog(&dog) {
                println!("Removed {} from favorites", dog.url);
            } else {
                println!("Not a favorite: {}", dog.url);
            }
        }
    }
}

fn open_favorites(args: &Args) -> FavoritesStore {
    if args.ephemeral {
        log::info!("Favorites are kept in memory for this run");
        return FavoritesStore::load(MemoryStorage::new());
    }

    let storage = match &args.favorites_file {
        Some(path) => JsonFileStorage::new(path),
        None => JsonFileStorage::at_default_location(),
    };
    log::info!("Favorites file: {}", storage.path().display());
    FavoritesStore::load(storage)
}
