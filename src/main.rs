use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use eatgo::api::ApiClient;
use eatgo::config::Config;
use eatgo::logging::init_tracing;
use eatgo::storage::FileStorage;
use eatgo::store::action::{
    change_login_fields, change_review_fields, select_category, select_region,
};
use eatgo::store::{AppState, Dispatch, Effects, Store};

#[derive(Parser, Debug)]
#[command(name = "eatgo", version, about = "Browse restaurants and post reviews on EatGo")]
struct Cli {
    /// Config file (default: platform config dir, eatgo/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the resulting state as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List selectable regions.
    Regions,
    /// List selectable categories.
    Categories,
    /// List restaurants for a region and a category.
    Restaurants {
        #[arg(long, value_name = "REGION_ID")]
        region: u64,
        #[arg(long, value_name = "CATEGORY_ID")]
        category: u64,
    },
    /// Show one restaurant with its menu and reviews.
    Restaurant { id: u64 },
    /// Log in and remember the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Post a review for a restaurant (requires login).
    Review {
        restaurant_id: u64,
        #[arg(long)]
        score: String,
        #[arg(long)]
        description: String,
    },
    /// Show whether a session is stored.
    Whoami,
}

#[tokio::main]
async fn main() {
    init_tracing("warn");

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("load configuration")?;

    let storage_path = config
        .storage
        .path
        .clone()
        .unwrap_or_else(FileStorage::default_path);
    let api = ApiClient::new(&config.api).context("build HTTP client")?;
    let effects = Effects::new(Arc::new(api), Arc::new(FileStorage::new(storage_path)));
    let store = Store::new();

    effects.restore_session(&store).await?;

    match &cli.command {
        Command::Regions | Command::Categories => {
            effects.load_initial_data(&store).await?;
        }
        Command::Restaurants { region, category } => {
            effects.load_initial_data(&store).await?;
            store.dispatch(select_region(*region));
            store.dispatch(select_category(*category));
            if store.state().catalog.filter().is_none() {
                anyhow::bail!("unknown region {} or category {}", region, category);
            }
            effects.load_restaurants(&store).await?;
        }
        Command::Restaurant { id } => {
            effects.load_restaurant(&store, *id).await?;
        }
        Command::Login { email, password } => {
            store.dispatch(change_login_fields("email", email));
            store.dispatch(change_login_fields("password", password));
            effects.post_login_fields(&store).await?;
        }
        Command::Logout => {
            effects.logout(&store).await?;
        }
        Command::Review {
            restaurant_id,
            score,
            description,
        } => {
            if !store.state().session.is_logged_in() {
                anyhow::bail!("not logged in; run `eatgo login` first");
            }
            effects.load_restaurant(&store, *restaurant_id).await?;
            store.dispatch(change_review_fields("score", score));
            store.dispatch(change_review_fields("description", description));
            effects.post_review_fields(&store).await?;
        }
        Command::Whoami => {}
    }

    let state = store.state();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render(&cli.command, &state));
    }
    Ok(())
}

fn render(command: &Command, state: &AppState) -> String {
    let mut out = String::new();
    match command {
        Command::Regions => {
            for region in &state.catalog.regions {
                out.push_str(&format!("{:>4}  {}\n", region.id, region.name));
            }
        }
        Command::Categories => {
            for category in &state.catalog.categories {
                out.push_str(&format!("{:>4}  {}\n", category.id, category.name));
            }
        }
        Command::Restaurants { .. } => {
            if state.listing.restaurants.is_empty() {
                out.push_str("No restaurants found.\n");
            }
            for restaurant in &state.listing.restaurants {
                out.push_str(&format!(
                    "{:>4}  {} ({})\n",
                    restaurant.id, restaurant.name, restaurant.address
                ));
            }
        }
        Command::Restaurant { .. } | Command::Review { .. } => {
            if let Some(restaurant) = &state.listing.restaurant {
                out.push_str(&format!("{}\n{}\n", restaurant.name, restaurant.address));
                if !restaurant.menu_items.is_empty() {
                    out.push_str("\nMenu\n");
                    for item in &restaurant.menu_items {
                        out.push_str(&format!("  - {}\n", item.name));
                    }
                }
                out.push_str("\nReviews\n");
                if restaurant.reviews.is_empty() {
                    out.push_str("  (none yet)\n");
                }
                for review in &restaurant.reviews {
                    out.push_str(&format!(
                        "  {} {}점: {}\n",
                        review.name, review.score, review.description
                    ));
                }
            }
        }
        Command::Login { .. } | Command::Logout | Command::Whoami => {
            if state.session.is_logged_in() {
                out.push_str("Logged in.\n");
            } else {
                out.push_str("Logged out.\n");
            }
        }
    }
    out
}
