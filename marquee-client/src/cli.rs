//! Marquee command-line interface.

use std::path::PathBuf;

use anyhow::Error;

use clap::{Parser, Subcommand};

use marquee_model::request::movie::{
    DEFAULT_FEATURED_COUNT, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_LIMIT,
};

use serde::Serialize;

use crate::{
    http::Client,
    nav::{HeadlessViewport, Navigator},
    view,
};

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "MARQUEE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Subcommands.
    #[command(subcommand)]
    pub command: Command,
}

/// Catalog commands.
///
/// Each prints the response body as JSON.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lists the featured movies.
    Featured {
        #[arg(short, long, default_value_t = DEFAULT_FEATURED_COUNT)]
        count: u32,
    },
    /// Lists the catalog a page at a time.
    Movies(PageArgs),
    /// Searches movies by title.
    Search {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
    },
    /// Shows a single movie.
    Movie { id: String },
    /// Lists the ratings of a movie.
    Ratings {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Controls the rating statistics batch job.
    #[command(subcommand)]
    Batch(BatchCommand),
    /// Controls the movie search index.
    #[command(subcommand)]
    Index(IndexCommand),
    /// Checks the health of the server.
    Health,
    /// Opens a catalog page, such as `/movie/42` or `/search?q=matrix`, and
    /// prints what it would show.
    Open { location: String },
}

/// Pagination arguments.
#[derive(clap::Args, Debug)]
pub struct PageArgs {
    #[arg(short, long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,
    #[arg(short = 's', long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(Subcommand, Debug)]
pub enum BatchCommand {
    /// Shows the state of the job.
    Status,
    /// Prints the log output of the job.
    Logs,
    /// Starts the job.
    Start,
    /// Stops the job.
    Stop,
}

#[derive(Subcommand, Debug)]
pub enum IndexCommand {
    /// Makes the server reload its index.
    Reload,
}

/// Runs a command.
pub async fn run_command(command: &Command, client: &Client) -> Result<(), Error> {
    match command {
        Command::Featured { count } => print(&client.featured_movies().count(*count).await?),
        Command::Movies(args) => print(
            &client
                .movies()
                .page(args.page)
                .page_size(args.page_size)
                .await?,
        ),
        Command::Search { query, limit } => {
            print(&client.search_movies(query).limit(*limit).await?)
        }
        Command::Movie { id } => print(&client.movie_detail(id.as_str()).await?),
        Command::Ratings { id, page } => print(
            &client
                .movie_ratings(id.as_str())
                .page(page.page)
                .page_size(page.page_size)
                .await?,
        ),
        Command::Batch(BatchCommand::Status) => print(&client.batch_status().await?),
        Command::Batch(BatchCommand::Logs) => {
            for line in client.batch_logs().await?.lines() {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Batch(BatchCommand::Start) => print(&client.start_batch().await?),
        Command::Batch(BatchCommand::Stop) => print(&client.stop_batch().await?),
        Command::Index(IndexCommand::Reload) => print(&client.reload_index().await?),
        Command::Health => print(&client.health().await?),
        Command::Open { location } => open(location, client).await,
    }
}

async fn open(location: &str, client: &Client) -> Result<(), Error> {
    let mut navigator = Navigator::new(HeadlessViewport);
    let navigation = navigator.navigate(location)?;

    tracing::info!("opening {} view", navigation.route.name());

    print(&view::load(client, navigation).await?)
}

fn print<T>(value: &T) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
