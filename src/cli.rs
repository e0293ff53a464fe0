//! Command-line interface types and output rendering.
//!
//! Lives in the library so the argument parsing and rendering can be tested
//! without spawning the binary.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::client::CsfdClient;
use crate::config::{
    Config, LogFormat, LogLevel, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::models::{MovieRecord, Person, SearchHit};

/// Output format for command results.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Movie pages and search on ČSFD.cz
#[derive(Debug, Parser)]
#[command(name = "csfd", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub output: OutputFormat,

    /// Site root
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search movies by keywords
    Search {
        /// Search keywords
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Fetch the full record of the first hit instead of listing hits
        #[arg(long)]
        first: bool,
    },
    /// Show a movie by numeric id or page URL
    Movie {
        /// Movie id (e.g. 10135) or full page URL
        id_or_url: String,
    },
}

impl Cli {
    /// Library configuration for these arguments.
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

/// Runs the selected command and returns the rendered output.
pub async fn run(cli: &Cli, client: &CsfdClient) -> Result<String> {
    match &cli.command {
        Command::Search { query, first } => {
            let query = query.join(" ");
            let hits = client
                .find_movie(&query)
                .await
                .with_context(|| format!("Search for '{query}' failed"))?;

            if *first {
                let Some(hit) = hits.first() else {
                    anyhow::bail!("No movies found for '{query}'");
                };
                let movie = hit
                    .resolve(client)
                    .await
                    .with_context(|| format!("Failed to fetch {}", hit.url))?;
                return render_movie(&movie, &cli.output);
            }
            render_hits(&hits, &cli.output)
        }
        Command::Movie { id_or_url } => {
            let movie = client
                .get_movie(id_or_url)
                .await
                .with_context(|| format!("Failed to fetch movie '{id_or_url}'"))?;
            let missing = client.stats().nonzero();
            if !missing.is_empty() {
                log::info!(
                    "Fields not present on the page: {}",
                    missing
                        .iter()
                        .map(|(field, _)| field.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            render_movie(&movie, &cli.output)
        }
    }
}

#[derive(Serialize)]
struct MovieOutput<'a> {
    #[serde(flatten)]
    movie: &'a MovieRecord,
    original_title: Option<&'a str>,
    runtime_minutes: Option<u32>,
}

/// Renders search hits, one per line in plain mode.
pub fn render_hits(hits: &[SearchHit], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(hits).context("Failed to serialize search hits")
        }
        OutputFormat::Plain => {
            let mut out = String::new();
            for hit in hits {
                let _ = write!(out, "{}", hit.title);
                if let Some(alternate) = &hit.alternate_title {
                    let _ = write!(out, " / {alternate}");
                }
                if let Some(year) = hit.year {
                    let _ = write!(out, " ({year})");
                }
                let _ = writeln!(out, "  {}", hit.url);
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Renders a movie record as a labelled summary or JSON.
pub fn render_movie(movie: &MovieRecord, format: &OutputFormat) -> Result<String> {
    let original_title = movie.original_title().ok();
    match format {
        OutputFormat::Json => {
            let output = MovieOutput {
                movie,
                original_title,
                runtime_minutes: movie.runtime_minutes(),
            };
            serde_json::to_string_pretty(&output).context("Failed to serialize movie")
        }
        OutputFormat::Plain => {
            let home = movie
                .titles_by_region
                .get(crate::config::HOME_CODE)
                .map(String::as_str)
                .unwrap_or_default();
            let mut out = String::new();
            let _ = writeln!(out, "{home}");
            if let Some(original) = original_title.filter(|title| *title != home) {
                let _ = writeln!(out, "Original title: {original}");
            }
            line(&mut out, "Genres", &movie.genres.join(" / "));
            line(&mut out, "Countries", &movie.countries.join(" / "));
            if let Some(year) = movie.year {
                line(&mut out, "Year", &year.to_string());
            }
            if let Some(runtime) = &movie.runtime_raw {
                line(&mut out, "Runtime", runtime);
            }
            line(&mut out, "Directors", &names(&movie.directors));
            line(&mut out, "Music", &names(&movie.composers));
            line(&mut out, "Cast", &names(&movie.actors));
            if let Some(rating) = movie.rating {
                line(&mut out, "Rating", &format!("{rating}%"));
            }
            if let Some(synopsis) = &movie.synopsis {
                line(&mut out, "Synopsis", synopsis);
            }
            if let Some(imdb) = &movie.imdb_url {
                line(&mut out, "IMDb", imdb);
            }
            line(&mut out, "URL", &movie.source_url);
            Ok(out.trim_end().to_string())
        }
    }
}

fn line(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "{label}: {value}");
    }
}

fn names(people: &[Person]) -> String {
    people
        .iter()
        .map(|person| person.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
