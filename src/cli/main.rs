use std::{env::current_dir, path::PathBuf, process::exit};

use clap::{Parser, Subcommand};
use color_eyre::{
    Section,
    config::HookBuilder,
    eyre::{self, eyre},
};
use serde::Serialize;
use site_content::{
    ContentQuery, Site,
    manifest::{ManifestExt, SiteManifest},
    post::BlogPost,
    reading::reading_time_with,
};
use time::format_description::well_known::Rfc3339;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Query the site's blog content", long_about = None)]
#[command(version, author)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Path to Site.toml (defaults to the one in the current directory)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    Posts {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a single post
    Post { slug: String },
    /// List categories with post counts
    Categories,
    /// List tags with post counts
    Tags,
    /// Posts filed under a category
    Category { slug: String },
    /// Posts carrying a tag
    Tag { slug: String },
    /// Posts written by an author
    Author { slug: String },
    /// Featured posts
    Featured,
    /// Posts related to the given one
    Related {
        slug: String,
        /// Defaults to `related_limit` from Site.toml
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search titles, excerpts and tags
    Search { query: String },
    /// Estimate reading time of a file
    ReadingTime { file: PathBuf },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    HookBuilder::default()
        .display_env_section(true)
        .panic_section("site-content encountered a bug")
        .install()
        .expect("Failed to install color-eyre hook");

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    if let Err(err) = entry(cli).await {
        error!("{:#}", err);
        exit(1);
    }
}

async fn entry(cli: Cli) -> eyre::Result<()> {
    let site = open_site(cli.manifest).await.note("Can't open site")?;
    let content = site.content();
    let output = Output { json: cli.json };

    match cli.command {
        Commands::Posts { limit } => {
            let posts = match limit {
                Some(limit) => content.recent_posts(limit),
                None => content.all_posts(),
            };
            output.posts(&posts)
        }
        Commands::Post { slug } => {
            let post = content
                .post_by_slug(&slug)
                .ok_or_else(|| eyre!("Post not found: {slug}"))?;
            output.post(&site, &post)
        }
        Commands::Categories => {
            let categories = content.all_categories();
            output.emit(&categories, || {
                for category in &categories {
                    println!("{:>3}  {} ({})", category.count(), category.name(), category.slug());
                }
            })
        }
        Commands::Tags => {
            let tags = content.all_tags();
            output.emit(&tags, || {
                for tag in &tags {
                    println!("{:>3}  {} ({})", tag.count, tag.name, tag.slug);
                }
            })
        }
        Commands::Category { slug } => output.posts(&content.posts_by_category(&slug)),
        Commands::Tag { slug } => output.posts(&content.posts_by_tag(&slug)),
        Commands::Author { slug } => output.posts(&content.posts_by_author(&slug)),
        Commands::Featured => output.posts(&content.featured_posts()),
        Commands::Related { slug, limit } => {
            let related = match limit {
                Some(limit) => content.related_posts(&slug, limit),
                None => site.related_posts(&slug),
            };
            output.posts(&related)
        }
        Commands::Search { query } => output.posts(&content.search(&query)),
        Commands::ReadingTime { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .note("Failed to read file")?;
            let minutes = reading_time_with(&text, site.manifest().content().words_per_minute());
            output.emit(&minutes, || println!("{minutes} min read"))
        }
    }
}

async fn open_site(manifest: Option<PathBuf>) -> eyre::Result<Site> {
    match manifest {
        Some(path) => {
            let root = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default();
            let manifest = SiteManifest::open(&path).await?;
            Ok(Site::with_manifest(root, manifest).await?)
        }
        None => Ok(Site::open(current_dir()?).await?),
    }
}

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize + ?Sized>(self, value: &T, human: impl FnOnce()) -> eyre::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }

    fn posts(self, posts: &[BlogPost]) -> eyre::Result<()> {
        let previews: Vec<_> = posts.iter().map(BlogPost::preview).collect();
        self.emit(&previews, || {
            if posts.is_empty() {
                println!("No posts");
                return;
            }
            for post in posts {
                println!("• {} -> /blog/{}", post.title(), post.slug());
                if !post.excerpt().is_empty() {
                    println!("  {}", post.excerpt());
                }
            }
        })
    }

    fn post(self, site: &Site, post: &BlogPost) -> eyre::Result<()> {
        self.emit(post, || {
            let published = post
                .published_at()
                .format(&Rfc3339)
                .unwrap_or_else(|_| post.published_at().to_string());
            println!("{}", post.title());
            println!(
                "{} · {} · {} min read",
                post.author().name(),
                published,
                site.reading_time(post)
            );
            println!("Category: {}", post.category().name());
            if !post.tags().is_empty() {
                println!("Tags: {}", post.tags().join(", "));
            }
            println!();
            println!("{}", post.content());
        })
    }
}
