//! Small command line front end for trying lookups by hand.
//!
//! ```text
//! cargo run --example lookup -- page Mercury
//! cargo run --example lookup -- --lang de content "Barack Obama"
//! RUST_LOG=wikipedia=debug cargo run --example lookup -- search multekrem --limit 3
//! ```

use clap::{Parser, Subcommand};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;
use wikipedia::{Client, PageOptions, SearchOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Look up Wikipedia pages and searches", long_about = None)]
struct Cli {
    /// Wikipedia language edition, used as the subdomain.
    #[arg(long, default_value = "en")]
    lang: String,

    /// Fail on redirects instead of following them.
    #[arg(long)]
    no_redirects: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a page, listing candidates for disambiguation pages
    Page {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Print the extract of a page
    Content {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Full-text search
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of hits.
        #[arg(long, default_value_t = wikipedia::search::DEFAULT_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> wikipedia::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let client = Client::with_language(&cli.lang)?;
    let options = PageOptions {
        redirects: !cli.no_redirects,
    };

    match cli.command {
        Command::Page { title } => {
            let page = client.get_page_by_title(&title.join(" "), options).await?;
            println!("{} ({})", page.title, page.id);
            println!("{}", page.url);
            println!("revision {} (parent {})", page.revision_id, page.parent_id);
            if page.is_disambiguation() {
                println!("may refer to:");
                for candidate in &page.disambiguation {
                    println!("  {candidate}");
                }
            }
        }
        Command::Content { title } => {
            let content = client
                .get_page_content_by_title(&title.join(" "), options)
                .await?;
            println!("{} (revision {})", content.page.title, content.revision_id);
            println!("{}", content.content);
        }
        Command::Search { query, limit } => {
            let results = client
                .search_with_info(&query.join(" "), SearchOptions::limit(limit))
                .await?;
            if let Some(total) = results.total_hits {
                println!("{total} hits");
            }
            for hit in results.hits {
                println!("{:>10}  {}", hit.pageid, hit.title);
            }
        }
    }

    Ok(())
}
