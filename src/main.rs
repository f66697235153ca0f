use clap::Parser;
use readnext::cli::commands::{Cli, Commands};
use readnext::config::Config;
use readnext::domain::values::event_type::EventType;
use readnext::ReadNext;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readnext=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let rn = match ReadNext::new(&config) {
        Ok(rn) => rn,
        Err(e) => {
            eprintln!("Error initializing readnext: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&rn, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_command(rn: &ReadNext, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::AddCategory { name } => {
            print_json(&rn.add_category(&name)?)?;
        }
        Commands::AddArticle { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let title = data["title"]
                .as_str()
                .ok_or("Missing required field: title")?;
            let body = data["body"].as_str().unwrap_or_default();
            let category = data["category"].as_str();
            print_json(&rn.add_article(title, body, category)?)?;
        }
        Commands::Articles => {
            print_json(&rn.list_articles()?)?;
        }
        Commands::Categories => {
            for c in rn.list_categories()? {
                println!("{}: {}", c.id, c.name);
            }
        }
        Commands::Log {
            article_id,
            event_type,
            user_id,
            duration_ms,
        } => {
            let et: EventType = event_type.parse().map_err(|e: String| e)?;
            print_json(&rn.log_event(article_id, et, user_id, duration_ms)?)?;
        }
        Commands::Recommend {
            article_id,
            strategy,
            limit,
        } => {
            let limit = limit.unwrap_or(rn.default_limit());
            print_json(&rn.recommend(strategy.as_deref(), article_id, limit)?)?;
        }
        Commands::Analytics { article_id, top } => {
            print_json(&rn.analytics(article_id, top)?)?;
        }
        Commands::Keywords { article_id, top } => {
            let keywords = rn.top_keywords(article_id, top)?;
            if keywords.is_empty() {
                println!("-");
            } else {
                println!("{}", keywords.join(", "));
            }
        }
    }
    Ok(())
}
