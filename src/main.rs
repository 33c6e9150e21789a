mod api;
mod server;

use chrono::{Utc, Weekday};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creator_engine::config::EngineConfig;
use creator_engine::hot_topics::catalog_from_config;
use creator_engine::{
    extract_tags, filter_by_domains, generate_titles, generate_topic_from_hot, lookup_history,
    predict_performance, rank_titles, rank_topics, ContentInput, ExtractionFlags, HistoryStore,
    Platform, PostingTime,
};

#[derive(Parser)]
#[command(name = "creator-engine", about = "Content scoring and recommendation engine")]
struct Cli {
    /// Path to the TOML config (defaults to ENGINE_CONFIG_PATH or config/engine.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a draft and predict its performance.
    Predict(PredictArgs),
    /// Generate and rank title variants for a topic.
    Titles(TitlesArgs),
    /// Extract SEO keywords, topic tags, entities and hashtags.
    Tags(TagsArgs),
    /// Rank trending topics against your domains.
    HotTopics(HotTopicsArgs),
    /// Turn a trending topic into a content idea.
    Idea(IdeaArgs),
    InitConfig(InitConfigArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct PredictArgs {
    #[arg(long)]
    title: Option<String>,
    /// Body text. Read from stdin when neither title nor content is given.
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    user_id: Option<String>,
    /// Planned posting hour (0-23). Defaults to now.
    #[arg(long)]
    hour: Option<u32>,
    #[arg(long)]
    weekend: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct TitlesArgs {
    #[arg(long)]
    topic: String,
    #[arg(long)]
    content: Option<String>,
    #[arg(long = "platform")]
    platforms: Vec<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct TagsArgs {
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    topic: Option<String>,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    no_seo: bool,
    #[arg(long)]
    no_topics: bool,
    #[arg(long)]
    no_entities: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct HotTopicsArgs {
    /// Comma-separated domains, e.g. "科技,商业".
    #[arg(long)]
    domains: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct IdeaArgs {
    #[arg(long)]
    id: String,
    #[arg(long)]
    domain: String,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/engine.toml")]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = EngineConfig::load(cli.config)?;
    debug!(path = ?config_path, "config loaded");

    match cli.command {
        Command::Predict(args) => run_predict(args, &config).await,
        Command::Titles(args) => run_titles(args),
        Command::Tags(args) => run_tags(args),
        Command::HotTopics(args) => run_hot_topics(args, &config).await,
        Command::Idea(args) => run_idea(args, &config).await,
        Command::InitConfig(args) => run_init_config(args),
        Command::Serve(args) => server::serve(args, config).await,
    }
}

async fn run_predict(args: PredictArgs, config: &EngineConfig) -> Result<(), String> {
    let content = if args.title.is_none() && args.content.is_none() {
        Some(read_stdin()?)
    } else {
        args.content
    };
    let platform = args.platform.as_deref().and_then(|value| {
        let platform = Platform::from_str(value);
        if platform.is_none() {
            warn!(platform = value, "unknown platform, using generic timing");
        }
        platform
    });
    let input = ContentInput {
        title: args.title,
        content,
        platform,
    };

    let history = match args.user_id.as_deref() {
        Some(user_id) => {
            let store = HistoryStore::from_config(&config.history).await?;
            if store.is_none() {
                warn!(%user_id, "no history file configured, treating as a new creator");
            }
            lookup_history(store.as_ref(), Some(user_id), Utc::now())
        }
        None => None,
    };

    let at = posting_time(args.hour, args.weekend)?;
    let report = predict_performance(&input, history.as_ref(), &at, config)
        .map_err(|err| err.to_string())?;

    if args.json {
        return print_json(&report);
    }

    let scores = &report.scores;
    println!(
        "Overall score: {} ({})",
        scores.overall,
        report.prediction.potential.label()
    );
    println!(
        "Dimensions: attractiveness {} | readability {} | shareability {} | completeness {} | timing {}",
        scores.attractiveness,
        scores.readability,
        scores.shareability,
        scores.completeness,
        scores.timing
    );
    println!(
        "Estimated views {} | likes {} | shares {} (confidence {}%)",
        report.prediction.estimated_views.display(),
        report.prediction.estimated_likes.display(),
        report.prediction.estimated_shares.display(),
        report.prediction.confidence
    );
    println!("Timing: {}", report.analysis.timing_analysis.suggestion);

    if !report.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &report.suggestions {
            println!(
                "- [{:?}] {}: {}",
                suggestion.priority, suggestion.message, suggestion.action
            );
        }
    }

    Ok(())
}

fn run_titles(args: TitlesArgs) -> Result<(), String> {
    let variants = generate_titles(&args.topic, args.content.as_deref(), &args.platforms)
        .map_err(|err| err.to_string())?;
    let titles = rank_titles(variants);

    if args.json {
        return print_json(&titles);
    }

    for (index, title) in titles.iter().enumerate() {
        println!(
            "{:>2}. [{}] {} ({})",
            index + 1,
            title.predicted_score,
            title.text,
            title.style
        );
    }
    Ok(())
}

fn run_tags(args: TagsArgs) -> Result<(), String> {
    let flags = ExtractionFlags {
        seo: !args.no_seo,
        topics: !args.no_topics,
        entities: !args.no_entities,
    };
    let result = extract_tags(
        args.content.as_deref(),
        args.topic.as_deref(),
        args.platform.as_deref(),
        flags,
    )
    .map_err(|err| err.to_string())?;

    if args.json {
        return print_json(&result);
    }

    println!("SEO keywords: {}", result.seo.join(", "));
    println!("Topics: {}", result.topics.join(", "));
    println!("Entities: {}", result.entities.join(", "));
    for (platform, tags) in &result.hashtags {
        let label = Platform::from_str(platform)
            .map(Platform::label)
            .unwrap_or(platform.as_str());
        println!("{}: {}", label, tags.join(" "));
    }
    println!("\nSEO title: {}", result.recommendations.title);
    println!("SEO description: {}", result.recommendations.description);
    Ok(())
}

async fn run_hot_topics(args: HotTopicsArgs, config: &EngineConfig) -> Result<(), String> {
    let catalog = catalog_from_config(&config.hot_topics).await?;
    let domains = api::parse_domains(args.domains.as_deref());
    let ranked = rank_topics(filter_by_domains(&catalog, &domains), &domains);

    if args.json {
        return print_json(&ranked);
    }

    for entry in &ranked {
        println!(
            "[{:>3}] {} ({} | heat {} | {:?})",
            entry.relevance_score,
            entry.topic.title,
            entry.topic.platform,
            entry.topic.heat,
            entry.topic.trend
        );
    }
    Ok(())
}

async fn run_idea(args: IdeaArgs, config: &EngineConfig) -> Result<(), String> {
    let catalog = catalog_from_config(&config.hot_topics).await?;
    let topic = catalog
        .iter()
        .find(|topic| topic.id == args.id)
        .ok_or_else(|| format!("hot topic not found: {}", args.id))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let idea = generate_topic_from_hot(topic, &args.domain, &mut rng);

    if args.json {
        return print_json(&idea);
    }

    println!("{}", idea.title);
    println!("Angle: {}", idea.angle);
    for (index, point) in idea.outline.iter().enumerate() {
        println!("  {}. {}", index + 1, point);
    }
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    if args.path.exists() && !args.force {
        return Err(format!(
            "config already exists at {} (use --force to overwrite)",
            args.path.display()
        ));
    }
    EngineConfig::default().write(&args.path)?;
    println!("Wrote config to {}", args.path.display());
    Ok(())
}

fn posting_time(hour: Option<u32>, weekend: bool) -> Result<PostingTime, String> {
    let now = PostingTime::now();
    let hour = match hour {
        Some(value) if value > 23 => return Err(format!("invalid hour (0-23): {}", value)),
        Some(value) => value,
        None if !weekend => return Ok(now),
        None => now.hour,
    };
    let weekday = if weekend { Weekday::Sat } else { Weekday::Mon };
    Ok(PostingTime::new(hour, weekday))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing draft: pass --title, --content or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_hour_uses_weekday_unless_weekend() {
        let weekday = posting_time(Some(20), false).expect("valid hour");
        assert_eq!(weekday.hour, 20);
        assert!(!weekday.is_weekend());

        let weekend = posting_time(Some(9), true).expect("valid hour");
        assert!(weekend.is_weekend());
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        assert!(posting_time(Some(24), false).is_err());
    }
}
