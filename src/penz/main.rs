use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use console::Style;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use penz::config::PenzConfig;
use penz::error::{PenzError, Result};
use penz::latency::Latency;
use penz::model::{parse_pen_id, Author, Pen, PenDraft, PenPatch};
use penz::preview;
use penz::service::PenService;
use penz::store::fs::FileMirror;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    service: PenService<FileMirror>,
    config: PenzConfig,
    data_dir: PathBuf,
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx).await,
        Some(Commands::Trending) => handle_trending(&ctx).await,
        Some(Commands::Search { term }) => handle_search(&ctx, &term).await,
        Some(Commands::View { id }) => handle_view(&mut ctx, &id).await,
        Some(Commands::Like { id }) => handle_like(&mut ctx, &id).await,
        Some(Commands::New {
            title,
            html,
            css,
            js,
        }) => handle_new(&mut ctx, title, html, css, js).await,
        Some(Commands::Update {
            id,
            title,
            html,
            css,
            js,
        }) => handle_update(&mut ctx, &id, title, html, css, js).await,
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id).await,
        Some(Commands::Fork { id }) => handle_fork(&mut ctx, &id).await,
        Some(Commands::Preview { id, output }) => handle_preview(&ctx, &id, output).await,
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var("PENZ_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "penz", "penz")
        .ok_or_else(|| PenzError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = PenzConfig::load(&data_dir).unwrap_or_default();

    let latency = if cli.no_latency || !config.simulate_latency {
        Latency::none()
    } else {
        Latency::simulated()
    };

    let mirror = FileMirror::new(data_dir.join("pens"));
    let service = PenService::open(mirror)?.with_latency(latency);

    Ok(AppContext {
        service,
        config,
        data_dir,
    })
}

async fn handle_list(ctx: &AppContext) -> Result<()> {
    let pens = ctx.service.get_all().await?;
    print_pens(&pens);
    Ok(())
}

async fn handle_trending(ctx: &AppContext) -> Result<()> {
    let pens = ctx.service.get_trending().await?;
    print_pens(&pens);
    Ok(())
}

async fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let pens = ctx.service.search(term).await?;
    if pens.is_empty() {
        println!("No pens match \"{}\".", term);
        return Ok(());
    }
    print_pens(&pens);
    Ok(())
}

async fn handle_view(ctx: &mut AppContext, raw_id: &str) -> Result<()> {
    let pen = match parse_pen_id(raw_id) {
        Some(id) => ctx.service.view_pen(id).await?,
        None => None,
    };

    match pen {
        Some(pen) => print_full_pen(&pen),
        None => println!("Pen not found."),
    }
    Ok(())
}

async fn handle_like(ctx: &mut AppContext, raw_id: &str) -> Result<()> {
    let pen = match parse_pen_id(raw_id) {
        Some(id) => ctx.service.like_pen(id).await?,
        None => None,
    };

    match pen {
        Some(pen) => println!(
            "{}",
            format!("Liked \"{}\" ({} likes).", pen.title, pen.likes).green()
        ),
        None => println!("Pen not found."),
    }
    Ok(())
}

async fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    html: Option<PathBuf>,
    css: Option<PathBuf>,
    js: Option<PathBuf>,
) -> Result<()> {
    let mut draft = if title.is_none() && html.is_none() && css.is_none() && js.is_none() {
        match ctx.service.take_pending_fork()? {
            Some(draft) => {
                println!("{}", "Picked up stashed fork.".dimmed());
                draft
            }
            None => PenDraft::default(),
        }
    } else {
        PenDraft {
            title,
            html: read_source(html)?,
            css: read_source(css)?,
            javascript: read_source(js)?,
            author: None,
        }
    };

    if ctx.config.author != "Anonymous" {
        draft.author = Some(Author::named(ctx.config.author.clone()));
    }

    let pen = ctx.service.create(draft).await?;
    println!(
        "{}",
        format!("Pen created (#{}): {}", pen.id, pen.title).green()
    );
    Ok(())
}

async fn handle_update(
    ctx: &mut AppContext,
    raw_id: &str,
    title: Option<String>,
    html: Option<PathBuf>,
    css: Option<PathBuf>,
    js: Option<PathBuf>,
) -> Result<()> {
    let patch = PenPatch {
        title,
        html: read_source(html)?,
        css: read_source(css)?,
        javascript: read_source(js)?,
        thumbnail: None,
    };
    if patch.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    let pen = match parse_pen_id(raw_id) {
        Some(id) => ctx.service.update(id, patch).await?,
        None => None,
    };

    match pen {
        Some(pen) => println!(
            "{}",
            format!("Pen updated (#{}): {}", pen.id, pen.title).green()
        ),
        None => println!("Pen not found."),
    }
    Ok(())
}

async fn handle_delete(ctx: &mut AppContext, raw_id: &str) -> Result<()> {
    let deleted = match parse_pen_id(raw_id) {
        Some(id) => ctx.service.delete(id).await?,
        None => false,
    };

    if deleted {
        println!("{}", "Pen deleted.".green());
    } else {
        println!("Pen not found.");
    }
    Ok(())
}

async fn handle_fork(ctx: &mut AppContext, raw_id: &str) -> Result<()> {
    let draft = match parse_pen_id(raw_id) {
        Some(id) => ctx.service.fork_pen(id).await?,
        None => None,
    };

    match draft {
        Some(draft) => {
            let title = draft.title.unwrap_or_default();
            println!("{}", format!("Fork stashed: {}", title).green());
            println!("{}", "Run `penz new` to create it.".dimmed());
        }
        None => println!("Pen not found."),
    }
    Ok(())
}

async fn handle_preview(ctx: &AppContext, raw_id: &str, output: Option<PathBuf>) -> Result<()> {
    let pen = match parse_pen_id(raw_id) {
        Some(id) => ctx.service.get_by_id(id).await?,
        None => None,
    };

    let pen = match pen {
        Some(pen) => pen,
        None => {
            println!("Pen not found.");
            return Ok(());
        }
    };

    let doc = preview::compose_document(&pen.html, &pen.css, &pen.javascript);
    match output {
        Some(path) => {
            fs::write(&path, doc).map_err(PenzError::Io)?;
            println!(
                "{}",
                format!("Preview written to {}", path.display()).green()
            );
        }
        None => print!("{}", doc),
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("author = {}", ctx.config.author);
            println!("simulate-latency = {}", ctx.config.simulate_latency);
        }
        (Some("author"), None) => println!("author = {}", ctx.config.author),
        (Some("author"), Some(v)) => {
            ctx.config.author = v;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Config updated.".green());
        }
        (Some("simulate-latency"), None) => {
            println!("simulate-latency = {}", ctx.config.simulate_latency)
        }
        (Some("simulate-latency"), Some(v)) => {
            let parsed = v
                .parse::<bool>()
                .map_err(|_| PenzError::Api(format!("Invalid boolean: {}", v)))?;
            ctx.config.simulate_latency = parsed;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Config updated.".green());
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn read_source(path: Option<PathBuf>) -> Result<Option<String>> {
    match path {
        Some(path) => Ok(Some(fs::read_to_string(path).map_err(PenzError::Io)?)),
        None => Ok(None),
    }
}

static ID_STYLE: Lazy<Style> = Lazy::new(|| Style::new().yellow());
static TITLE_STYLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
static META_STYLE: Lazy<Style> = Lazy::new(|| Style::new().dim());

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const STATS_WIDTH: usize = 16;

fn print_pens(pens: &[Pen]) {
    if pens.is_empty() {
        println!("No pens yet.");
        return;
    }

    for pen in pens {
        let id_str = format!("#{:<4}", pen.id);
        let stats = format!("{:>5} ♥ {:>6} ◉", pen.likes, pen.views);
        let time_ago = format_time_ago(pen.updated_at);

        let label = format!("{} by {}", pen.title, pen.author.name);
        let fixed = id_str.width() + 1 + STATS_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        println!(
            "{} {}{}{}{}",
            ID_STYLE.apply_to(id_str),
            TITLE_STYLE.apply_to(label),
            " ".repeat(padding),
            format!("{:>width$}", stats, width = STATS_WIDTH),
            META_STYLE.apply_to(format!("{:>width$}", time_ago, width = TIME_WIDTH)),
        );
    }
}

fn print_full_pen(pen: &Pen) {
    println!(
        "{} {}",
        ID_STYLE.apply_to(format!("#{}", pen.id)),
        TITLE_STYLE.apply_to(&pen.title)
    );
    println!(
        "{}",
        META_STYLE.apply_to(format!(
            "by {} · {} likes · {} views · created {}",
            pen.author.name,
            pen.likes,
            pen.views,
            format_time_ago(pen.created_at).trim()
        ))
    );

    for (name, source) in [
        ("HTML", &pen.html),
        ("CSS", &pen.css),
        ("JS", &pen.javascript),
    ] {
        if source.is_empty() {
            continue;
        }
        println!("\n{}", name.bold());
        println!("--------------------------------");
        println!("{}", source);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
