// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notionkit::api::retrieval::ObjectKind;
use notionkit::config::{Command, CommandLineInput};
use notionkit::formatting::render_block;
use notionkit::{
    api, AppError, Block, ClientConfig, Comment, NotionId, NotionRepository, Page, RenderTarget,
};
use std::fs;
use std::time::Duration;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notionkit.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries command output
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the repository the commands run against.
fn connect(cli: &CommandLineInput) -> Result<Box<dyn NotionRepository>, AppError> {
    let config = ClientConfig::from_env()?
        .with_cache_ttl(Duration::from_secs(cli.cache_ttl))
        .with_timeout(Duration::from_secs(cli.timeout));
    let http_client = api::NotionHttpClient::new(&config)?;

    if cli.no_cache {
        log::info!("Cache disabled; every lookup goes to the Notion API");
        Ok(Box::new(http_client))
    } else {
        log::info!("Cache enabled (TTL: {}s)", cli.cache_ttl);
        Ok(Box::new(api::CachedNotionClient::new(
            http_client,
            config.cache_ttl,
        )))
    }
}

type Stream<'a, T> = Box<dyn Iterator<Item = Result<T, AppError>> + 'a>;

fn target_of(html: bool) -> RenderTarget {
    if html {
        RenderTarget::Html
    } else {
        RenderTarget::Markdown
    }
}

/// Runs one subcommand, printing its output to stdout.
fn execute(command: Command, repo: &dyn NotionRepository) -> Result<(), AppError> {
    match command {
        Command::Blocks {
            target,
            recursive,
            limit,
            listing,
            output,
        } => {
            let id = NotionId::parse(&target)?;
            let render_target = target_of(output.html);
            let blocks: Stream<'_, Block> = if recursive {
                Box::new(api::retrieve_block_children_recursive(repo, &id, limit))
            } else {
                Box::new(api::retrieve_block_children(repo, &id, listing.to_options()?))
            };
            for block in blocks {
                println!("{}", render_block(&block?, render_target)?);
            }
        }
        Command::Rows { database, listing } => {
            let id = NotionId::parse(&database)?;
            for page in api::retrieve_database_pages(repo, &id, listing.to_options()?) {
                print_page(&page?);
                println!();
            }
        }
        Command::Comments {
            target,
            recursive,
            limit,
            listing,
            output,
        } => {
            let id = NotionId::parse(&target)?;
            let options = listing.to_options()?;
            let render_target = target_of(output.html);
            let comments: Stream<'_, Comment> = if recursive {
                Box::new(api::retrieve_comments_recursive(repo, &id, limit, options))
            } else {
                Box::new(api::retrieve_comments(repo, &id, options))
            };
            for comment in comments {
                print_comment(&comment?, render_target)?;
            }
        }
        Command::Page { page } => {
            let id = NotionId::parse(&page)?;
            print_page(&api::retrieve_page(repo, &id)?);
        }
        Command::Info { target } => {
            let id = NotionId::parse(&target)?;
            let block = api::retrieve_general_info(repo, &id)?;
            println!("{:?} ({})", ObjectKind::of(&block), block.block_type());
            println!("{}", block.id.to_url());
        }
        Command::AppendText { block, text } => {
            let id = NotionId::parse(&block)?;
            let created = api::append_text(repo, &id, &text)?;
            println!("Appended {} block(s) to {}", created.len(), id.to_url());
        }
    }
    Ok(())
}

fn print_page(page: &Page) {
    println!("# {}", page.title());
    println!("{}", page.url);
    for (name, property) in &page.properties {
        match notionkit::property_to_plain_text(property) {
            Ok(text) => println!("{}: {}", name, text),
            Err(e) => log::debug!("Skipping property '{}': {}", name, e),
        }
    }
}

fn print_comment(comment: &Comment, target: RenderTarget) -> Result<(), AppError> {
    let author = comment
        .created_by
        .name
        .as_deref()
        .unwrap_or(&comment.created_by.id);
    let body = notionkit::render(&comment.rich_text, target)?;
    println!(
        "[{}] {}: {}",
        comment.created_time.format("%Y-%m-%d %H:%M"),
        author,
        body
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let repo = connect(&cli)?;
    execute(cli.command, repo.as_ref())?;

    Ok(())
}
