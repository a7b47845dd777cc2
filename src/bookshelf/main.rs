use bookshelf::api::{Catalog, CmdMessage, ConfigAction, MessageLevel, Outcome};
use bookshelf::commands::{self, CmdResult};
use bookshelf::config::BookshelfConfig;
use bookshelf::error::{CatalogError, Result};
use bookshelf::model::Book;
use bookshelf::store::fs::JsonFileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "BOOKSHELF_HOME";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

struct AppContext {
    catalog: Catalog<JsonFileStore>,
    catalog_path: PathBuf,
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let data_dir = data_dir()?;

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.clone(), value.clone());
    }

    let catalog_path = match &cli.file {
        Some(path) => path.clone(),
        None => data_dir.join(BookshelfConfig::load(&data_dir)?.catalog_file),
    };

    if let Some(Commands::Demo) = &cli.command {
        return Ok(handle_demo(&catalog_path));
    }

    let mut ctx = match init_context(catalog_path) {
        Some(ctx) => ctx,
        None => return Ok(ExitCode::FAILURE),
    };

    let code = match cli.command {
        Some(Commands::Add {
            title,
            author,
            genre,
            year,
        }) => {
            let result = ctx.catalog.add_cmd(title, author, genre, year);
            finish_mutation(&mut ctx, result)
        }
        Some(Commands::Remove { title }) => {
            let result = ctx.catalog.remove_cmd(&title);
            finish_mutation(&mut ctx, result)
        }
        Some(Commands::Find { title }) => {
            print_books(&ctx.catalog.find_by_title(&title));
            ExitCode::SUCCESS
        }
        Some(Commands::Author { fragment }) => {
            print_books(&ctx.catalog.find_by_author(&fragment));
            ExitCode::SUCCESS
        }
        Some(Commands::List) | None => {
            print_books(&ctx.catalog.list().listed_books);
            ExitCode::SUCCESS
        }
        Some(Commands::Config { .. }) | Some(Commands::Demo) => ExitCode::SUCCESS,
    };

    Ok(code)
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookshelf=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookshelf=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CatalogError::Config(format!(
                "Could not determine data dir; set {} instead",
                HOME_ENV
            ))
        })
}

/// Loads the catalog file if there is one. A file that exists but cannot
/// be read is never overwritten: the problem is printed and `None` returned.
fn init_context(catalog_path: PathBuf) -> Option<AppContext> {
    let store = JsonFileStore::new().with_create_dirs(true);
    let mut catalog = Catalog::with_store(store);

    match catalog.load(&catalog_path) {
        Outcome::BooksLoaded | Outcome::FileNotFound => {}
        failure => {
            print_messages(&[failure.to_message()]);
            return None;
        }
    }

    Some(AppContext {
        catalog,
        catalog_path,
    })
}

fn finish_mutation(ctx: &mut AppContext, result: CmdResult) -> ExitCode {
    print_messages(&result.messages);

    let changed = result
        .outcome
        .as_ref()
        .map(Outcome::is_success)
        .unwrap_or(false);
    if !changed {
        return ExitCode::FAILURE;
    }

    let saved = ctx.catalog.save(&ctx.catalog_path);
    if saved.is_success() {
        print_messages(&[CmdMessage::info(format!(
            "{} ({})",
            saved,
            ctx.catalog_path.display()
        ))]);
        ExitCode::SUCCESS
    } else {
        print_messages(&[saved.to_message()]);
        ExitCode::FAILURE
    }
}

fn handle_config(
    data_dir: &std::path::Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(data_dir, action)?;
    print_messages(&result.messages);

    let failed = result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Error);
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn handle_demo(catalog_path: &std::path::Path) -> ExitCode {
    let mut catalog = Catalog::with_store(JsonFileStore::new().with_create_dirs(true));

    print_outcome(catalog.add(
        "Cien años de soledad",
        "Gabriel García Márquez",
        "Novela",
        1967,
    ));
    print_outcome(catalog.add(
        "El amor en los tiempos del cólera",
        "Gabriel García Márquez",
        "Novela",
        1985,
    ));

    println!("{}", "Find by title:".bold());
    print_books(&catalog.find_by_title("Cien años de soledad"));

    println!("{}", "Find by author:".bold());
    print_books(&catalog.find_by_author("Gabriel García Márquez"));

    println!("{}", "Remove:".bold());
    print_outcome(catalog.remove("Cien años de soledad"));

    println!("{}", "Save:".bold());
    let saved = catalog.save(catalog_path);
    let saved_ok = saved.is_success();
    print_outcome(saved);

    println!("{}", "Load:".bold());
    print_outcome(catalog.load(catalog_path));

    println!("{}", "Catalog after loading:".bold());
    print_books(catalog.books());

    if saved_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_outcome(outcome: Outcome) {
    print_messages(&[outcome.to_message()]);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const GAP: usize = 2;

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    let title_w = books.iter().map(|b| b.title.width()).max().unwrap_or(0);
    let author_w = books.iter().map(|b| b.author.width()).max().unwrap_or(0);
    let genre_w = books.iter().map(|b| b.genre.width()).max().unwrap_or(0);

    for (i, book) in books.iter().enumerate() {
        let idx = format!("{:>4} ", format!("{}.", i + 1));
        println!(
            "{}{}{}{}{}",
            idx.dimmed(),
            pad_to_width(&book.title, title_w + GAP).bold(),
            pad_to_width(&book.author, author_w + GAP),
            pad_to_width(&book.genre, genre_w + GAP).dimmed(),
            book.year.to_string().yellow()
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
