use clap::Parser;
use rememberit::application::{init::init, quick_add, transfer, ConfigService, EntryStore};
use rememberit::cli::{confirm, format_entry, format_entry_list, format_suggestions, Cli, Commands};
use rememberit::domain::timestamp;
use rememberit::error::RememberError;
use rememberit::infrastructure::{Config, FileSystemRepository, ListRepository};
use std::fs;
use std::io;
use std::path::Path;

type Store = EntryStore<FileSystemRepository>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RememberError> {
    match cli.command {
        Commands::Init { path } => {
            let repo = init(&path)?;
            println!("Initialized rememberit list at {}", repo.root().display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("quick_add_limit = {}", config.quick_add_limit);
                println!("quick_add_min_count = {}", config.quick_add_min_count);
                println!("confirm_destructive = {}", config.confirm_destructive);
                println!("display_format = {}", config.display_format);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: rememberit config [--list | <key> [<value>]]");
                println!("Valid keys: quick_add_limit, quick_add_min_count, confirm_destructive, display_format");
            }
            Ok(())
        }
        command => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut store = EntryStore::open(repo);
            run_entry_command(command, &mut store, &config)
        }
    }
}

fn run_entry_command(
    command: Commands,
    store: &mut Store,
    config: &Config,
) -> Result<(), RememberError> {
    let fmt = config.display_format.as_str();

    match command {
        Commands::Add { content } => {
            let entry = store.add(&content.join(" "))?;
            println!("Added {}", format_entry(&entry, fmt));
        }
        Commands::List { limit } => {
            let mut entries = store.list();
            if let Some(n) = limit {
                entries.truncate(n);
            }
            println!("{}", format_entry_list(&entries, fmt));
        }
        Commands::Edit { id, content, at } => {
            let id = store.resolve(&id)?;
            let current = store
                .get(&id)
                .cloned()
                .ok_or_else(|| RememberError::EntryNotFound(id.clone()))?;

            let content = content.unwrap_or(current.content);
            let created = match at {
                Some(at) => timestamp::parse(&at)?,
                None => current.created,
            };

            let entry = store.update(&id, &content, created)?;
            println!("Updated {}", format_entry(&entry, fmt));
        }
        Commands::Delete { id, yes } => {
            let id = store.resolve(&id)?;
            let question = match store.get(&id) {
                Some(entry) => format!("Delete '{}'?", entry.content),
                None => format!("Delete {}?", id),
            };
            if !confirmed(config, yes, &question)? {
                println!("Aborted");
                return Ok(());
            }

            let entry = store.delete(&id)?;
            println!("Deleted {}", format_entry(&entry, fmt));
        }
        Commands::Reset { yes } => {
            let count = store.entries().len();
            let question = format!("Delete all {} entries?", count);
            if !confirmed(config, yes, &question)? {
                println!("Aborted");
                return Ok(());
            }

            store.reset()?;
            println!("Removed {} entries", count);
        }
        Commands::Suggest => {
            let suggestions = quick_add::suggestions(store, config.suggest_options());
            println!("{}", format_suggestions(&suggestions));
        }
        Commands::Quick { position } => {
            let entry = quick_add::quick_add(store, config.suggest_options(), position)?;
            println!("Added {}", format_entry(&entry, fmt));
        }
        Commands::Export { output } => {
            let text = transfer::export(store)?;
            match output {
                Some(path) => {
                    fs::write(&path, &text)?;
                    println!("Exported {} entries to {}", store.entries().len(), path.display());
                }
                None => println!("{}", text),
            }
        }
        Commands::Import { file } => {
            let text = match file {
                Some(path) if path != Path::new("-") => fs::read_to_string(&path)?,
                _ => io::read_to_string(io::stdin())?,
            };
            let count = transfer::import(store, &text)?;
            println!("Imported {} entries", count);
        }
        Commands::Init { .. } | Commands::Config { .. } => {
            unreachable!("init and config do not open the entry store")
        }
    }

    Ok(())
}

fn confirmed(config: &Config, yes: bool, question: &str) -> Result<bool, RememberError> {
    if yes || !config.confirm_destructive {
        return Ok(true);
    }
    confirm(question, &mut io::stdin().lock(), &mut io::stderr())
}
