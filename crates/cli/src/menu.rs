//! Interactive menu over the catalog.
//!
//! Each command parses user input at this boundary (bad numbers never
//! reach the engine) and calls exactly one catalog operation.

use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;

use cinetree_core::{run_import, Catalog, Config, Entry, HttpRecordSource, LoadOutcome};

use crate::bench;

const MENU: &str = "\
=== cinetree ===
 1) add entry
 2) find by id
 3) remove by id
 4) list entries (ascending)
 5) print tree
 6) save catalog
 7) load catalog
 8) import remote records
 9) benchmark
 0) quit";

const BENCH_DEFAULT_N: usize = 100_000;
const BENCH_SEED: u64 = 0xC1_4E_7B_EE;

pub async fn run_menu(catalog: &mut Catalog, config: &Config) -> Result<()> {
    loop {
        println!("\n{MENU}");
        let Some(choice) = prompt("> ")? else { break };

        match choice.as_str() {
            "1" => add_entry(catalog)?,
            "2" => find_entry(catalog)?,
            "3" => remove_entry(catalog)?,
            "4" => list_entries(catalog),
            "5" => print!("{}", catalog.render()),
            "6" => match catalog.save(&config.catalog.path) {
                Ok(()) => println!("Saved {} entries to {:?}", catalog.len(), config.catalog.path),
                Err(e) => warn!("Save failed: {}", e),
            },
            "7" => match catalog.load(&config.catalog.path) {
                Ok(LoadOutcome::Loaded { entries }) => println!("Loaded {entries} entries"),
                Ok(LoadOutcome::FileAbsent) => {
                    println!("No catalog file at {:?}, nothing loaded", config.catalog.path)
                }
                Err(e) => warn!("Load failed: {}", e),
            },
            "8" => import_records(catalog, config).await,
            "9" => run_benchmark()?,
            "0" | "q" | "quit" => break,
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }

    println!("Bye.");
    Ok(())
}

fn add_entry(catalog: &mut Catalog) -> Result<()> {
    let Some(id) = prompt_parsed::<u64>("id: ")? else {
        return Ok(());
    };
    let Some(title) = prompt("title: ")? else { return Ok(()) };
    let Some(director) = prompt("director: ")? else { return Ok(()) };
    let Some(year) = prompt_parsed::<i32>("year: ")? else {
        return Ok(());
    };
    let Some(category) = prompt("category: ")? else { return Ok(()) };
    let Some(rating) = prompt_parsed::<f64>("rating (0.0-10.0): ")? else {
        return Ok(());
    };
    let Some(votes) = prompt_parsed::<u64>("votes: ")? else {
        return Ok(());
    };

    catalog.insert(Entry {
        id,
        title,
        director,
        year,
        category,
        rating,
        votes,
    });
    println!("Stored entry {id} ({} total)", catalog.len());
    Ok(())
}

fn find_entry(catalog: &Catalog) -> Result<()> {
    let Some(id) = prompt_parsed::<u64>("id: ")? else {
        return Ok(());
    };
    match catalog.get(id) {
        Some(entry) => println!(
            "[{}] {} ({}, {}) | {} | {:.2} from {} votes",
            entry.id, entry.title, entry.director, entry.year, entry.category, entry.rating,
            entry.votes
        ),
        None => println!("No entry with id {id}"),
    }
    Ok(())
}

fn remove_entry(catalog: &mut Catalog) -> Result<()> {
    let Some(id) = prompt_parsed::<u64>("id: ")? else {
        return Ok(());
    };
    match catalog.remove(id) {
        Some(entry) => println!("Removed [{}] {} ({} left)", entry.id, entry.title, catalog.len()),
        None => println!("No entry with id {id}"),
    }
    Ok(())
}

fn list_entries(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The catalog is empty");
        return;
    }
    for entry in catalog.in_order() {
        println!(
            "[{}] {} | {:.2} | {}",
            entry.id, entry.title, entry.rating, entry.category
        );
    }
    println!("{} entries", catalog.len());
}

async fn import_records(catalog: &mut Catalog, config: &Config) {
    let Some(importer_config) = &config.importer else {
        println!("Importer is not configured (add an [importer] section to the config)");
        return;
    };

    let source = match HttpRecordSource::new(importer_config) {
        Ok(source) => source,
        Err(e) => {
            warn!("Importer unavailable: {}", e);
            return;
        }
    };

    match run_import(&source, catalog, importer_config).await {
        Ok(summary) => println!(
            "Imported {} records: {} new, {} merged ({} total)",
            summary.fetched,
            summary.inserted,
            summary.merged,
            catalog.len()
        ),
        Err(e) => warn!("Import failed: {}", e),
    }
}

fn run_benchmark() -> Result<()> {
    let n = match prompt(&format!("entries to generate [{BENCH_DEFAULT_N}]: "))? {
        None => return Ok(()),
        Some(input) if input.is_empty() => BENCH_DEFAULT_N,
        Some(input) => match parse_number::<usize>(&input) {
            Some(n) => n,
            None => {
                println!("Invalid count: expected a whole number");
                return Ok(());
            }
        },
    };

    let report = bench::run(n, BENCH_SEED);
    println!("{report}");
    Ok(())
}

/// Prompt and read one trimmed line; `None` means stdin hit EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Prompt for a numeric field; a value that does not parse aborts the
/// command with a message instead of reaching the catalog.
fn prompt_parsed<T: std::str::FromStr>(label: &str) -> Result<Option<T>> {
    let Some(input) = prompt(label)? else {
        return Ok(None);
    };
    match parse_number::<T>(&input) {
        Some(value) => Ok(Some(value)),
        None => {
            println!("Invalid input {input:?}: expected a number");
            Ok(None)
        }
    }
}

fn parse_number<T: std::str::FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}
