use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use carinfo_core::config::{resolve_with_base, Config};
use carinfo_core::fallback::is_placeholder;
use carinfo_core::{fallback_record, ingest, CarCache, Error, Ingested, SearchResult};
use carinfo_generator::ChatCompletionsGenerator;
use carinfo_search::CarSearchService;

const USAGE: &str = "Usage: carinfo [--config <file>] <search <name...>|interactive|validate <file.json>|fallback <name...>>";

type Service = CarSearchService<ChatCompletionsGenerator, CarCache>;

fn parse_args() -> (Option<String>, String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut config_path = None;
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 { eprintln!("{USAGE}"); std::process::exit(1); }
        args.remove(0);
        config_path = Some(args.remove(0));
    }
    if args.is_empty() { eprintln!("{USAGE}"); std::process::exit(1); }
    let cmd = args.remove(0);
    (config_path, cmd, args)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn build_service(config: &Config) -> anyhow::Result<Service> {
    let settings = config.settings()?;
    let generator = ChatCompletionsGenerator::new(settings.generator)?;
    Ok(CarSearchService::new(generator, Arc::new(CarCache::new())))
}

/// Connectivity problems are reported apart from bad data so the user
/// knows a retry may help.
fn report_error(e: &Error) {
    if e.is_connectivity() {
        eprintln!("generator unavailable, try again later: {e}");
    } else {
        eprintln!("error: {e}");
    }
}

fn print_result(result: &SearchResult) -> anyhow::Result<()> {
    eprintln!("source: {:?}", result.source);
    println!("{}", serde_json::to_string_pretty(&result.record)?);
    Ok(())
}

async fn interactive(service: &Service) -> anyhow::Result<()> {
    let stdin = io::stdin();
    eprint!("car> ");
    io::stderr().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() { eprint!("car> "); io::stderr().flush()?; continue; }
        if query == "quit" || query == "exit" { break; }
        match service.search(query).await {
            Ok(result) => print_result(&result)?,
            Err(e) => report_error(&e),
        }
        eprintln!("({} cached)", service.store().len());
        eprint!("car> ");
        io::stderr().flush()?;
    }
    Ok(())
}

fn validate_file(path: &str) -> anyhow::Result<()> {
    let path = resolve_with_base(&env::current_dir()?, path);
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    match ingest(&raw)? {
        Ingested::Valid(record) => {
            if is_placeholder(&record) { eprintln!("note: {} holds placeholder data", path.display()); }
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Ingested::ShapeInvalid(failure) => {
            eprintln!("{} is not a valid car record:", path.display());
            for violation in &failure.violations { eprintln!("  {violation}"); }
            std::process::exit(2);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let (config_path, cmd, args) = parse_args();
    let config = match &config_path {
        Some(path) => Config::load_file(path),
        None => Config::load(),
    }
    .map_err(|e| { eprintln!("Error loading config: {}", e); e })?;

    match cmd.as_str() {
        "search" => {
            if args.is_empty() { eprintln!("Usage: carinfo search \"<car name>\""); std::process::exit(1); }
            let service = build_service(&config)?;
            match service.search(&args.join(" ")).await {
                Ok(result) => print_result(&result)?,
                Err(e) => {
                    report_error(&e);
                    std::process::exit(if e.is_connectivity() { 3 } else { 1 });
                }
            }
        }
        "interactive" => {
            let service = build_service(&config)?;
            interactive(&service).await?;
        }
        "validate" => {
            let Some(path) = args.first() else { eprintln!("Usage: carinfo validate <file.json>"); std::process::exit(1) };
            validate_file(path)?;
        }
        "fallback" => {
            if args.is_empty() { eprintln!("Usage: carinfo fallback \"<car name>\""); std::process::exit(1); }
            println!("{}", serde_json::to_string_pretty(&fallback_record(args.join(" ").trim()))?);
        }
        _ => { eprintln!("Unknown command: {}", cmd); eprintln!("{USAGE}"); std::process::exit(1); }
    }
    Ok(())
}
