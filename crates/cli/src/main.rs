mod echo;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use shelfwise_core::cache::DEFAULT_CACHE_DIR;
use shelfwise_core::fetch::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use shelfwise_core::{
    ExtractConfig, FetchConfig, JsonConfig, PageCache, PageOrigin, ProfileId, ScanConfig, TextConfig, convert_to_json,
    convert_to_text, profile_url, scan_profile,
};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::echo::{format_size, print_banner, print_detail, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted before prompting for a profile ID
const USER_ENV: &str = "GOODREADS_USER";

/// Output format for the extracted profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Print the display name and shelves of a Goodreads profile
#[derive(Parser, Debug)]
#[command(name = "shelfwise")]
#[command(version)]
#[command(about = "Print the display name and shelves of a Goodreads profile", long_about = None)]
struct Args {
    /// Goodreads profile ID, e.g. 12345 or 12345-jane-doe (prompted for when absent)
    #[arg(short, long, env = USER_ENV, value_name = "ID")]
    user: Option<String>,

    /// Directory for cached profile pages
    #[arg(long, default_value = DEFAULT_CACHE_DIR, value_name = "DIR")]
    cache_dir: PathBuf,

    /// Ignore a cached page and fetch again (the cache is rewritten)
    #[arg(long)]
    refresh: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Add a line with the total number of books (text only)
    #[arg(long)]
    total: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// User-Agent for HTTP requests
    #[arg(long, default_value = DEFAULT_USER_AGENT, value_name = "UA")]
    user_agent: String,

    /// Profile URL prefix the ID is appended to
    #[arg(long, default_value = DEFAULT_BASE_URL, value_name = "URL")]
    base_url: Url,

    /// Fail on non-2xx responses instead of parsing the error page
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Ask for a profile ID on stderr and read one line from stdin
fn prompt_for_user() -> anyhow::Result<String> {
    eprint!("Enter Goodreads ID: ");
    io::stderr().flush().context("Failed to write prompt")?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read profile ID from stdin")?;

    Ok(line)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    if args.verbose {
        print_banner();
    }

    let raw_user = match args.user {
        Some(user) => user,
        None => prompt_for_user()?,
    };
    let id = ProfileId::parse(&raw_user).context("Invalid Goodreads ID")?;

    let config = ScanConfig {
        fetch: FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent,
            base_url: args.base_url,
            require_success: args.strict,
        },
        extract: ExtractConfig::default(),
        cache_dir: args.cache_dir,
        refresh: args.refresh,
    };

    if args.verbose {
        print_step(1, 2, &format!("Loading profile {}", id.as_str().bright_white()));
    }

    let cached_page = PageCache::new(&config.cache_dir).path_for(&id);
    if !config.refresh && cached_page.exists() {
        print_info(&format!("Loading from local cache {}", cached_page.display()));
    } else {
        let url = profile_url(&config.fetch.base_url, &id).context("Invalid base URL")?;
        print_info(&format!("Fetching from Goodreads {}", url));
    }

    let scan = scan_profile(&id, &config)
        .await
        .with_context(|| format!("Failed to load profile {}", id))?;

    if args.verbose {
        match &scan.origin {
            PageOrigin::Cache(path) => print_detail("Source", &path.display().to_string()),
            PageOrigin::Remote(url) => print_detail("Source", url.as_str()),
        }
        print_detail("Size", &format_size(scan.page_size));
        eprintln!();
        print_step(2, 2, "Extracting name and shelves");
        print_detail("Shelves", &scan.profile.shelves.len().to_string());
        eprintln!();
    }

    if scan.profile.name.is_none() {
        print_warning("No profile name on the page; the profile may be private or the ID wrong");
    }

    let output = match args.format {
        OutputFormat::Text => convert_to_text(&scan.profile, &TextConfig { include_total: args.total }),
        OutputFormat::Json => {
            let mut json =
                convert_to_json(&scan.profile, &JsonConfig { pretty: args.pretty }).context("Failed to render JSON")?;
            json.push('\n');
            json
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
