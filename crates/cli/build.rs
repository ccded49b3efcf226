use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("shelfwise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the display name and shelves of a Goodreads profile")
        .arg(
            clap::arg!(-u --user <ID> "Goodreads profile ID, e.g. 12345 or 12345-jane-doe (prompted for when absent)")
                .env("GOODREADS_USER")
                .required(false),
        )
        .arg(
            clap::arg!(--"cache-dir" <DIR> "Directory for cached profile pages")
                .value_name("DIR")
                .default_value("files")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--refresh "Ignore a cached page and fetch again (the cache is rewritten)"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(clap::arg!(--total "Add a line with the total number of books (text only)"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--timeout <SECS> "HTTP timeout in seconds")
                .default_value("30")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            clap::arg!(--"user-agent" <UA> "User-Agent for HTTP requests")
                .value_name("UA")
                .default_value("Mozilla/5.0"),
        )
        .arg(
            clap::arg!(--"base-url" <URL> "Profile URL prefix the ID is appended to")
                .value_name("URL")
                .default_value("https://www.goodreads.com/user/show/"),
        )
        .arg(clap::arg!(--strict "Fail on non-2xx responses instead of parsing the error page"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "shelfwise", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "shelfwise", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "shelfwise", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "shelfwise", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
