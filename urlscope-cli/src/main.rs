use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use urlscope_header::HeaderList;
use urlscope_pattern::UrlMatchPattern;
use urlscope_scope::{ScopeConfig, evaluate_scope};

#[derive(Debug, Parser)]
#[command(name = "urlscope", about = "Test URLs against match patterns and scope rules")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long = "log-level", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print whether each URL matches the pattern.
    Test { pattern: String, urls: Vec<String> },
    /// Show the outcome of every matching stage as JSON.
    Explain { pattern: String, url: String },
    /// Evaluate URLs against a TOML scope rule file.
    Scope {
        #[arg(long)]
        config: PathBuf,
        urls: Vec<String>,
    },
    /// Parse a raw header block and print it as JSON definitions.
    Headers {
        #[arg(long, value_enum, default_value_t = Separator::Lf)]
        separator: Separator,
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Separator {
    Lf,
    Crlf,
}

impl Separator {
    fn as_str(self) -> &'static str {
        match self {
            Separator::Lf => "\n",
            Separator::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Serialize)]
struct ScopeLine<'a> {
    url: &'a str,
    in_scope: bool,
    matched_include: Vec<usize>,
    matched_exclude: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct HeadersOutput {
    headers: Vec<urlscope_header::HeaderDefinition>,
    unparsed: String,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Test { pattern, urls } => run_test(&pattern, &urls),
        Command::Explain { pattern, url } => {
            let explanation = UrlMatchPattern::new(pattern).explain(&url);
            print_json(&explanation)
        }
        Command::Scope { config, urls } => run_scope(&config, &urls),
        Command::Headers { separator, file } => run_headers(&file, separator),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_test(pattern: &str, urls: &[String]) -> Result<(), String> {
    let pattern = UrlMatchPattern::new(pattern);
    if let Some(message) = invalid_pattern_warning(&pattern) {
        warn!("{message}");
    }

    for url in urls {
        let verdict = if pattern.test(url) { "match" } else { "no match" };
        println!("{verdict}\t{url}");
    }
    Ok(())
}

fn invalid_pattern_warning(pattern: &UrlMatchPattern) -> Option<String> {
    if pattern.is_valid() {
        return None;
    }
    Some(format!(
        "pattern `{pattern}` does not follow the match pattern grammar and matches nothing"
    ))
}

fn run_scope(config: &Path, urls: &[String]) -> Result<(), String> {
    let config = ScopeConfig::load(config).map_err(|err| err.to_string())?;
    debug!(rules = config.rules.len(), "loaded scope rules");

    for url in urls {
        let evaluation = evaluate_scope(&config.rules, url);
        print_json(&ScopeLine {
            url,
            in_scope: evaluation.in_scope,
            matched_include: evaluation.matched_include,
            matched_exclude: evaluation.matched_exclude,
        })?;
    }
    Ok(())
}

fn run_headers(file: &Path, separator: Separator) -> Result<(), String> {
    let raw = std::fs::read_to_string(file).map_err(|err| err.to_string())?;
    let headers = HeaderList::parse(&raw);
    debug!(count = headers.len(), "parsed headers");

    print_json(&HeadersOutput {
        headers: headers.definitions(),
        unparsed: headers.unparse(Some(separator.as_str())),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let line = serde_json::to_string(value).map_err(|err| err.to_string())?;
    println!("{line}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use urlscope_pattern::UrlMatchPattern;

    use super::{Cli, Command, Separator, invalid_pattern_warning};

    #[test]
    fn warns_only_for_patterns_that_match_nothing() {
        let warning = invalid_pattern_warning(&UrlMatchPattern::new("example.com")).unwrap();
        assert!(warning.contains("`example.com`"), "{warning}");
        assert_eq!(
            invalid_pattern_warning(&UrlMatchPattern::new("https://*.example.com/*")),
            None
        );
        assert_eq!(invalid_pattern_warning(&UrlMatchPattern::default()), None);
    }

    #[test]
    fn parses_test_command_with_many_urls() {
        let cli = Cli::try_parse_from([
            "urlscope",
            "test",
            "https://*.example.com/*",
            "https://a.example.com/",
            "https://b.example.com/",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Command::Test { pattern, urls } => {
                assert_eq!(pattern, "https://*.example.com/*");
                assert_eq!(urls.len(), 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_scope_command() {
        let cli = Cli::try_parse_from([
            "urlscope",
            "--log-level",
            "debug",
            "scope",
            "--config",
            "scope.toml",
            "https://example.com/",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Scope { .. }));
    }

    #[test]
    fn headers_separator_defaults_to_lf() {
        let cli = Cli::try_parse_from(["urlscope", "headers", "raw.txt"]).unwrap();
        match cli.command {
            Command::Headers { separator, .. } => assert_eq!(separator.as_str(), "\n"),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(Separator::Crlf.as_str(), "\r\n");
    }
}
