// fsalex-cli: shared utilities for CLI tools.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use fsalex_core::Verdict;
use fsalex_engine::{ConfigError, Fsa, FsaConfig};
use serde::Serialize;

/// Environment variable naming a configuration file.
const CONFIG_ENV: &str = "FSALEX_CONFIG";

/// File names looked for in the current directory.
const DEFAULT_CONFIG_NAMES: &[&str] = &["fsalex.txt", "fsalex.json"];

/// Error type for loading a configuration from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid configuration {}: {source}", .path.display())]
    Config { path: PathBuf, source: ConfigError },
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Bundled,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Bundled => f.write_str("bundled email grammar"),
        }
    }
}

/// Read a configuration file. `.json` files are parsed as JSON, anything
/// else as the sectioned text format.
pub fn load_config(path: &Path) -> Result<FsaConfig, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = if path.extension().is_some_and(|ext| ext == "json") {
        FsaConfig::from_json(&text)
    } else {
        FsaConfig::parse_text(&text)
    };
    parsed.map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate, load and build the automaton.
///
/// Search order:
/// 1. `explicit` path (must exist)
/// 2. `FSALEX_CONFIG` environment variable
/// 3. `fsalex.txt` / `fsalex.json` in the current directory
/// 4. The bundled email grammar
///
/// `bundled` skips the search and uses the bundled email grammar directly.
pub fn load_fsa(explicit: Option<&str>, bundled: bool) -> Result<(ConfigSource, Fsa), LoadError> {
    let (source, config) = resolve_config(explicit, bundled)?;
    let fsa = Fsa::from_config(&config).map_err(|source_err| LoadError::Config {
        path: match &source {
            ConfigSource::File(path) => path.clone(),
            ConfigSource::Bundled => PathBuf::from("<bundled>"),
        },
        source: source_err,
    })?;
    log::info!("loaded automaton from {source}");
    Ok((source, fsa))
}

/// Locate and parse the configuration without building the automaton.
pub fn resolve_config(
    explicit: Option<&str>,
    bundled: bool,
) -> Result<(ConfigSource, FsaConfig), LoadError> {
    if !bundled {
        if let Some(path) = explicit {
            let path = PathBuf::from(path);
            let config = load_config(&path)?;
            return Ok((ConfigSource::File(path), config));
        }
        for path in build_search_paths() {
            if path.is_file() {
                let config = load_config(&path)?;
                return Ok((ConfigSource::File(path), config));
            }
            log::debug!("no configuration at {}", path.display());
        }
    }

    let config = fsalex_email::email_config().map_err(|source| LoadError::Config {
        path: PathBuf::from("<bundled>"),
        source,
    })?;
    Ok((ConfigSource::Bundled, config))
}

/// Candidate configuration files, in search order.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in DEFAULT_CONFIG_NAMES {
            paths.push(cwd.join(name));
        }
    }

    paths
}

/// Remove `--long=VALUE`, `--long VALUE` or `-s VALUE` from `args`.
///
/// Returns `(value, remaining_args)`. A trailing flag without a value is an
/// error.
pub fn take_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let long_eq = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Remove every occurrence of a boolean flag, reporting whether it was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Install the logger. `RUST_LOG` controls the filter unless `verbose` forces
/// debug output.
pub fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Write one verdict in the human-readable format:
///
/// ```text
/// ab@cd.ef.gh is Valid
/// Username:   ab
/// ...
///
/// ab@cd is Invalid
/// ```
///
/// `fields` renders the tokens of an accepted input; `None` prints nothing.
pub fn write_verdict_text<W, T>(
    out: &mut W,
    input: &str,
    verdict: &Verdict<T>,
    fields: impl Fn(&T) -> Option<String>,
    show_reason: bool,
) -> io::Result<()>
where
    W: Write,
{
    match verdict {
        Verdict::Accepted { tokens, .. } => {
            writeln!(out, "{input} is Valid")?;
            if let Some(rendered) = fields(tokens) {
                writeln!(out, "{rendered}")?;
            }
        }
        Verdict::Rejected { reason } => {
            writeln!(out, "{input} is Invalid")?;
            if show_reason {
                writeln!(out, "  reason: {reason}")?;
            }
        }
    }
    writeln!(out)
}

#[derive(Serialize)]
struct JsonVerdict<'a, T: Serialize> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Write one verdict as a single JSON line.
pub fn write_verdict_json<W, T>(out: &mut W, input: &str, verdict: &Verdict<T>) -> io::Result<()>
where
    W: Write,
    T: Serialize,
{
    let record = match verdict {
        Verdict::Accepted { state, tokens } => JsonVerdict {
            input,
            valid: true,
            state: Some(state.0),
            fields: Some(tokens),
            reason: None,
        },
        Verdict::Rejected { reason } => JsonVerdict {
            input,
            valid: false,
            state: None,
            fields: None,
            reason: Some(reason.to_string()),
        },
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}

/// Render the automaton as an aligned transition table.
///
/// Row markers: `>` initial, `*` accepting, `!` rejecting. A legend listing
/// each class's symbols precedes the table.
pub fn render_table(fsa: &Fsa) -> String {
    let classifier = fsa.classifier();
    let table = fsa.table();
    let width = table
        .state_count()
        .saturating_sub(1)
        .to_string()
        .len()
        .max(table.class_count().saturating_sub(1).to_string().len())
        .max(2);

    let mut s = String::new();
    for (class, members) in classifier.classes().iter().enumerate() {
        let symbols: String = members.iter().collect();
        let _ = writeln!(s, "class {class}: {symbols}");
    }
    let _ = writeln!(s);

    let _ = write!(s, "   {:>width$} |", "");
    for class in 0..table.class_count() {
        let _ = write!(s, " {class:>width$}");
    }
    let _ = writeln!(s);

    for index in 0..table.state_count() {
        let state = fsalex_core::StateId(index as u32);
        let marker = |flag: bool, c: char| if flag { c } else { ' ' };
        let _ = write!(
            s,
            "{}{}{}{:>width$} |",
            marker(state == fsalex_core::StateId::INITIAL, '>'),
            marker(fsa.is_accepting(state), '*'),
            marker(fsa.is_rejecting(state), '!'),
            index
        );
        for target in table.row(state) {
            let _ = write!(s, " {:>width$}", target.0);
        }
        let _ = writeln!(s);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsalex_core::{Rejection, StateId};
    use fsalex_email::{EmailAddress, EmailTokenBuilder};

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_option_forms() {
        let (v, rest) = take_option(&args(&["-c", "a.txt", "in"]), "--config", "-c").unwrap();
        assert_eq!(v.as_deref(), Some("a.txt"));
        assert_eq!(rest, args(&["in"]));

        let (v, rest) = take_option(&args(&["--config=b.json"]), "--config", "-c").unwrap();
        assert_eq!(v.as_deref(), Some("b.json"));
        assert!(rest.is_empty());

        let (v, rest) = take_option(&args(&["x", "y"]), "--config", "-c").unwrap();
        assert!(v.is_none());
        assert_eq!(rest, args(&["x", "y"]));

        assert!(take_option(&args(&["--config"]), "--config", "-c").is_err());
    }

    #[test]
    fn take_flag_removes_all_occurrences() {
        let mut a = args(&["-v", "in", "--verbose"]);
        assert!(take_flag(&mut a, &["-v", "--verbose"]));
        assert_eq!(a, args(&["in"]));
        assert!(!take_flag(&mut a, &["--json"]));
    }

    #[test]
    fn text_output_for_valid_and_invalid() {
        let fsa = fsalex_email::email_fsa().unwrap();
        let mut builder = EmailTokenBuilder::new();
        let mut out = Vec::new();

        let verdict = fsa.evaluate("ab@cd.ef.gh", &mut builder);
        write_verdict_text(&mut out, "ab@cd.ef.gh", &verdict, |a: &EmailAddress| Some(a.to_string()), false).unwrap();
        let verdict = fsa.evaluate("ab@cd", &mut builder);
        write_verdict_text(&mut out, "ab@cd", &verdict, |a: &EmailAddress| Some(a.to_string()), true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ab@cd.ef.gh is Valid\n\
             Username:   ab\n\
             Local Host: cd\n\
             SLD:        ef\n\
             TLD:        gh\n\
             \n\
             ab@cd is Invalid\n  reason: input ended in non-accepting state 5\n\n"
        );
    }

    #[test]
    fn json_output() {
        let mut out = Vec::new();
        let accepted: Verdict<EmailAddress> = Verdict::Accepted {
            state: StateId(7),
            tokens: EmailAddress {
                username: "a".into(),
                host: String::new(),
                second_level_domain: "b".into(),
                top_level_domain: "c".into(),
            },
        };
        write_verdict_json(&mut out, "a@b.c", &accepted).unwrap();
        let rejected: Verdict<EmailAddress> = Verdict::Rejected {
            reason: Rejection::OutOfAlphabet {
                position: 0,
                symbol: '#',
            },
        };
        write_verdict_json(&mut out, "#", &rejected).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["valid"], true);
        assert_eq!(lines[0]["state"], 7);
        assert_eq!(lines[0]["fields"]["top_level_domain"], "c");
        assert_eq!(lines[1]["valid"], false);
        assert!(lines[1].get("fields").is_none());
        assert_eq!(
            lines[1]["reason"],
            "symbol '#' at position 0 is not in the alphabet"
        );
    }

    #[test]
    fn table_rendering_marks_states() {
        let fsa = Fsa::from_text("a\nb\n\n1 2\n1 2\n2 2\n\n1\n\n2\n").unwrap();
        let rendered = render_table(&fsa);
        let expected = [
            "class 0: a",
            "class 1: b",
            "",
            "      |  0  1",
            ">   0 |  1  2",
            " *  1 |  1  2",
            "  ! 2 |  2  2",
        ]
        .join("\n")
            + "\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn bundled_fallback() {
        let (source, config) = resolve_config(None, true).unwrap();
        assert_eq!(source, ConfigSource::Bundled);
        assert_eq!(config.state_count(), 9);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = resolve_config(Some("/nonexistent/fsalex.txt"), false).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
