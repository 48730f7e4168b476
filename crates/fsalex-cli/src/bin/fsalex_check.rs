// fsalex-check: Check input lines against a finite state automaton.
//
// Reads strings (one per line) from INPUT or stdin and reports whether each
// belongs to the language. Accepted strings are decomposed into fields by the
// selected token builder.
//
// Usage:
//   fsalex-check [-c CONFIG] [OPTIONS] [INPUT]
//
// Options:
//   -c, --config PATH      Automaton configuration (text or .json)
//   --email                Use the bundled email grammar
//   -t, --tokens KIND      Token builder: email (default) or none
//   -r, --reason           Print why rejected strings were rejected
//   --json                 One JSON object per line
//   -v, --verbose          Debug logging
//   -h, --help             Print help

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use fsalex_core::Verdict;
use fsalex_email::{EmailAddress, EmailTokenBuilder};
use fsalex_engine::{Fsa, TokenBuilder, prepare_line};
use serde::Serialize;

struct Options {
    json: bool,
    show_reason: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if fsalex_cli::wants_help(&args) {
        println!("fsalex-check: Check input lines against a finite state automaton.");
        println!();
        println!("Usage: fsalex-check [-c CONFIG] [OPTIONS] [INPUT]");
        println!();
        println!("Reads strings from INPUT or stdin (one per line). Prints:");
        println!("  <string> is Valid      followed by the extracted fields");
        println!("  <string> is Invalid");
        println!();
        println!("Options:");
        println!("  -c, --config PATH      Automaton configuration (text or .json)");
        println!("  --email                Use the bundled email grammar");
        println!("  -t, --tokens KIND      Token builder: email (default) or none");
        println!("  -r, --reason           Print why rejected strings were rejected");
        println!("  --json                 One JSON object per line");
        println!("  -v, --verbose          Debug logging");
        println!("  -h, --help             Print this help");
        println!();
        println!("Without -c, FSALEX_CONFIG, ./fsalex.txt and ./fsalex.json are tried");
        println!("before falling back to the bundled email grammar.");
        return;
    }

    let (config_path, args) =
        fsalex_cli::take_option(&args, "--config", "-c").unwrap_or_else(|e| fsalex_cli::fatal(&e));
    let (tokens, mut args) =
        fsalex_cli::take_option(&args, "--tokens", "-t").unwrap_or_else(|e| fsalex_cli::fatal(&e));
    let verbose = fsalex_cli::take_flag(&mut args, &["-v", "--verbose"]);
    let bundled = fsalex_cli::take_flag(&mut args, &["--email"]);
    let options = Options {
        json: fsalex_cli::take_flag(&mut args, &["--json"]),
        show_reason: fsalex_cli::take_flag(&mut args, &["-r", "--reason"]),
    };

    fsalex_cli::init_logging(verbose);

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-') && a.len() > 1) {
        fsalex_cli::fatal(&format!("unknown option {unknown}"));
    }
    if args.len() > 1 {
        fsalex_cli::fatal("at most one INPUT file may be given");
    }

    let (_, fsa) = fsalex_cli::load_fsa(config_path.as_deref(), bundled)
        .unwrap_or_else(|e| fsalex_cli::fatal(&e.to_string()));

    let reader: Box<dyn BufRead> = match args.first().map(String::as_str) {
        None | Some("-") => Box::new(io::stdin().lock()),
        Some(path) => match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => fsalex_cli::fatal(&format!("failed to open {path}: {e}")),
        },
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = match tokens.as_deref().unwrap_or("email") {
        "email" => run(
            &fsa,
            &mut EmailTokenBuilder::new(),
            reader,
            &mut out,
            &options,
            |a: &EmailAddress| Some(a.to_string()),
        ),
        "none" => run(&fsa, &mut (), reader, &mut out, &options, |_: &()| None),
        other => fsalex_cli::fatal(&format!("unknown token builder {other:?} (expected email or none)")),
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        fsalex_cli::fatal(&format!("failed to write output: {e}"));
    }
}

fn run<B, W>(
    fsa: &Fsa,
    builder: &mut B,
    reader: Box<dyn BufRead>,
    out: &mut W,
    options: &Options,
    fields: impl Fn(&B::Tokens) -> Option<String>,
) -> io::Result<()>
where
    B: TokenBuilder,
    B::Tokens: Serialize,
    W: Write,
{
    let mut accepted = 0usize;
    let mut total = 0usize;

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        };
        let input = prepare_line(&line);
        let verdict: Verdict<B::Tokens> = fsa.evaluate(input, builder);

        total += 1;
        if verdict.is_accepted() {
            accepted += 1;
        }

        if options.json {
            fsalex_cli::write_verdict_json(out, input, &verdict)?;
        } else {
            fsalex_cli::write_verdict_text(out, input, &verdict, &fields, options.show_reason)?;
        }
    }

    log::info!("{accepted} of {total} lines accepted");
    Ok(())
}
