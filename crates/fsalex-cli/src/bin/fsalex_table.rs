// fsalex-table: Print an automaton configuration.
//
// Loads and validates a configuration, then prints it as an aligned
// transition table or as JSON.
//
// Usage:
//   fsalex-table [-c CONFIG] [OPTIONS]
//
// Options:
//   -c, --config PATH      Automaton configuration (text or .json)
//   --email                Use the bundled email grammar
//   --json                 Print the configuration as JSON
//   -v, --verbose          Debug logging
//   -h, --help             Print help

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if fsalex_cli::wants_help(&args) {
        println!("fsalex-table: Print an automaton configuration.");
        println!();
        println!("Usage: fsalex-table [-c CONFIG] [OPTIONS]");
        println!();
        println!("Row markers: > initial, * accepting, ! rejecting.");
        println!();
        println!("Options:");
        println!("  -c, --config PATH      Automaton configuration (text or .json)");
        println!("  --email                Use the bundled email grammar");
        println!("  --json                 Print the configuration as JSON");
        println!("  -v, --verbose          Debug logging");
        println!("  -h, --help             Print this help");
        return;
    }

    let (config_path, mut args) =
        fsalex_cli::take_option(&args, "--config", "-c").unwrap_or_else(|e| fsalex_cli::fatal(&e));
    let verbose = fsalex_cli::take_flag(&mut args, &["-v", "--verbose"]);
    let bundled = fsalex_cli::take_flag(&mut args, &["--email"]);
    let json = fsalex_cli::take_flag(&mut args, &["--json"]);

    fsalex_cli::init_logging(verbose);

    if let Some(arg) = args.first() {
        fsalex_cli::fatal(&format!("unexpected argument {arg}"));
    }

    let (source, config) = fsalex_cli::resolve_config(config_path.as_deref(), bundled)
        .unwrap_or_else(|e| fsalex_cli::fatal(&e.to_string()));
    let fsa = fsalex_engine::Fsa::from_config(&config)
        .unwrap_or_else(|e| fsalex_cli::fatal(&format!("invalid configuration {source}: {e}")));

    if json {
        match config.to_json_pretty() {
            Ok(text) => println!("{text}"),
            Err(e) => fsalex_cli::fatal(&e.to_string()),
        }
    } else {
        println!("# {source}");
        print!("{}", fsalex_cli::render_table(&fsa));
    }
}
