// Quick check: load a configuration and run a few strings through it.
//
//   cargo run -p fsalex-engine --example recognize -- path/to/config.json 12 -7 1-2
use std::fs;

use fsalex_engine::Fsa;

fn main() {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/signed_int.json").to_string()
    });

    let text = fs::read_to_string(&config_path).expect("Failed to read configuration");
    let fsa = if config_path.ends_with(".json") {
        Fsa::from_json(&text)
    } else {
        Fsa::from_text(&text)
    }
    .expect("Failed to build automaton");

    println!(
        "Loaded {}: {} states, {} classes",
        config_path,
        fsa.table().state_count(),
        fsa.classifier().class_count(),
    );

    let mut inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        inputs = ["0", "42", "-17", "+3", "--1", "1-2", "", "12a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    for input in &inputs {
        match fsa.evaluate(input, &mut ()).rejection() {
            None => println!("{:10} → accepted", format!("{input:?}")),
            Some(reason) => println!("{:10} → rejected ({reason})", format!("{input:?}")),
        }
    }
}
