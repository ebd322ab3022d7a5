// Test runner: parses argv against a fixed spec table and prints the
// resolved values in a stable `key value` format for the integration
// tests to drive.

use optspec::{fatal, Options};

const SPECS: &[&str] = &[
    "config:",
    "verbose",
    "quiet",
    "noargs",
    "name:",
    "level:",
    "seed:",
    "scale:",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let opt = match Options::parse(&args, SPECS) {
        Ok(opt) => opt,
        Err(err) => fatal(&err.to_string()),
    };

    if opt.contains("noargs") {
        if let Err(err) = opt.check_no_arguments() {
            fatal(&err.to_string());
        }
    }

    let level = opt
        .get_integer_range("level", 5, 0, 10)
        .unwrap_or_else(|err| fatal(&err.to_string()));
    let seed = opt
        .get_long("seed", 0)
        .unwrap_or_else(|err| fatal(&err.to_string()));
    let scale = opt
        .get_double("scale", 1.0)
        .unwrap_or_else(|err| fatal(&err.to_string()));

    println!("verbose {}", opt.get_or("verbose", "0"));
    println!("quiet {}", opt.get_or("quiet", "0"));
    println!("name {}", opt.get_or("name", "(null)"));
    println!("level {}", level);
    println!("seed {}", seed);
    println!("scale {}", scale);
    for arg in opt.arguments() {
        println!("arg {}", arg);
    }
}
