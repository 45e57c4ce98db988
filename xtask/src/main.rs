mod unicode;

use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("unicode") => unicode::run(),
        Some(other) => Err(format!("unknown task: {other}").into()),
        None => Err("usage: cargo run -p xtask -- unicode".into()),
    }
}
