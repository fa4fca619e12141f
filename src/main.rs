use clap::Parser;
use js_fixup::Fixup;
use std::process::ExitCode;

/// Collapse escaped backticks, then escaped interpolations, in the client bundle
#[derive(Parser, Debug)]
#[command(name = "fix-js")]
#[command(version)]
#[command(about = "Unescape template literals in public/static/app.js", long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    js_fixup::cli::main_with(&Fixup::ALL)
}
