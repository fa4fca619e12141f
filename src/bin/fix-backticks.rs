use clap::Parser;
use js_fixup::Fixup;
use std::process::ExitCode;

/// Replace every \` with ` in the client bundle
#[derive(Parser, Debug)]
#[command(name = "fix-backticks")]
#[command(version)]
#[command(about = "Collapse escaped backticks in public/static/app.js", long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    js_fixup::cli::main_with(&[Fixup::EscapedBacktick])
}
