use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::fixup::{self, COMPLETION_MESSAGE, Fixup, TARGET_PATH};
use crate::logging::init_logging;
use crate::patch::{PatchError, patch_all};
use crate::report::PatchReport;

/// Apply `fixups`, in order, to the file at `path`
pub fn run_fixups<P: AsRef<Path>>(path: P, fixups: &[Fixup]) -> Result<PatchReport, PatchError> {
    let names: Vec<_> = fixups.iter().map(Fixup::name).collect();
    tracing::info!(fixups = ?names, "running fixups");

    patch_all(path, &fixup::substitutions(fixups))
}

/// Patch `path` and write the completion message to `out` on success.
/// Errors go to stderr and nothing is written to `out`.
pub fn run_with<P: AsRef<Path>, W: Write>(path: P, fixups: &[Fixup], out: &mut W) -> ExitCode {
    let report = match run_fixups(path, fixups) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        occurrences = report.total_occurrences(),
        changed = report.changed,
        checksum = %report.checksum_after,
        "patched"
    );

    if let Err(e) = writeln!(out, "{}", COMPLETION_MESSAGE) {
        eprintln!("Error: failed to write to stdout: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Entry point shared by the binaries: patch the hardcoded target
pub fn main_with(fixups: &[Fixup]) -> ExitCode {
    init_logging();
    run_with(TARGET_PATH, fixups, &mut io::stdout().lock())
}
