use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::file::{self, FileError};
use crate::position::{LineIndex, Span};
use crate::report::{PassReport, PatchReport, Site, generate_run_id};

/// A literal find-and-replace pair
///
/// `search` is matched verbatim; no wildcard or regex semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Substitution<'a> {
    pub search: &'a str,
    pub replace: &'a str,
}

impl<'a> Substitution<'a> {
    pub const fn new(search: &'a str, replace: &'a str) -> Self {
        Self { search, replace }
    }
}

/// Output of one in-memory replacement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// Text after replacement
    pub content: String,
    /// Spans of the replaced occurrences in the input text, left to right
    pub sites: Vec<Span>,
}

impl Replaced {
    pub fn occurrences(&self) -> usize {
        self.sites.len()
    }
}

/// Error types for patch operations
#[derive(Debug, Error)]
pub enum PatchError {
    /// An empty search string would match between every character
    #[error("Substitution {index} has an empty search string")]
    EmptySearch { index: usize },

    #[error(transparent)]
    File(#[from] FileError),
}

/// Reject substitution lists that cannot be applied, before touching disk
pub fn validate_substitutions(substitutions: &[Substitution<'_>]) -> Result<(), PatchError> {
    match substitutions.iter().position(|s| s.search.is_empty()) {
        Some(index) => Err(PatchError::EmptySearch { index }),
        None => Ok(()),
    }
}

/// Replace every non-overlapping occurrence of `substitution.search`,
/// scanned left to right, with `substitution.replace`
///
/// Text between occurrences is copied through unchanged.
pub fn replace_literal(content: &str, substitution: Substitution<'_>) -> Result<Replaced, PatchError> {
    validate_substitutions(&[substitution])?;

    let search_len = substitution.search.len();
    let mut output = String::with_capacity(content.len());
    let mut sites = Vec::new();
    let mut copied_up_to = 0;

    for (start, _) in content.match_indices(substitution.search) {
        output.push_str(&content[copied_up_to..start]);
        output.push_str(substitution.replace);
        sites.push(Span {
            byte_start: start,
            byte_end: start + search_len,
        });
        copied_up_to = start + search_len;
    }
    output.push_str(&content[copied_up_to..]);

    Ok(Replaced {
        content: output,
        sites,
    })
}

/// Apply substitutions to a file in place
///
/// Each substitution is a separate pass over the output of the previous
/// one, so order matters. The file is read once and overwritten once, in
/// full, even when nothing matched.
///
/// # Returns
/// * `Ok(PatchReport)` - Checksums and per-pass occurrence counts
/// * `Err(PatchError)` - Invalid substitution, or a read/decode/write failure
pub fn patch_all<P: AsRef<Path>>(
    path: P,
    substitutions: &[Substitution<'_>],
) -> Result<PatchReport, PatchError> {
    validate_substitutions(substitutions)?;

    let run_id = generate_run_id();
    let span = tracing::info_span!("patch", %run_id, path = %path.as_ref().display());
    let _entered = span.enter();

    let original = file::read_file(path.as_ref())?;
    let mut current = original.content.clone();
    let mut passes = Vec::with_capacity(substitutions.len());

    for substitution in substitutions {
        let replaced = replace_literal(&current, *substitution)?;
        let index = LineIndex::new(&current);
        let sites: Vec<_> = replaced
            .sites
            .iter()
            .map(|&replaced_span| {
                let (start, end) = index.span_positions(replaced_span);
                Site { start, end }
            })
            .collect();

        for site in &sites {
            tracing::trace!(
                line = site.start.line,
                column = site.start.column,
                search = substitution.search,
                "replaced"
            );
        }
        tracing::info!(
            search = substitution.search,
            replace = substitution.replace,
            occurrences = replaced.occurrences(),
            "applied substitution"
        );

        passes.push(PassReport {
            search: substitution.search.to_string(),
            replace: substitution.replace.to_string(),
            occurrences: replaced.occurrences(),
            sites,
        });
        current = replaced.content;
    }

    file::write_file(path.as_ref(), &current)?;

    let checksum_after = file::checksum(&current);
    let report = PatchReport {
        run_id,
        path: original.path,
        changed: checksum_after != original.checksum,
        checksum_before: original.checksum,
        checksum_after,
        bytes_before: original.len,
        bytes_after: current.len(),
        passes,
    };

    match report.to_json() {
        Ok(json) => tracing::debug!(report = %json, "patch complete"),
        Err(e) => tracing::warn!(error = %e, "could not serialize patch report"),
    }

    Ok(report)
}

/// Replace every occurrence of `search` with `replace` in the file at `path`
pub fn patch<P: AsRef<Path>>(path: P, search: &str, replace: &str) -> Result<PatchReport, PatchError> {
    patch_all(path, &[Substitution::new(search, replace)])
}
