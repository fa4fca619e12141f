//! The hardcoded cleanup passes for the web app's client bundle.

use crate::patch::Substitution;

/// File every fixup runs against
pub const TARGET_PATH: &str = "/home/user/webapp/public/static/app.js";

/// Printed to stdout after a successful run
pub const COMPLETION_MESSAGE: &str = "Fixed!";

/// A cleanup pass that collapses one escaped sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixup {
    /// `` \` `` to `` ` ``
    EscapedBacktick,
    /// `\${` to `${`
    EscapedInterpolation,
}

impl Fixup {
    /// Both fixups in the order they must run. Backticks go first so a
    /// template literal is delimited before its interpolations are restored.
    pub const ALL: [Fixup; 2] = [Fixup::EscapedBacktick, Fixup::EscapedInterpolation];

    pub const fn substitution(self) -> Substitution<'static> {
        match self {
            Fixup::EscapedBacktick => Substitution::new("\\`", "`"),
            Fixup::EscapedInterpolation => Substitution::new("\\${", "${"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fixup::EscapedBacktick => "escaped-backtick",
            Fixup::EscapedInterpolation => "escaped-interpolation",
        }
    }
}

impl std::fmt::Display for Fixup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Substitutions for `fixups`, preserving order
pub fn substitutions(fixups: &[Fixup]) -> Vec<Substitution<'static>> {
    fixups.iter().map(|f| f.substitution()).collect()
}
