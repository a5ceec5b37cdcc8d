//! Version-bump presets
//!
//! A preset narrows which bot pull requests get merged, based on the version
//! change announced in the commit headline (`Bump serde from 1.0.1 to 1.0.2`).

use crate::error::Error;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Matches Dependabot headlines, e.g. `Bump foo from 1.2.3 to 1.3.0` or
/// `Update foo requirement from ~> 1.2 to ~> 1.3 in /docs`, optionally led by
/// `[Security]` or a commit-message prefix such as `build(deps):`.
static BUMP_HEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\[[^\]]+\]\s+|[\w-]+(?:\([^)]*\))?!?:\s+)*(?:bump|update)\s+\S+(?:\s+requirement)?\s+from\s+(\S+(?:\s+\S+)?)\s+to\s+(\S+(?:\s+\S+)?)(?:\s+in\s+\S+)?$")
        .unwrap_or_else(|e| panic!("invalid bump headline regex: {e}"))
});

/// Numeric components of a version, with missing parts as zero
static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\D*?(\d+)(?:\.(\d+))?(?:\.(\d+))?")
        .unwrap_or_else(|e| panic!("invalid version regex: {e}"))
});

/// Which version bumps may be merged automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Minor and patch bumps (major unchanged)
    DependabotMinor,
    /// Patch bumps only (major and minor unchanged)
    DependabotPatch,
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEPENDABOT_MINOR" => Ok(Self::DependabotMinor),
            "DEPENDABOT_PATCH" => Ok(Self::DependabotPatch),
            other => Err(Error::Config(format!(
                "unknown preset '{other}', expected DEPENDABOT_MINOR or DEPENDABOT_PATCH"
            ))),
        }
    }
}

/// A `major.minor.patch` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    /// Major component
    pub major: u64,
    /// Minor component (0 when absent)
    pub minor: u64,
    /// Patch component (0 when absent)
    pub patch: u64,
}

/// Parse the leading numeric version out of a string like `v1.2`, `~> 4.0`
/// or `=2.3.4-beta`.
pub fn parse_version(raw: &str) -> Option<Version> {
    let caps = VERSION.captures(raw.trim())?;
    let part = |i: usize| -> Option<u64> {
        caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
    };
    Some(Version {
        major: part(1)?,
        minor: part(2)?,
        patch: part(3)?,
    })
}

/// Extract the `(from, to)` versions of a bump headline
pub fn parse_bump(headline: &str) -> Option<(Version, Version)> {
    let caps = BUMP_HEADLINE.captures(headline.trim())?;
    let from = parse_version(caps.get(1)?.as_str())?;
    let to = parse_version(caps.get(2)?.as_str())?;
    Some((from, to))
}

impl Preset {
    /// Whether this preset allows merging a commit with `headline`
    ///
    /// Headlines that do not describe a version bump are rejected.
    pub fn allows(self, headline: &str) -> bool {
        let Some((from, to)) = parse_bump(headline) else {
            return false;
        };
        match self {
            Self::DependabotMinor => from.major == to.major,
            Self::DependabotPatch => from.major == to.major && from.minor == to.minor,
        }
    }
}
