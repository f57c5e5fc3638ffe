use bumpcheck_core::{BumpKind, VersionBump};
use semver::Version;

use crate::error::ClassifyError;

/// Versions a published package may be introduced at.
pub const BOOTSTRAP_VERSIONS: [(u64, u64, u64); 3] = [(0, 0, 1), (0, 1, 0), (1, 0, 0)];

/// Classifies the transition from `base` to `new`.
///
/// The kind is decided by the highest version field that increased; the
/// `strict` flag records whether the transition is the minimal valid
/// increment for that kind, with lower fields reset to zero.
///
/// # Errors
///
/// Returns [`ClassifyError::FieldDecreased`] when any field went backwards
/// below an otherwise unchanged higher field. Such a transition is not a
/// bump of any kind and must not be silently accepted.
pub fn classify(base: &Version, new: &Version) -> Result<VersionBump, ClassifyError> {
    if new.major > base.major {
        return Ok(VersionBump {
            kind: BumpKind::Major,
            strict: new.major == base.major + 1 && new.minor == 0 && new.patch == 0,
        });
    }
    if new.major < base.major {
        return Err(decreased(base, new));
    }

    if new.minor > base.minor {
        return Ok(VersionBump {
            kind: BumpKind::Minor,
            strict: new.minor == base.minor + 1 && new.patch == 0,
        });
    }
    if new.minor < base.minor {
        return Err(decreased(base, new));
    }

    if new.patch > base.patch {
        return Ok(VersionBump {
            kind: BumpKind::Patch,
            strict: new.patch == base.patch + 1,
        });
    }
    if new.patch < base.patch {
        return Err(decreased(base, new));
    }

    Ok(VersionBump::none())
}

fn decreased(base: &Version, new: &Version) -> ClassifyError {
    ClassifyError::FieldDecreased {
        base: base.clone(),
        new: new.clone(),
    }
}

/// Applies the minimal strict increment of `kind` to `version`. Used to name
/// the expected version in diagnostics.
#[must_use]
pub fn bump_version(version: &Version, kind: BumpKind) -> Version {
    let mut new_version = version.clone();

    match kind {
        BumpKind::None => {}
        BumpKind::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpKind::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        BumpKind::Patch => {
            new_version.patch += 1;
        }
    }

    new_version
}

/// Whether the version carries a pre-release or build suffix.
#[must_use]
pub fn has_suffix(version: &Version) -> bool {
    !version.pre.is_empty() || !version.build.is_empty()
}

/// Whether a new published package may start at this version.
#[must_use]
pub fn is_bootstrap_version(version: &Version) -> bool {
    !has_suffix(version)
        && BOOTSTRAP_VERSIONS.contains(&(version.major, version.minor, version.patch))
}
