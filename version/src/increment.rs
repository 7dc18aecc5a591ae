use crate::error::{Result, VersionError};
use crate::parse::{PreRelease, Stage, extract_version};
use crate::{PreSegment, ReleaseSegment};

/// Increments the version number inside `name`, keeping any surrounding text.
///
/// # Errors
/// Returns an error if `name` holds no version number, or if the requested
/// pre-release stage comes before the current one.
pub fn increment_version(
    name: &str,
    release: Option<ReleaseSegment>,
    pre: Option<PreSegment>,
) -> Result<String> {
    let found =
        extract_version(name).ok_or_else(|| VersionError::NoVersionNumber(name.to_string()))?;
    let mut version = found.version;

    if let Some(segment) = release {
        let idx = segment.index();
        if version.release.len() <= idx {
            version.release.resize(idx + 1, 0);
        }

        // a pre-release of x.y.0 already anticipates the minor bump to x.y.0
        let anticipated = pre.is_none()
            && version.is_prerelease()
            && version.release[idx] != 0
            && version.release[idx + 1..].iter().all(|&n| n == 0);

        if !anticipated {
            version.release[idx] += 1;
            for lower in &mut version.release[idx + 1..] {
                *lower = 0;
            }
        }

        let previous = version.pre.take();
        version.dev = None;
        version.build = None;

        if let Some(stage) = pre.and_then(PreSegment::stage) {
            version.pre = Some(PreRelease::start(stage, previous.as_ref()));
        }
    } else if let Some(segment) = pre {
        version.dev = None;
        version.build = None;

        match segment.stage() {
            None => version.pre = None,
            Some(stage) => version.pre = Some(next_prerelease(version.pre.take(), stage)?),
        }
    }

    Ok(format!(
        "{}{}{}",
        &name[..found.start],
        version,
        &name[found.end..]
    ))
}

fn next_prerelease(current: Option<PreRelease>, stage: Stage) -> Result<PreRelease> {
    let Some(mut pre) = current else {
        return Ok(PreRelease::start(stage, None));
    };

    match pre.stage() {
        Some(current) if current == stage => pre.advance(),
        Some(current) if current > stage => {
            return Err(VersionError::PreReleaseRegression {
                from: pre.label.clone(),
                to: format!("{stage:?}").to_lowercase(),
            });
        }
        _ => pre.move_to(stage),
    }

    Ok(pre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_segments() {
        assert_eq!(
            increment_version("1.2.3", Some(ReleaseSegment::Major), None).unwrap(),
            "2.0.0"
        );
        assert_eq!(
            increment_version("1.2.3", Some(ReleaseSegment::Minor), None).unwrap(),
            "1.3.0"
        );
        assert_eq!(
            increment_version("1.2.3", Some(ReleaseSegment::Patch), None).unwrap(),
            "1.2.4"
        );
    }

    #[test]
    fn test_short_release_is_extended() {
        assert_eq!(
            increment_version("1.0", Some(ReleaseSegment::Patch), None).unwrap(),
            "1.0.1"
        );
    }

    #[test]
    fn test_surrounding_text_is_kept() {
        assert_eq!(
            increment_version("Version v1.2.0 (lts)", Some(ReleaseSegment::Minor), None).unwrap(),
            "Version v1.3.0 (lts)"
        );
    }

    #[test]
    fn test_prerelease_anticipates_bump() {
        assert_eq!(
            increment_version("2.0.0rc1", Some(ReleaseSegment::Major), None).unwrap(),
            "2.0.0"
        );
        assert_eq!(
            increment_version("1.3.0-rc.1", Some(ReleaseSegment::Minor), None).unwrap(),
            "1.3.0"
        );
        assert_eq!(
            increment_version("1.3.0-rc.1", Some(ReleaseSegment::Patch), None).unwrap(),
            "1.3.1"
        );
    }

    #[test]
    fn test_prerelease_advances() {
        assert_eq!(
            increment_version("1.3.0-rc.1", None, Some(PreSegment::Rc)).unwrap(),
            "1.3.0-rc.2"
        );
        assert_eq!(
            increment_version("1.3.0a2", None, Some(PreSegment::Beta)).unwrap(),
            "1.3.0b1"
        );
        assert_eq!(
            increment_version("1.3.0-alpha.4", None, Some(PreSegment::Rc)).unwrap(),
            "1.3.0-rc.1"
        );
    }

    #[test]
    fn test_full_release_drops_prerelease() {
        assert_eq!(
            increment_version("1.3.0rc2", None, Some(PreSegment::Full)).unwrap(),
            "1.3.0"
        );
        assert_eq!(
            increment_version("0.4.0.dev1", None, Some(PreSegment::Full)).unwrap(),
            "0.4.0"
        );
    }

    #[test]
    fn test_bump_with_new_prerelease() {
        assert_eq!(
            increment_version("1.2.3", Some(ReleaseSegment::Minor), Some(PreSegment::Alpha))
                .unwrap(),
            "1.3.0-alpha.1"
        );
        assert_eq!(
            increment_version("1.2.3b2", Some(ReleaseSegment::Major), Some(PreSegment::Beta))
                .unwrap(),
            "2.0.0b1"
        );
    }

    #[test]
    fn test_prerelease_cannot_regress() {
        let err = increment_version("1.0.0-rc.1", None, Some(PreSegment::Alpha)).unwrap_err();
        assert!(matches!(err, VersionError::PreReleaseRegression { .. }));
    }

    #[test]
    fn test_name_without_number() {
        let err = increment_version("Unreleased", Some(ReleaseSegment::Patch), None).unwrap_err();
        assert!(matches!(err, VersionError::NoVersionNumber(_)));
    }

    #[test]
    fn test_nothing_requested_keeps_name() {
        assert_eq!(increment_version("1.0.0", None, None).unwrap(), "1.0.0");
    }
}
