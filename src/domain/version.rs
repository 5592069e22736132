use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version parsed from a tag name.
///
/// Keeps the literal text it was parsed from so the optional `v` prefix
/// survives a parse/render round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVersion {
    version: semver::Version,
    original: String,
}

impl SemVersion {
    /// Parse a tag name such as `v1.2.3` or `1.2.3-rc.1+build.5`.
    ///
    /// One leading lowercase `v` is accepted; the remainder must be a strict
    /// `MAJOR.MINOR.PATCH[-PRE][+BUILD]` string. Partial versions such as `v1.2`
    /// or `v1` are rejected rather than coerced to `1.2.0`, so tags written by
    /// tools that accept them are skipped here.
    pub fn parse(text: &str) -> std::result::Result<Self, semver::Error> {
        let version = semver::Version::parse(text.strip_prefix('v').unwrap_or(text))?;

        Ok(SemVersion {
            version,
            original: text.to_string(),
        })
    }

    /// Parse a tag name, treating anything that is not a semantic version as a skip
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::parse(name).ok()
    }

    /// Build a version rendered with or without the `v` prefix
    pub fn from_version(version: semver::Version, v_prefix: bool) -> Self {
        let original = if v_prefix {
            format!("v{}", version)
        } else {
            version.to_string()
        };

        SemVersion { version, original }
    }

    /// The `0.0.0` baseline used before anything has been released
    pub fn initial(v_prefix: bool) -> Self {
        Self::from_version(semver::Version::new(0, 0, 0), v_prefix)
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    /// The parsed version without any prefix
    pub fn version(&self) -> &semver::Version {
        &self.version
    }

    /// Literal text as written in the tag
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn has_v_prefix(&self) -> bool {
        self.original.starts_with('v')
    }

    /// Order two versions by semantic-version precedence.
    ///
    /// Build metadata does not take part in the comparison.
    pub fn compare(&self, other: &SemVersion) -> Ordering {
        self.version.cmp_precedence(&other.version)
    }

    /// Next version for the requested component, keeping this version's prefix style.
    ///
    /// Less significant components are zeroed and pre-release/build metadata
    /// dropped. A patch bump of a pre-release releases it (`1.2.3-rc.1` -> `1.2.3`).
    pub fn bump(&self, component: Component) -> SemVersion {
        let v = &self.version;
        let next = match component {
            Component::Major => semver::Version::new(v.major + 1, 0, 0),
            Component::Minor => semver::Version::new(v.major, v.minor + 1, 0),
            Component::Patch if self.is_prerelease() => {
                semver::Version::new(v.major, v.minor, v.patch)
            }
            Component::Patch => semver::Version::new(v.major, v.minor, v.patch + 1),
        };

        SemVersion::from_version(next, self.has_v_prefix())
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Which part of a version an increment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "major" | "maj" => Ok(Component::Major),
            "minor" | "min" => Ok(Component::Minor),
            "patch" | "pat" => Ok(Component::Patch),
            other => Err(format!("unknown version component: {}", other)),
        }
    }
}
