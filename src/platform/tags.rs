//! Platform detection and tag set matching.

use std::fmt;

/// Platform the target interpreter was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    MinGw,
    Windows,
}

/// Manifest tags for every supported platform.
const ALL_TAGS: [&str; 4] = ["darwin", "linux", "mingw", "win32"];

impl Platform {
    /// The tag this platform is referred to by in manifests.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::MacOs => "darwin",
            Platform::Linux => "linux",
            Platform::MinGw => "mingw",
            Platform::Windows => "win32",
        }
    }

    /// Derive the platform from a `sysconfig.get_platform()` string.
    ///
    /// MinGW builds report `mingw_<arch>[_<variant>]` and must be checked
    /// before the `win` prefix.
    pub fn from_sysconfig(platform: &str) -> Option<Platform> {
        if platform.starts_with("mingw") {
            Some(Platform::MinGw)
        } else if platform.starts_with("macos") {
            Some(Platform::MacOs)
        } else if platform.starts_with("linux") {
            Some(Platform::Linux)
        } else if platform.starts_with("win") {
            Some(Platform::Windows)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Check whether `current` is in the platform set described by `tags`.
///
/// The set starts as all supported platforms. Positive tags, when any are
/// present, replace the set; tags prefixed with `!` subtract from it. An
/// empty tag list therefore matches every platform.
pub fn matches_tags(current: Platform, tags: &[String]) -> bool {
    let positive: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|t| !t.starts_with('!'))
        .collect();

    let mut allowed: Vec<&str> = if positive.is_empty() {
        ALL_TAGS.to_vec()
    } else {
        positive
    };

    for tag in tags {
        if let Some(negated) = tag.strip_prefix('!') {
            allowed.retain(|t| *t != negated);
        }
    }

    allowed.contains(&current.tag())
}
