//! MSYS2 package name candidates.
//!
//! MSYS2 maps Python packages inconsistently: some keep their PyPI name,
//! some gain a `python-` prefix, some are lowercased, and some are both
//! (`Cython` is unmapped, `cx_Logging` is `python-cx-logging`, `Pillow` is
//! `python-Pillow`). The installer probes a list of candidate names and
//! takes the first that exists.

/// Strip a pip version constraint from a package identifier.
///
/// Cuts at the first `;`, `<`, `>`, or `=`, so `lief==0.14` becomes
/// `lief`. pacman carries no version constraints.
pub fn strip_constraint(package: &str) -> &str {
    package
        .split([';', '<', '>', '='])
        .next()
        .unwrap_or(package)
        .trim()
}

/// Candidate MSYS2 names for a package, unprefixed and in probe order:
/// `python-<pkg>`, `<pkg>`, plus lowercase variants for mixed-case names.
pub fn candidate_packages(package: &str) -> Vec<String> {
    let package = strip_constraint(package);
    let mut candidates = vec![format!("python-{package}"), package.to_string()];

    let lower = package.to_lowercase();
    if package != lower {
        candidates.push(format!("python-{lower}"));
        candidates.push(lower);
    }

    candidates
}
