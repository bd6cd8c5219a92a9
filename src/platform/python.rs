//! Interpreter version specs.
//!
//! A `--python-version` flag carries a comparison operator followed by a
//! dotted version prefix, e.g. `>=3.8` or `<3.12.1`. The operator is an
//! explicit enum evaluated with direct conditional logic, and the version
//! comparison is lexicographic over the parsed components, matching
//! Python tuple semantics (`(3, 9, 0) >= (3, 8)`).

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::SamplectlError;

/// Version comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl CmpOp {
    /// Parse an operator token. Both `=` and `==` mean equality.
    pub fn parse(op: &str) -> Option<CmpOp> {
        match op {
            "<" => Some(CmpOp::Lt),
            "<=" => Some(CmpOp::Le),
            "=" | "==" => Some(CmpOp::Eq),
            ">=" => Some(CmpOp::Ge),
            ">" => Some(CmpOp::Gt),
            _ => None,
        }
    }

    /// Evaluate this operator against an ordering of actual vs required.
    fn holds(&self, ord: Ordering) -> bool {
        match self {
            CmpOp::Lt => ord == Ordering::Less,
            CmpOp::Le => ord != Ordering::Greater,
            CmpOp::Eq => ord == Ordering::Equal,
            CmpOp::Ge => ord != Ordering::Less,
            CmpOp::Gt => ord == Ordering::Greater,
        }
    }
}

/// A parsed version requirement: operator plus dotted version prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub op: CmpOp,
    pub version: Vec<u32>,
}

fn spec_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(<=|>=|==|<|>|=)\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?\s*$")
            .unwrap_or_else(|e| unreachable!("invalid version spec regex: {e}"))
    })
}

impl VersionSpec {
    /// Check the spec against an interpreter version tuple.
    pub fn matches(&self, version: &[u32]) -> bool {
        self.op.holds(version.cmp(self.version.as_slice()))
    }
}

impl FromStr for VersionSpec {
    type Err = SamplectlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = spec_regex()
            .captures(s)
            .ok_or_else(|| SamplectlError::InvalidVersionSpec { spec: s.to_string() })?;

        let op = caps
            .get(1)
            .and_then(|m| CmpOp::parse(m.as_str()))
            .ok_or_else(|| SamplectlError::InvalidVersionSpec { spec: s.to_string() })?;

        let mut version = Vec::new();
        for idx in 2..=4 {
            if let Some(m) = caps.get(idx) {
                let num = m
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| SamplectlError::InvalidVersionSpec { spec: s.to_string() })?;
                version.push(num);
            }
        }

        Ok(VersionSpec { op, version })
    }
}
