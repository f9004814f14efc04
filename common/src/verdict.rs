//! Naming verdicts.

use std::fmt;

use serde::Serialize;

/// Terminal outcome of validating one asset's name.
///
/// `Unknown` means no rule or validator had an opinion; it is distinct from
/// `Invalid`. Every variant other than `Unknown` is decisive and stops later
/// pipeline stages from running.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    /// The name satisfies the applicable convention.
    Valid,
    /// The name violates the applicable convention.
    Invalid(String),
    /// The asset was not tested because configuration excludes it.
    Excluded(String),
    /// Nothing had an opinion about the asset, optionally explaining why.
    Unknown(Option<String>),
}

impl Verdict {
    /// An `Unknown` verdict without a reason.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::Unknown(None)
    }

    /// Returns `true` for every verdict except `Unknown`.
    #[must_use]
    pub const fn is_decisive(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Returns the explanation attached to the verdict, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) | Self::Excluded(reason) => Some(reason),
            Self::Unknown(reason) => reason.as_deref(),
        }
    }

    /// Returns the payload-free kind of the verdict.
    #[must_use]
    pub const fn kind(&self) -> VerdictKind {
        match self {
            Self::Valid => VerdictKind::Valid,
            Self::Invalid(_) => VerdictKind::Invalid,
            Self::Excluded(_) => VerdictKind::Excluded,
            Self::Unknown(_) => VerdictKind::Unknown,
        }
    }
}

/// Payload-free discriminant of a [`Verdict`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// See [`Verdict::Valid`].
    Valid,
    /// See [`Verdict::Invalid`].
    Invalid,
    /// See [`Verdict::Excluded`].
    Excluded,
    /// See [`Verdict::Unknown`].
    Unknown,
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Excluded => "excluded",
            Self::Unknown => "unknown",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Verdict::Valid, true)]
    #[case(Verdict::Invalid("bad".to_owned()), true)]
    #[case(Verdict::Excluded("skipped".to_owned()), true)]
    #[case(Verdict::unknown(), false)]
    #[case(Verdict::Unknown(Some("no class".to_owned())), false)]
    fn only_unknown_is_indecisive(#[case] verdict: Verdict, #[case] decisive: bool) {
        assert_eq!(verdict.is_decisive(), decisive);
    }

    #[rstest]
    fn reasons_are_exposed() {
        assert_eq!(Verdict::Valid.reason(), None);
        assert_eq!(Verdict::Invalid("bad".to_owned()).reason(), Some("bad"));
        assert_eq!(Verdict::unknown().reason(), None);
    }

    #[rstest]
    fn serialises_with_a_snake_case_tag() {
        let json = serde_json::to_string(&Verdict::Invalid("needs M_".to_owned()))
            .expect("verdict should serialise");

        assert_eq!(json, r#"{"verdict":"invalid","reason":"needs M_"}"#);
    }
}
