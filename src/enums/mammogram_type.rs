use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum MammogramTypeError {
    #[error("invalid mammogram type: {0}")]
    InvalidMammogramType(String),
}

/// The closed vocabulary of mammogram acquisition kinds, ordered by clinical
/// preference under the `DEFAULT` policy (declaration order doubles as
/// `Ord`): `TOMO < FFDM < SYNTH < SFM < UNKNOWN`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MammogramType {
    Tomo,
    Ffdm,
    Synth,
    Sfm,
    #[default]
    Unknown,
}

impl MammogramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MammogramType::Tomo => "tomo",
            MammogramType::Ffdm => "ffdm",
            MammogramType::Synth => "s-view",
            MammogramType::Sfm => "sfm",
            MammogramType::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MammogramType::Unknown)
    }

    /// True under the `DEFAULT` preference order only; callers selecting
    /// under `TOMO_FIRST` should compare `type_rank` directly instead.
    pub fn is_preferred_to(&self, other: &MammogramType) -> bool {
        self < other
    }
}

impl std::fmt::Display for MammogramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MammogramType {
    type Err = MammogramTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tomo" => Ok(MammogramType::Tomo),
            "ffdm" => Ok(MammogramType::Ffdm),
            "s-view" => Ok(MammogramType::Synth),
            "sfm" => Ok(MammogramType::Sfm),
            "unknown" => Ok(MammogramType::Unknown),
            _ => Err(MammogramTypeError::InvalidMammogramType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_encodings() {
        assert_eq!(MammogramType::Tomo.as_str(), "tomo");
        assert_eq!(MammogramType::Ffdm.as_str(), "ffdm");
        assert_eq!(MammogramType::Synth.as_str(), "s-view");
        assert_eq!(MammogramType::Sfm.as_str(), "sfm");
        assert_eq!(MammogramType::Unknown.as_str(), "unknown");
    }

    #[test]
    fn from_str_round_trips() {
        for v in [
            MammogramType::Tomo,
            MammogramType::Ffdm,
            MammogramType::Synth,
            MammogramType::Sfm,
        ] {
            assert_eq!(MammogramType::from_str(v.as_str()).unwrap(), v);
        }
    }

    #[test]
    fn from_str_is_case_insensitive_and_trims() {
        assert_eq!(
            MammogramType::from_str(" FFDM ").unwrap(),
            MammogramType::Ffdm
        );
    }

    #[test]
    fn from_str_invalid_errs() {
        assert!(MammogramType::from_str("bogus").is_err());
    }

    #[test]
    fn is_unknown() {
        assert!(MammogramType::Unknown.is_unknown());
        assert!(!MammogramType::Ffdm.is_unknown());
    }

    #[test]
    fn ordering_matches_default_preference() {
        assert!(MammogramType::Tomo < MammogramType::Ffdm);
        assert!(MammogramType::Ffdm < MammogramType::Synth);
        assert!(MammogramType::Synth < MammogramType::Sfm);
        assert!(MammogramType::Sfm < MammogramType::Unknown);
    }

    #[test]
    fn is_preferred_to() {
        assert!(MammogramType::Tomo.is_preferred_to(&MammogramType::Ffdm));
        assert!(MammogramType::Ffdm.is_preferred_to(&MammogramType::Synth));
        assert!(!MammogramType::Synth.is_preferred_to(&MammogramType::Ffdm));
    }

    #[test]
    fn hash_dedupes_equal_variants() {
        use std::collections::HashSet;
        let set: HashSet<_> = [MammogramType::Ffdm, MammogramType::Tomo, MammogramType::Ffdm]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
