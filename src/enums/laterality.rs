use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum LateralityError {
    #[error("invalid laterality: {0}")]
    InvalidLaterality(String),
}

/// `Ord` is derived from declaration order for use in deterministic sorting
/// and as a `MammogramView` component key; it carries no clinical meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Laterality {
    Left,
    Right,
    Bilateral,
    None,
    #[default]
    Unknown,
}

impl Laterality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Laterality::Left => "left",
            Laterality::Right => "right",
            Laterality::Bilateral => "bilateral",
            Laterality::None => "none",
            Laterality::Unknown => "unknown",
        }
    }

    pub fn is_unilateral(&self) -> bool {
        matches!(self, Laterality::Left | Laterality::Right)
    }

    pub fn opposite(&self) -> Laterality {
        match self {
            Laterality::Left => Laterality::Right,
            Laterality::Right => Laterality::Left,
            _ => Laterality::Unknown,
        }
    }

    /// Maps a raw `ImageLaterality`/`Laterality` tag value (`L`/`R`/`B`/empty)
    /// to the closed vocabulary; anything else maps to `Unknown` rather than
    /// failing.
    pub(crate) fn from_dicom_code(s: &str) -> Laterality {
        match s.trim() {
            "L" => Laterality::Left,
            "R" => Laterality::Right,
            "B" => Laterality::Bilateral,
            "" => Laterality::None,
            _ => Laterality::Unknown,
        }
    }
}

impl std::fmt::Display for Laterality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Laterality {
    type Err = LateralityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Laterality::Left),
            "right" => Ok(Laterality::Right),
            "bilateral" => Ok(Laterality::Bilateral),
            "none" => Ok(Laterality::None),
            "unknown" => Ok(Laterality::Unknown),
            _ => Err(LateralityError::InvalidLaterality(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_encodings() {
        assert_eq!(Laterality::Left.as_str(), "left");
        assert_eq!(Laterality::Right.as_str(), "right");
        assert_eq!(Laterality::Bilateral.as_str(), "bilateral");
        assert_eq!(Laterality::None.as_str(), "none");
        assert_eq!(Laterality::Unknown.as_str(), "unknown");
    }

    #[test]
    fn from_str_round_trips() {
        for v in [
            Laterality::Left,
            Laterality::Right,
            Laterality::Bilateral,
            Laterality::None,
        ] {
            assert_eq!(Laterality::from_str(v.as_str()).unwrap(), v);
        }
    }

    #[test]
    fn from_str_invalid_errs() {
        assert!(Laterality::from_str("sideways").is_err());
    }

    #[test]
    fn is_unilateral() {
        assert!(Laterality::Left.is_unilateral());
        assert!(Laterality::Right.is_unilateral());
        assert!(!Laterality::Bilateral.is_unilateral());
        assert!(!Laterality::Unknown.is_unilateral());
    }

    #[test]
    fn opposite() {
        assert_eq!(Laterality::Left.opposite(), Laterality::Right);
        assert_eq!(Laterality::Right.opposite(), Laterality::Left);
        assert_eq!(Laterality::Bilateral.opposite(), Laterality::Unknown);
        assert_eq!(Laterality::Left.opposite().opposite(), Laterality::Left);
    }

    #[test]
    fn from_dicom_code() {
        assert_eq!(Laterality::from_dicom_code("L"), Laterality::Left);
        assert_eq!(Laterality::from_dicom_code("R"), Laterality::Right);
        assert_eq!(Laterality::from_dicom_code("B"), Laterality::Bilateral);
        assert_eq!(Laterality::from_dicom_code(""), Laterality::None);
        assert_eq!(Laterality::from_dicom_code("X"), Laterality::Unknown);
    }

    #[test]
    fn hash_dedupes_equal_variants() {
        use std::collections::HashSet;
        let set: HashSet<_> = [Laterality::Left, Laterality::Right, Laterality::Left]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
