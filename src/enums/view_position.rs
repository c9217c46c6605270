use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum ViewPositionError {
    #[error("invalid view position: {0}")]
    InvalidViewPosition(String),
}

/// DICOM `ViewPosition` is open-ended in practice; this models the known
/// projections as a closed enum plus an `Unknown` bucket rather than
/// silently coercing unrecognized strings to a nearby standard view.
/// `Unknown` sorts strictly below every named view — declaration order
/// backs the derived `Ord`, used only for deterministic sorting/hashing,
/// never for clinical preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewPosition {
    #[default]
    Unknown,
    Cc,
    Mlo,
    Ml,
    Lm,
    Lmo,
    Xccl,
    Xccm,
    At,
    Fb,
    Sio,
    Iso,
}

impl ViewPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewPosition::Unknown => "",
            ViewPosition::Cc => "cc",
            ViewPosition::Mlo => "mlo",
            ViewPosition::Ml => "ml",
            ViewPosition::Lm => "lm",
            ViewPosition::Lmo => "lmo",
            ViewPosition::Xccl => "xccl",
            ViewPosition::Xccm => "xccm",
            ViewPosition::At => "at",
            ViewPosition::Fb => "fb",
            ViewPosition::Sio => "sio",
            ViewPosition::Iso => "iso",
        }
    }

    pub fn is_standard_view(&self) -> bool {
        matches!(self, ViewPosition::Cc | ViewPosition::Mlo)
    }

    pub fn is_cc_like(&self) -> bool {
        matches!(self, ViewPosition::Cc | ViewPosition::Xccl | ViewPosition::Xccm)
    }

    pub fn is_mlo_like(&self) -> bool {
        matches!(
            self,
            ViewPosition::Mlo | ViewPosition::Ml | ViewPosition::Lmo | ViewPosition::Lm
        )
    }
}

impl std::fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewPosition {
    type Err = ViewPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CC" => Ok(ViewPosition::Cc),
            "MLO" => Ok(ViewPosition::Mlo),
            "ML" => Ok(ViewPosition::Ml),
            "LM" => Ok(ViewPosition::Lm),
            "LMO" => Ok(ViewPosition::Lmo),
            "XCCL" => Ok(ViewPosition::Xccl),
            "XCCM" => Ok(ViewPosition::Xccm),
            "AT" => Ok(ViewPosition::At),
            "FB" => Ok(ViewPosition::Fb),
            "SIO" => Ok(ViewPosition::Sio),
            "ISO" => Ok(ViewPosition::Iso),
            "" => Ok(ViewPosition::Unknown),
            _ => Err(ViewPositionError::InvalidViewPosition(s.to_string())),
        }
    }
}

/// Parses an uppercased/trimmed `ViewPosition` tag value, mapping anything
/// unmatched to `Unknown` instead of failing — used by the classifier,
/// which never fails (`FromStr` above is the public, strict-on-garbage API).
pub(crate) fn from_tag_value(s: &str) -> ViewPosition {
    ViewPosition::from_str(&s.trim().to_uppercase()).unwrap_or(ViewPosition::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_encodings() {
        assert_eq!(ViewPosition::Cc.as_str(), "cc");
        assert_eq!(ViewPosition::Mlo.as_str(), "mlo");
        assert_eq!(ViewPosition::Xccl.as_str(), "xccl");
        assert_eq!(ViewPosition::Unknown.as_str(), "");
    }

    #[test]
    fn from_str_round_trips() {
        for v in [
            ViewPosition::Cc,
            ViewPosition::Mlo,
            ViewPosition::Ml,
            ViewPosition::Lm,
            ViewPosition::Lmo,
            ViewPosition::Xccl,
            ViewPosition::Xccm,
            ViewPosition::At,
            ViewPosition::Fb,
            ViewPosition::Sio,
            ViewPosition::Iso,
        ] {
            assert_eq!(ViewPosition::from_str(v.as_str()).unwrap(), v);
        }
    }

    #[test]
    fn is_standard_view() {
        assert!(ViewPosition::Cc.is_standard_view());
        assert!(ViewPosition::Mlo.is_standard_view());
        assert!(!ViewPosition::Ml.is_standard_view());
        assert!(!ViewPosition::Unknown.is_standard_view());
    }

    #[test]
    fn is_mlo_like() {
        assert!(ViewPosition::Mlo.is_mlo_like());
        assert!(ViewPosition::Ml.is_mlo_like());
        assert!(ViewPosition::Lmo.is_mlo_like());
        assert!(!ViewPosition::Cc.is_mlo_like());
    }

    #[test]
    fn is_cc_like() {
        assert!(ViewPosition::Cc.is_cc_like());
        assert!(ViewPosition::Xccl.is_cc_like());
        assert!(ViewPosition::Xccm.is_cc_like());
        assert!(!ViewPosition::Mlo.is_cc_like());
    }

    #[test]
    fn ordering_unknown_is_least() {
        assert!(ViewPosition::Unknown < ViewPosition::Xccl);
        assert!(ViewPosition::Cc < ViewPosition::Mlo);
    }

    #[test]
    fn from_tag_value_unmatched_is_unknown() {
        assert_eq!(from_tag_value("bogus"), ViewPosition::Unknown);
        assert_eq!(from_tag_value(" mlo "), ViewPosition::Mlo);
    }
}
