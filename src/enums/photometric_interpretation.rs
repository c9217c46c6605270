use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum PhotometricInterpretationError {
    #[error("invalid photometric interpretation: {0}")]
    InvalidPhotometricInterpretation(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum PhotometricInterpretation {
    Monochrome1,
    #[default]
    Monochrome2,
    PaletteColor,
    Rgb,
    YbrFull,
    YbrFull422,
    YbrPartial422,
    YbrPartial420,
    YbrIct,
    YbrRct,
}

impl PhotometricInterpretation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotometricInterpretation::Monochrome1 => "MONOCHROME1",
            PhotometricInterpretation::Monochrome2 => "MONOCHROME2",
            PhotometricInterpretation::PaletteColor => "PALETTE_COLOR",
            PhotometricInterpretation::Rgb => "RGB",
            PhotometricInterpretation::YbrFull => "YBR_FULL",
            PhotometricInterpretation::YbrFull422 => "YBR_FULL_422",
            PhotometricInterpretation::YbrPartial422 => "YBR_PARTIAL_422",
            PhotometricInterpretation::YbrPartial420 => "YBR_PARTIAL_420",
            PhotometricInterpretation::YbrIct => "YBR_ICT",
            PhotometricInterpretation::YbrRct => "YBR_RCT",
        }
    }

    pub fn is_monochrome(&self) -> bool {
        matches!(
            self,
            PhotometricInterpretation::Monochrome1 | PhotometricInterpretation::Monochrome2
        )
    }

    pub fn num_channels(&self) -> u8 {
        match self {
            PhotometricInterpretation::Monochrome1
            | PhotometricInterpretation::Monochrome2
            | PhotometricInterpretation::PaletteColor => 1,
            _ => 3,
        }
    }
}

impl std::fmt::Display for PhotometricInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotometricInterpretation {
    type Err = PhotometricInterpretationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MONOCHROME1" => Ok(PhotometricInterpretation::Monochrome1),
            "MONOCHROME2" => Ok(PhotometricInterpretation::Monochrome2),
            "PALETTE_COLOR" => Ok(PhotometricInterpretation::PaletteColor),
            "RGB" => Ok(PhotometricInterpretation::Rgb),
            "YBR_FULL" => Ok(PhotometricInterpretation::YbrFull),
            "YBR_FULL_422" => Ok(PhotometricInterpretation::YbrFull422),
            "YBR_PARTIAL_422" => Ok(PhotometricInterpretation::YbrPartial422),
            "YBR_PARTIAL_420" => Ok(PhotometricInterpretation::YbrPartial420),
            "YBR_ICT" => Ok(PhotometricInterpretation::YbrIct),
            "YBR_RCT" => Ok(PhotometricInterpretation::YbrRct),
            _ => Err(PhotometricInterpretationError::InvalidPhotometricInterpretation(
                s.to_string(),
            )),
        }
    }
}

/// Parses the raw `PhotometricInterpretation` tag value, falling back to the
/// `MONOCHROME2` default (mammography acquisitions are monochrome by
/// convention) rather than failing, since the classifier never fails.
pub(crate) fn from_tag_value(s: Option<&str>) -> PhotometricInterpretation {
    s.and_then(|s| PhotometricInterpretation::from_str(s).ok())
        .unwrap_or_default()
}
