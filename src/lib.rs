//! Mammography DICOM metadata classification and preferred-view selection.
//!
//! Given a DICOM instance (file or in-memory buffer), [`extract_from_file`]
//! and [`MammogramRecord::from_file`] read only the header — pixel data is
//! never touched — and classify it into a [`MammogramMetadata`] record:
//! mammogram type (full-field digital, tomosynthesis, synthetic-2D,
//! screen-film), laterality, projection view, and view modifiers (spot
//! compression, magnification, implant displacement). Given a collection of
//! such records for one study, [`get_preferred_views`] and its variants pick
//! one instance per standard screening view under a configurable preference
//! policy.

mod classifier;
mod enums;
mod error;
mod image_type;
mod io;
mod record;
mod selector;
mod tags;
mod view;

use std::path::Path;

pub use enums::{
    Laterality, LateralityError, MammogramType, MammogramTypeError, PhotometricInterpretation,
    PhotometricInterpretationError, ViewPosition, ViewPositionError,
};
pub use error::MammocatError;
pub use image_type::ImageType;
pub use record::{MammogramMetadata, MammogramRecord};
pub use selector::{
    get_preferred_views, get_preferred_views_filtered, get_preferred_views_with_order,
    FilterConfig, PreferenceOrder, PreferenceOrderError,
};
pub use view::{MammogramView, STANDARD_VIEWS};

fn extract(
    obj: &dicom_object::InMemDicomObject,
    is_sfm_hint: bool,
) -> Result<MammogramMetadata, MammocatError> {
    let bundle = tags::TagBundle::read(obj).map_err(|e| MammocatError::Extraction(e.to_string()))?;
    Ok(classifier::classify(&bundle, is_sfm_hint))
}

/// Extracts mammogram metadata from a DICOM file, reading only the header.
pub fn extract_from_file<P: AsRef<Path>>(path: P) -> Result<MammogramMetadata, MammocatError> {
    extract_from_file_with_options(path, false)
}

/// Extracts mammogram metadata from a DICOM file, with an explicit
/// screen-film hint (`is_sfm`) since SFM cannot reliably be detected from
/// tags alone.
pub fn extract_from_file_with_options<P: AsRef<Path>>(
    path: P,
    is_sfm: bool,
) -> Result<MammogramMetadata, MammocatError> {
    let obj = io::open_header(path)?;
    extract(&obj, is_sfm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_preferred_views_empty_has_four_absent_keys() {
        let result = get_preferred_views(&[]);
        assert_eq!(result.len(), 4);
        assert!(result.values().all(|v| v.is_none()));
    }

    #[test]
    fn filter_config_default_is_accessible_from_crate_root() {
        let cfg = FilterConfig::default();
        assert!(cfg.exclude_spot_compression);
    }
}
