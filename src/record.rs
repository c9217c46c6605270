//! Classifier output (`MammogramMetadata`) and the file/byte-backed record
//! that pairs it with source identity and physical dimensions
//! (`MammogramRecord`). Both public constructors funnel through the shared
//! `extract` helper so the only divergence is where the `DefaultDicomObject`
//! comes from, per the Pure-core, I/O-at-the-edges design.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use dicom_object::InMemDicomObject;

use crate::classifier::classify;
use crate::enums::{Laterality, MammogramType, PhotometricInterpretation, ViewPosition};
use crate::error::MammocatError;
use crate::image_type::ImageType;
use crate::io::{open_header, open_header_from_reader};
use crate::tags::TagBundle;
use crate::view::MammogramView;

/// Normalized classification output for a single DICOM instance.
#[derive(Clone, Debug, PartialEq)]
pub struct MammogramMetadata {
    pub mammogram_type: MammogramType,
    pub laterality: Laterality,
    pub view_position: ViewPosition,
    pub image_type: ImageType,
    pub is_for_processing: bool,
    pub has_implant: bool,
    pub is_spot_compression: bool,
    pub is_magnified: bool,
    pub is_implant_displaced: bool,
    pub number_of_frames: u32,
    pub photometric_interpretation: PhotometricInterpretation,
}

impl MammogramMetadata {
    pub fn mammogram_view(&self) -> MammogramView {
        MammogramView::new(self.laterality, self.view_position)
    }

    /// True for every type except `TOMO`, which is inherently volumetric.
    pub fn is_2d(&self) -> bool {
        !matches!(self.mammogram_type, MammogramType::Tomo)
    }

    pub fn is_standard_view(&self) -> bool {
        self.mammogram_view().is_standard_mammo_view()
    }

    pub fn to_dict(&self) -> BTreeMap<String, String> {
        let mut dict = BTreeMap::new();
        dict.insert("mammogram_type".to_string(), self.mammogram_type.to_string());
        dict.insert("laterality".to_string(), self.laterality.to_string());
        dict.insert("view_position".to_string(), self.view_position.to_string());
        dict.insert("image_type".to_string(), self.image_type.to_string());
        dict.insert("is_for_processing".to_string(), self.is_for_processing.to_string());
        dict.insert("has_implant".to_string(), self.has_implant.to_string());
        dict.insert(
            "is_spot_compression".to_string(),
            self.is_spot_compression.to_string(),
        );
        dict.insert("is_magnified".to_string(), self.is_magnified.to_string());
        dict.insert(
            "is_implant_displaced".to_string(),
            self.is_implant_displaced.to_string(),
        );
        dict.insert(
            "number_of_frames".to_string(),
            self.number_of_frames.to_string(),
        );
        dict.insert(
            "photometric_interpretation".to_string(),
            self.photometric_interpretation.to_string(),
        );
        dict
    }
}

impl std::fmt::Display for MammogramMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .to_dict()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        write!(f, "{}", rendered.join(";"))
    }
}

fn extract(
    obj: &InMemDicomObject,
    is_sfm_hint: bool,
) -> Result<(MammogramMetadata, Option<u32>, Option<u32>), MammocatError> {
    let bundle =
        TagBundle::read(obj).map_err(|e| MammocatError::Extraction(e.to_string()))?;
    let rows = bundle.rows;
    let columns = bundle.columns;
    Ok((classify(&bundle, is_sfm_hint), rows, columns))
}

/// A classified mammogram instance, paired with source identity and cached
/// physical dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct MammogramRecord {
    pub file_path: String,
    pub metadata: MammogramMetadata,
    pub rows: Option<u32>,
    pub columns: Option<u32>,
}

impl MammogramRecord {
    /// Reads a DICOM instance from `path` (header only) and classifies it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MammocatError> {
        Self::from_file_with_options(path, false)
    }

    pub fn from_file_with_options<P: AsRef<Path>>(
        path: P,
        is_sfm_hint: bool,
    ) -> Result<Self, MammocatError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let obj = open_header(&path)?;
        let (metadata, rows, columns) = extract(&obj, is_sfm_hint)?;
        Ok(MammogramRecord {
            file_path: path.to_string_lossy().into_owned(),
            metadata,
            rows,
            columns,
        })
    }

    /// Reads a DICOM instance from an in-memory buffer and classifies it.
    /// `id` becomes `file_path`, defaulting to the empty string.
    pub fn from_bytes(buf: &[u8], id: Option<&str>) -> Result<Self, MammocatError> {
        Self::from_bytes_with_options(buf, id, false)
    }

    pub fn from_bytes_with_options(
        buf: &[u8],
        id: Option<&str>,
        is_sfm_hint: bool,
    ) -> Result<Self, MammocatError> {
        let obj = open_header_from_reader(Cursor::new(buf))?;
        let (metadata, rows, columns) = extract(&obj, is_sfm_hint)?;
        Ok(MammogramRecord {
            file_path: id.unwrap_or_default().to_string(),
            metadata,
            rows,
            columns,
        })
    }

    pub fn image_area(&self) -> Option<u64> {
        match (self.rows, self.columns) {
            (Some(r), Some(c)) => Some(r as u64 * c as u64),
            _ => None,
        }
    }

    pub fn is_spot_or_mag(&self) -> bool {
        self.metadata.is_spot_compression || self.metadata.is_magnified
    }

    pub fn is_implant_displaced(&self) -> bool {
        self.metadata.is_implant_displaced
    }

    pub fn is_spot_compression(&self) -> bool {
        self.metadata.is_spot_compression
    }

    pub fn is_magnified(&self) -> bool {
        self.metadata.is_magnified
    }

    pub fn to_dict(&self) -> BTreeMap<String, String> {
        let mut dict = BTreeMap::new();
        dict.insert("file_path".to_string(), self.file_path.clone());
        dict.insert("metadata".to_string(), self.metadata.to_string());
        dict.insert(
            "rows".to_string(),
            self.rows.map(|r| r.to_string()).unwrap_or_default(),
        );
        dict.insert(
            "columns".to_string(),
            self.columns.map(|c| c.to_string()).unwrap_or_default(),
        );
        dict
    }
}
