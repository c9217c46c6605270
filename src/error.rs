use dicom_core::Tag;

/// Root error type for anything the core raises.
#[derive(thiserror::Error, Debug)]
pub enum MammocatError {
    #[error("failed to read DICOM stream")]
    Dicom(#[from] dicom_object::ReadError),
    #[error("metadata extraction failed: {0}")]
    Extraction(String),
}

/// Internal error used by the tag accessor to distinguish a missing tag from
/// one whose sequence value is malformed. Never escapes this crate: a
/// missing or unconvertible scalar tag collapses to `None` for the
/// classifier's benefit, per the absence-over-failure policy; only a
/// malformed sequence (present but not actually a sequence) propagates,
/// since there is no sensible "absent" value to fall back to there.
#[derive(thiserror::Error, Debug)]
pub(crate) enum TagError {
    #[error("element access failed")]
    Access(#[from] dicom_object::AccessError),
    #[error("element with tag {0:?} is not a sequence")]
    NotASequence(Tag),
}
