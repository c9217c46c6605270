//! Typed accessors over a DICOM dataset, hiding transfer syntax and VR
//! detail from the classifier. Missing tags return absence; malformed tags
//! (wrong VR, unparseable) also return absence rather than failure — only a
//! whole-stream read failure is ever allowed to propagate as an error.

use crate::error::TagError;
use dicom_core::Tag;
use dicom_core::value::Value;
use dicom_dictionary_std::tags::{
    BREAST_IMPLANT_PRESENT, CODE_MEANING, CODE_VALUE, CODING_SCHEME_DESIGNATOR, COLUMNS,
    IMAGE_LATERALITY, IMAGE_TYPE, LATERALITY, MANUFACTURER, MANUFACTURER_MODEL_NAME, MODALITY,
    NUMBER_OF_FRAMES, PHOTOMETRIC_INTERPRETATION, PRESENTATION_INTENT_TYPE, ROWS,
    VIEW_MODIFIER_CODE_SEQUENCE, VIEW_POSITION,
};
use dicom_object::InMemDicomObject;

pub(crate) fn to_string_opt(
    obj: &InMemDicomObject,
    tag: Tag,
) -> Result<Option<String>, TagError> {
    match obj.element_opt(tag)? {
        None => Ok(None),
        Some(elem) => match elem.to_str() {
            Ok(s) => Ok(Some(s.to_string())),
            Err(_) => Ok(None),
        },
    }
}

pub(crate) fn to_strings_opt(
    obj: &InMemDicomObject,
    tag: Tag,
) -> Result<Option<Vec<String>>, TagError> {
    Ok(to_string_opt(obj, tag)?.map(|s| s.split('\\').map(|x| x.to_string()).collect()))
}

pub(crate) fn to_int_opt(obj: &InMemDicomObject, tag: Tag) -> Result<Option<i32>, TagError> {
    match obj.element_opt(tag)? {
        None => Ok(None),
        Some(elem) => Ok(elem.to_int::<i32>().ok()),
    }
}

pub(crate) fn to_uint_opt(obj: &InMemDicomObject, tag: Tag) -> Result<Option<u32>, TagError> {
    match obj.element_opt(tag)? {
        None => Ok(None),
        Some(elem) => Ok(elem.to_int::<u32>().ok()),
    }
}

/// A single item of `ViewModifierCodeSequence` (or any other coded-concept
/// sequence sharing the same three-tag shape).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeItem {
    pub code_value: String,
    pub coding_scheme_designator: String,
    pub code_meaning: String,
}

fn code_item(item: &InMemDicomObject) -> Result<CodeItem, TagError> {
    Ok(CodeItem {
        code_value: to_string_opt(item, CODE_VALUE)?.unwrap_or_default(),
        coding_scheme_designator: to_string_opt(item, CODING_SCHEME_DESIGNATOR)?
            .unwrap_or_default(),
        code_meaning: to_string_opt(item, CODE_MEANING)?.unwrap_or_default(),
    })
}

fn from_seq_opt<T>(
    obj: &InMemDicomObject,
    seq_tag: Tag,
    func: impl Fn(&InMemDicomObject) -> Result<T, TagError>,
) -> Result<Vec<T>, TagError> {
    let Some(elem) = obj.element_opt(seq_tag)? else {
        return Ok(Vec::new());
    };
    match elem.value() {
        Value::Sequence(sq) => sq.items().iter().map(&func).collect(),
        Value::Primitive(_) | Value::PixelSequence(_) => Err(TagError::NotASequence(seq_tag)),
    }
}

/// The raw, still-untyped field bundle one extraction pass pulls out of a
/// DICOM object, before the classifier normalizes it into a
/// [`crate::MammogramMetadata`]. Keeping this struct separate from the
/// classifier keeps the latter a pure function, independent of where the
/// bytes came from.
#[derive(Clone, Debug, Default)]
pub(crate) struct TagBundle {
    pub image_type: Vec<String>,
    pub image_laterality: Option<String>,
    pub laterality: Option<String>,
    pub view_position: Option<String>,
    pub presentation_intent_type: Option<String>,
    pub breast_implant_present: Option<String>,
    pub number_of_frames: Option<i32>,
    pub view_modifiers: Vec<CodeItem>,
    pub manufacturer: Option<String>,
    pub manufacturer_model_name: Option<String>,
    pub modality: Option<String>,
    pub photometric_interpretation: Option<String>,
    pub rows: Option<u32>,
    pub columns: Option<u32>,
}

impl TagBundle {
    pub(crate) fn read(obj: &InMemDicomObject) -> Result<Self, TagError> {
        Ok(TagBundle {
            image_type: to_strings_opt(obj, IMAGE_TYPE)?.unwrap_or_default(),
            image_laterality: to_string_opt(obj, IMAGE_LATERALITY)?,
            laterality: to_string_opt(obj, LATERALITY)?,
            view_position: to_string_opt(obj, VIEW_POSITION)?,
            presentation_intent_type: to_string_opt(obj, PRESENTATION_INTENT_TYPE)?,
            breast_implant_present: to_string_opt(obj, BREAST_IMPLANT_PRESENT)?,
            number_of_frames: to_int_opt(obj, NUMBER_OF_FRAMES)?,
            view_modifiers: from_seq_opt(obj, VIEW_MODIFIER_CODE_SEQUENCE, code_item)?,
            manufacturer: to_string_opt(obj, MANUFACTURER)?,
            manufacturer_model_name: to_string_opt(obj, MANUFACTURER_MODEL_NAME)?,
            modality: to_string_opt(obj, MODALITY)?,
            photometric_interpretation: to_string_opt(obj, PHOTOMETRIC_INTERPRETATION)?,
            rows: to_uint_opt(obj, ROWS)?,
            columns: to_uint_opt(obj, COLUMNS)?,
        })
    }
}
