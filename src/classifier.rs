//! Pure classification: turns a [`TagBundle`] into a [`MammogramMetadata`].
//! Encoded as a linear sequence of guarded `rule_*` functions tried in
//! order, so the priority among mammogram types stays self-documenting
//! and each rule stays independently unit-testable.

use crate::enums::{self, Laterality, MammogramType, PhotometricInterpretation, ViewPosition};
use crate::image_type::ImageType;
use crate::record::MammogramMetadata;
use crate::tags::{CodeItem, TagBundle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModifierKind {
    SpotCompression,
    Magnification,
    ImplantDisplaced,
}

/// `(CodeValue, CodingSchemeDesignator, ModifierKind)` lookup table. A
/// `const` slice rather than per-call `if`/`else` chains, since the set of
/// recognized codes is expected to grow by site/vendor without needing a
/// restructure.
const MODIFIER_CODES: &[(&str, &str, ModifierKind)] = &[
    ("R-102D1", "99SDM", ModifierKind::SpotCompression),
    ("R-102D1", "SRT", ModifierKind::SpotCompression),
    ("R-102D3", "99SDM", ModifierKind::Magnification),
    ("R-102D3", "SRT", ModifierKind::Magnification),
    ("R-4092C", "99SDM", ModifierKind::ImplantDisplaced),
    ("R-4092C", "SRT", ModifierKind::ImplantDisplaced),
];

fn code_item_matches(item: &CodeItem, kind: ModifierKind) -> bool {
    let by_code = MODIFIER_CODES.iter().any(|(code, scheme, k)| {
        *k == kind
            && item.code_value.eq_ignore_ascii_case(code)
            && item.coding_scheme_designator.eq_ignore_ascii_case(scheme)
    });
    if by_code {
        return true;
    }
    let meaning = item.code_meaning.to_lowercase();
    match kind {
        ModifierKind::SpotCompression => meaning.contains("spot compression"),
        ModifierKind::Magnification => meaning.contains("magnif"),
        ModifierKind::ImplantDisplaced => meaning.contains("implant displaced"),
    }
}

fn any_modifier(items: &[CodeItem], kind: ModifierKind) -> bool {
    items.iter().any(|item| code_item_matches(item, kind))
}

fn rule_sfm(is_sfm_hint: bool) -> Option<MammogramType> {
    is_sfm_hint.then_some(MammogramType::Sfm)
}

fn rule_tomo(image_type: &ImageType, number_of_frames: i32) -> Option<MammogramType> {
    let is_tomo = image_type.flavor.as_deref() == Some("VOLUME")
        || image_type.contains("TOMO")
        || number_of_frames >= 2;
    is_tomo.then_some(MammogramType::Tomo)
}

fn rule_synth(image_type: &ImageType) -> Option<MammogramType> {
    let is_synth = image_type.contains("GENERATED_2D")
        || image_type.flavor.as_deref() == Some("GENERATED")
        || image_type.contains("S-VIEW")
        || (image_type.pixels == "DERIVED" && image_type.exam == "SECONDARY");
    is_synth.then_some(MammogramType::Synth)
}

fn rule_ffdm_strict(image_type: &ImageType, modality: Option<&str>) -> Option<MammogramType> {
    let is_mg = modality.map(|m| m.eq_ignore_ascii_case("MG")).unwrap_or(false);
    let is_strict = is_mg && image_type.pixels == "ORIGINAL" && image_type.exam == "PRIMARY";
    is_strict.then_some(MammogramType::Ffdm)
}

fn rule_ffdm_fallback(modality: Option<&str>) -> Option<MammogramType> {
    modality
        .map(|m| m.eq_ignore_ascii_case("MG"))
        .unwrap_or(false)
        .then_some(MammogramType::Ffdm)
}

fn classify_mammogram_type(
    bundle: &TagBundle,
    image_type: &ImageType,
    is_sfm_hint: bool,
) -> MammogramType {
    let number_of_frames = bundle.number_of_frames.unwrap_or(1).max(1);
    rule_sfm(is_sfm_hint)
        .or_else(|| rule_tomo(image_type, number_of_frames))
        .or_else(|| rule_synth(image_type))
        .or_else(|| rule_ffdm_strict(image_type, bundle.modality.as_deref()))
        .or_else(|| rule_ffdm_fallback(bundle.modality.as_deref()))
        .unwrap_or(MammogramType::Unknown)
}

fn classify_laterality(bundle: &TagBundle) -> Laterality {
    bundle
        .image_laterality
        .as_deref()
        .or(bundle.laterality.as_deref())
        .map(Laterality::from_dicom_code)
        .unwrap_or_default()
}

fn classify_view_position(bundle: &TagBundle) -> ViewPosition {
    bundle
        .view_position
        .as_deref()
        .map(enums::view_position_from_tag_value)
        .unwrap_or_default()
}

fn classify_photometric_interpretation(bundle: &TagBundle) -> PhotometricInterpretation {
    enums::photometric_interpretation_from_tag_value(bundle.photometric_interpretation.as_deref())
}

/// Classifies one extraction pass into normalized metadata. Never fails:
/// missing or malformed fields resolve to documented defaults.
pub(crate) fn classify(bundle: &TagBundle, is_sfm_hint: bool) -> MammogramMetadata {
    let image_type = ImageType::from_slots(&bundle.image_type);
    let mammogram_type = classify_mammogram_type(bundle, &image_type, is_sfm_hint);
    let laterality = classify_laterality(bundle);
    let view_position = classify_view_position(bundle);
    let photometric_interpretation = classify_photometric_interpretation(bundle);

    let is_for_processing = bundle
        .presentation_intent_type
        .as_deref()
        .map(|s| s.eq_ignore_ascii_case("FOR PROCESSING"))
        .unwrap_or(false);
    let has_implant = bundle
        .breast_implant_present
        .as_deref()
        .map(|s| s.eq_ignore_ascii_case("YES"))
        .unwrap_or(false);

    let is_spot_compression = any_modifier(&bundle.view_modifiers, ModifierKind::SpotCompression);
    let is_magnified = any_modifier(&bundle.view_modifiers, ModifierKind::Magnification);
    let is_implant_displaced = any_modifier(&bundle.view_modifiers, ModifierKind::ImplantDisplaced);

    let number_of_frames = bundle.number_of_frames.unwrap_or(1).max(1) as u32;

    MammogramMetadata {
        mammogram_type,
        laterality,
        view_position,
        image_type,
        is_for_processing,
        has_implant,
        is_spot_compression,
        is_magnified,
        is_implant_displaced,
        number_of_frames,
        photometric_interpretation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(image_type: &[&str]) -> TagBundle {
        TagBundle {
            image_type: image_type.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn sfm_hint_wins_regardless_of_tags() {
        let b = bundle(&["ORIGINAL", "PRIMARY"]);
        let meta = classify(&b, true);
        assert_eq!(meta.mammogram_type, MammogramType::Sfm);
    }

    #[test]
    fn tomo_from_volume_flavor() {
        let b = bundle(&["ORIGINAL", "PRIMARY", "VOLUME"]);
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Tomo);
    }

    #[test]
    fn tomo_from_frame_count() {
        let mut b = bundle(&["ORIGINAL", "PRIMARY"]);
        b.number_of_frames = Some(50);
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Tomo);
    }

    #[test]
    fn synth_from_derived_secondary() {
        let b = bundle(&["DERIVED", "SECONDARY"]);
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Synth);
    }

    #[test]
    fn synth_beats_ffdm_when_both_could_apply() {
        let b = bundle(&["DERIVED", "PRIMARY", "GENERATED", "GENERATED_2D"]);
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Synth);
    }

    #[test]
    fn ffdm_strict_match() {
        let mut b = bundle(&["ORIGINAL", "PRIMARY"]);
        b.modality = Some("MG".to_string());
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Ffdm);
    }

    #[test]
    fn ffdm_fallback_on_partial_tags() {
        let mut b = bundle(&[]);
        b.modality = Some("MG".to_string());
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Ffdm);
    }

    #[test]
    fn unknown_when_nothing_matches() {
        let b = bundle(&["SOMETHING", "ELSE"]);
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Unknown);
    }

    #[test]
    fn tomo_takes_priority_over_synth() {
        let b = bundle(&["DERIVED", "PRIMARY", "VOLUME", "GENERATED_2D"]);
        assert_eq!(classify(&b, false).mammogram_type, MammogramType::Tomo);
    }

    #[test]
    fn laterality_prefers_image_laterality_over_laterality() {
        let mut b = bundle(&[]);
        b.image_laterality = Some("L".to_string());
        b.laterality = Some("R".to_string());
        assert_eq!(classify(&b, false).laterality, Laterality::Left);
    }

    #[test]
    fn laterality_falls_back_to_laterality_tag() {
        let mut b = bundle(&[]);
        b.laterality = Some("R".to_string());
        assert_eq!(classify(&b, false).laterality, Laterality::Right);
    }

    #[test]
    fn view_position_unmatched_is_unknown() {
        let mut b = bundle(&[]);
        b.view_position = Some("bogus".to_string());
        assert_eq!(classify(&b, false).view_position, ViewPosition::Unknown);
    }

    #[test]
    fn is_for_processing_case_insensitive() {
        let mut b = bundle(&[]);
        b.presentation_intent_type = Some("for processing".to_string());
        assert!(classify(&b, false).is_for_processing);
    }

    #[test]
    fn has_implant_requires_yes() {
        let mut b = bundle(&[]);
        b.breast_implant_present = Some("YES".to_string());
        assert!(classify(&b, false).has_implant);
        b.breast_implant_present = Some("NO".to_string());
        assert!(!classify(&b, false).has_implant);
    }

    #[test]
    fn view_modifiers_recognized_by_code() {
        let mut b = bundle(&[]);
        b.view_modifiers = vec![CodeItem {
            code_value: "R-102D1".to_string(),
            coding_scheme_designator: "99SDM".to_string(),
            code_meaning: String::new(),
        }];
        let meta = classify(&b, false);
        assert!(meta.is_spot_compression);
        assert!(!meta.is_magnified);
        assert!(!meta.is_implant_displaced);
    }

    #[test]
    fn view_modifiers_recognized_by_meaning() {
        let mut b = bundle(&[]);
        b.view_modifiers = vec![CodeItem {
            code_value: "UNKNOWN_CODE".to_string(),
            coding_scheme_designator: "LOCAL".to_string(),
            code_meaning: "Magnification view".to_string(),
        }];
        assert!(classify(&b, false).is_magnified);
    }

    #[test]
    fn no_modifiers_all_false() {
        let b = bundle(&[]);
        let meta = classify(&b, false);
        assert!(!meta.is_spot_compression);
        assert!(!meta.is_magnified);
        assert!(!meta.is_implant_displaced);
    }

    #[test]
    fn number_of_frames_defaults_and_clamps() {
        let b = bundle(&[]);
        assert_eq!(classify(&b, false).number_of_frames, 1);

        let mut zero = bundle(&[]);
        zero.number_of_frames = Some(0);
        assert_eq!(classify(&zero, false).number_of_frames, 1);
    }

    #[test]
    fn photometric_interpretation_defaults_to_monochrome2() {
        let b = bundle(&[]);
        assert_eq!(
            classify(&b, false).photometric_interpretation,
            PhotometricInterpretation::Monochrome2
        );
    }
}
