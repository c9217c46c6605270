//! Preferred-view selection: picks at most one record per standard
//! screening view from a heterogeneous collection, under a configurable
//! preference policy with a fully-specified, deterministic tie-break.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::enums::{Laterality, MammogramType};
use crate::record::MammogramRecord;
use crate::view::{MammogramView, STANDARD_VIEWS};

#[derive(thiserror::Error, Debug)]
pub enum PreferenceOrderError {
    #[error("invalid preference order: {0}")]
    InvalidPreferenceOrder(String),
}

/// Policy controlling the relative preference among mammogram types when
/// multiple candidates exist for the same standard view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PreferenceOrder {
    #[default]
    Default,
    TomoFirst,
}

impl PreferenceOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceOrder::Default => "default",
            PreferenceOrder::TomoFirst => "tomo-first",
        }
    }

    /// Lower rank sorts first (more preferred).
    fn type_rank(&self, t: MammogramType) -> u8 {
        match self {
            PreferenceOrder::Default => match t {
                MammogramType::Tomo => 0,
                MammogramType::Ffdm => 1,
                MammogramType::Synth => 2,
                MammogramType::Sfm => 3,
                MammogramType::Unknown => 4,
            },
            PreferenceOrder::TomoFirst => match t {
                MammogramType::Tomo => 0,
                MammogramType::Synth => 1,
                MammogramType::Ffdm => 2,
                MammogramType::Sfm => 3,
                MammogramType::Unknown => 4,
            },
        }
    }
}

impl std::fmt::Display for PreferenceOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceOrder {
    type Err = PreferenceOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(PreferenceOrder::Default),
            "tomo-first" => Ok(PreferenceOrder::TomoFirst),
            _ => Err(PreferenceOrderError::InvalidPreferenceOrder(s.to_string())),
        }
    }
}

/// Pre-selection filter applied to every candidate before ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    pub exclude_spot_compression: bool,
    pub exclude_magnified: bool,
    pub exclude_implant_displaced: bool,
    pub require_standard_view: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            exclude_spot_compression: true,
            exclude_magnified: true,
            exclude_implant_displaced: false,
            require_standard_view: true,
        }
    }
}

impl FilterConfig {
    fn admits(&self, record: &MammogramRecord) -> bool {
        if self.exclude_spot_compression && record.metadata.is_spot_compression {
            return false;
        }
        if self.exclude_magnified && record.metadata.is_magnified {
            return false;
        }
        if self.exclude_implant_displaced && record.metadata.is_implant_displaced {
            return false;
        }
        if self.require_standard_view && !record.metadata.is_standard_view() {
            return false;
        }
        true
    }
}

/// Eagerly-constructed comparison key: lexicographic ascending order
/// determines which candidate wins a bucket. Built once per candidate so
/// swapping `PreferenceOrder` is a single `type_rank` change, and the
/// tie-break chain is auditable as plain tuple order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SelectionKey {
    type_rank: u8,
    not_for_processing: bool,
    not_has_pixel_dims: bool,
    neg_area: Reverse<u64>,
    file_path: String,
}

impl SelectionKey {
    fn for_record(record: &MammogramRecord, order: PreferenceOrder) -> Self {
        SelectionKey {
            type_rank: order.type_rank(record.metadata.mammogram_type),
            not_for_processing: !record.metadata.is_for_processing,
            not_has_pixel_dims: record.image_area().is_none(),
            neg_area: Reverse(record.image_area().unwrap_or(0)),
            file_path: record.file_path.clone(),
        }
    }
}

fn bucket<'a>(
    records: &'a [MammogramRecord],
    filter: &FilterConfig,
) -> BTreeMap<MammogramView, Vec<&'a MammogramRecord>> {
    let mut buckets: BTreeMap<MammogramView, Vec<&MammogramRecord>> = BTreeMap::new();
    for record in records {
        if !filter.admits(record) {
            continue;
        }
        let view = record.metadata.mammogram_view();
        if !view.is_standard_mammo_view() {
            continue;
        }
        buckets.entry(view).or_default().push(record);
    }
    buckets
}

fn select_from_bucket(
    candidates: &[&MammogramRecord],
    order: PreferenceOrder,
) -> Option<MammogramRecord> {
    candidates
        .iter()
        .min_by_key(|r| SelectionKey::for_record(r, order))
        .map(|r| (**r).clone())
}

fn standard_view_map() -> BTreeMap<MammogramView, Option<MammogramRecord>> {
    STANDARD_VIEWS.iter().map(|v| (*v, None)).collect()
}

/// Selects one preferred record per standard view, under `order` and
/// `filter`. The returned map always has exactly the four standard views as
/// keys.
pub fn get_preferred_views_filtered(
    records: &[MammogramRecord],
    order: PreferenceOrder,
    filter: &FilterConfig,
) -> BTreeMap<MammogramView, Option<MammogramRecord>> {
    let buckets = bucket(records, filter);
    let mut result = standard_view_map();
    for (view, candidates) in buckets {
        result.insert(view, select_from_bucket(&candidates, order));
    }
    result
}

pub fn get_preferred_views_with_order(
    records: &[MammogramRecord],
    order: PreferenceOrder,
) -> BTreeMap<MammogramView, Option<MammogramRecord>> {
    get_preferred_views_filtered(records, order, &FilterConfig::default())
}

pub fn get_preferred_views(
    records: &[MammogramRecord],
) -> BTreeMap<MammogramView, Option<MammogramRecord>> {
    get_preferred_views_with_order(records, PreferenceOrder::default())
}
