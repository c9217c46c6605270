use crate::enums::{Laterality, ViewPosition};

/// A mammogram view: the (laterality, projection) pair that together
/// identify one of the four standard screening views plus any number of
/// supplementary projections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MammogramView {
    pub laterality: Laterality,
    pub view_position: ViewPosition,
}

/// The four standard screening views, in the conventional reading-room
/// presentation order (right before left, CC before MLO).
pub const STANDARD_VIEWS: [MammogramView; 4] = [
    MammogramView {
        laterality: Laterality::Right,
        view_position: ViewPosition::Cc,
    },
    MammogramView {
        laterality: Laterality::Left,
        view_position: ViewPosition::Cc,
    },
    MammogramView {
        laterality: Laterality::Right,
        view_position: ViewPosition::Mlo,
    },
    MammogramView {
        laterality: Laterality::Left,
        view_position: ViewPosition::Mlo,
    },
];

impl MammogramView {
    pub fn new(laterality: Laterality, view_position: ViewPosition) -> Self {
        MammogramView {
            laterality,
            view_position,
        }
    }

    /// True iff this is one of the four standard screening views: a
    /// unilateral laterality combined with a CC or MLO projection.
    pub fn is_standard_mammo_view(&self) -> bool {
        self.laterality.is_unilateral() && self.view_position.is_standard_view()
    }

    pub fn is_mlo_like(&self) -> bool {
        self.view_position.is_mlo_like()
    }

    pub fn is_cc_like(&self) -> bool {
        self.view_position.is_cc_like()
    }
}

impl std::fmt::Display for MammogramView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.laterality, self.view_position)
    }
}
