mod laterality;
mod mammogram_type;
mod photometric_interpretation;
mod view_position;

pub use laterality::{Laterality, LateralityError};
pub use mammogram_type::{MammogramType, MammogramTypeError};
pub use photometric_interpretation::{PhotometricInterpretation, PhotometricInterpretationError};
pub use view_position::{ViewPosition, ViewPositionError};

pub(crate) use view_position::from_tag_value as view_position_from_tag_value;
pub(crate) use photometric_interpretation::from_tag_value as photometric_interpretation_from_tag_value;
