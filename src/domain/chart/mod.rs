//! Chart aggregate: units, rescaling, viewport and zoom selection.

pub mod rescale;
pub mod selection;
pub mod units;
pub mod value_objects;

pub use rescale::*;
pub use selection::*;
pub use units::*;
pub use value_objects::*;
