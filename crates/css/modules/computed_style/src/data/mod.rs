//! Property groups.
//!
//! Each group bundles properties that tend to change together and is shared
//! between styles through a [`DataRef`](crate::data_ref::DataRef) until one of
//! them writes to it.

mod background;
mod box_data;
mod inherited;
mod misc;
mod rare;
mod rare_inherited;
mod surround;
mod svg;

pub use background::BackgroundData;
pub use box_data::BoxData;
pub use inherited::{FontData, InheritedData};
pub use misc::{MultiColumnData, NonInheritedMiscData, TransformData};
pub use rare::NonInheritedRareData;
pub use rare_inherited::InheritedRareData;
pub use surround::SurroundData;
pub use svg::{
    SvgData, SvgFillData, SvgInheritedFlags, SvgLayoutData, SvgMarkerData, SvgMiscData,
    SvgNonInheritedFlags, SvgStopData, SvgStrokeData,
};
