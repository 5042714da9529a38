//! Frame-accurate animation scheduling and timeline validation.

pub(crate) mod ease;
pub(crate) mod sequence;
pub(crate) mod sequencer;
pub(crate) mod timeline;
pub(crate) mod timing;
