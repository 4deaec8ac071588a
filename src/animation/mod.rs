pub(crate) mod ease;
pub(crate) mod frame;
pub(crate) mod interpolate;
pub(crate) mod playback;
