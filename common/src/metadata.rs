//! Well-known metadata keys and values attached to image planes by the
//! metadata extractor.

/// Color format of the plane: one of [`MD_MONOCHROME`], [`MD_RGB`] or [`MD_PLANAR`].
pub const MD_COLOR_FORMAT: &str = "ColorFormat";

/// A single-channel plane.
pub const MD_MONOCHROME: &str = "monochrome";
/// An interleaved color plane (channels packed per pixel).
pub const MD_RGB: &str = "RGB";
/// A color plane whose channels are stored as separate planes.
pub const MD_PLANAR: &str = "Planar";

// Stack dimensions of the series the plane belongs to.
pub const MD_SIZE_C: &str = "SizeC";
pub const MD_SIZE_Z: &str = "SizeZ";
pub const MD_SIZE_T: &str = "SizeT";

// Position of the plane inside its stack.
pub const MD_C: &str = "C";
pub const MD_Z: &str = "Z";
pub const MD_T: &str = "T";

pub const MD_CHANNEL_NAME: &str = "ChannelName";
pub const MD_SERIES_NAME: &str = "SeriesName";
