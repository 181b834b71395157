//! EXIF orientation extraction.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use tracing::warn;

use super::Orientation;

/// Extract the EXIF orientation tag from raw container bytes.
///
/// Returns `None` if the container has no EXIF block, the block has no
/// orientation tag, or the tag holds a value outside 1-8.
pub fn read_orientation(bytes: &[u8]) -> Option<Orientation> {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    let exif = exif_reader.read_from_container(&mut cursor).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    let value = field.value.get_uint(0)?;

    let orientation = Orientation::from_exif(value);
    if orientation.is_none() {
        warn!(value, "ignoring out-of-range EXIF orientation");
    }
    orientation
}
