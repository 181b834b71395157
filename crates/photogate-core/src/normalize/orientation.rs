//! Apply EXIF orientation so pixels are stored upright.

use image::DynamicImage;
use tracing::debug;

use crate::decode::{DecodedImage, Orientation};

/// Rotate/flip the pixel buffer according to its EXIF orientation and clear
/// the tag.
///
/// An image without orientation metadata is returned untouched. Afterwards
/// `orientation` is always `None`, so the transform can never be applied twice.
pub fn normalize_orientation(mut decoded: DecodedImage) -> DecodedImage {
    let Some(orientation) = decoded.orientation.take() else {
        return decoded;
    };

    if orientation != Orientation::Normal {
        let before = decoded.dimensions();
        decoded.image = apply_orientation(decoded.image, orientation);
        debug!(
            code = orientation.code(),
            from = ?before,
            to = ?decoded.dimensions(),
            "applied EXIF orientation"
        );
    }

    decoded
}

/// Apply EXIF orientation transformation to an image.
pub fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
