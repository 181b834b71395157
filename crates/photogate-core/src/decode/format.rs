//! Container format detection by magic bytes.

use std::fmt;

/// The closed set of container formats the decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// JPEG/JFIF, including EXIF-bearing camera files.
    Jpeg,
    /// PNG, optionally carrying an `eXIf` chunk.
    Png,
    /// GIF 87a/89a; only the first frame is decoded.
    Gif,
    /// WebP in a RIFF container, lossy or lossless.
    WebP,
    /// Windows bitmap.
    Bmp,
    /// TIFF in either byte order.
    Tiff,
}

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";
const BMP_MAGIC: &[u8] = b"BM";
const TIFF_LE_MAGIC: &[u8] = &[b'I', b'I', 0x2A, 0x00];
const TIFF_BE_MAGIC: &[u8] = &[b'M', b'M', 0x00, 0x2A];

impl ContainerFormat {
    /// Identify the container from its leading bytes.
    ///
    /// Returns `None` when nothing matches; the caller decides whether that is
    /// an error.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(JPEG_MAGIC) {
            Some(ContainerFormat::Jpeg)
        } else if bytes.starts_with(PNG_MAGIC) {
            Some(ContainerFormat::Png)
        } else if bytes.starts_with(GIF87_MAGIC) || bytes.starts_with(GIF89_MAGIC) {
            Some(ContainerFormat::Gif)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ContainerFormat::WebP)
        } else if bytes.starts_with(TIFF_LE_MAGIC) || bytes.starts_with(TIFF_BE_MAGIC) {
            Some(ContainerFormat::Tiff)
        } else if bytes.starts_with(BMP_MAGIC) {
            Some(ContainerFormat::Bmp)
        } else {
            None
        }
    }

    /// The matching `image` crate format, used to pick a decoder.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ContainerFormat::Jpeg => image::ImageFormat::Jpeg,
            ContainerFormat::Png => image::ImageFormat::Png,
            ContainerFormat::Gif => image::ImageFormat::Gif,
            ContainerFormat::WebP => image::ImageFormat::WebP,
            ContainerFormat::Bmp => image::ImageFormat::Bmp,
            ContainerFormat::Tiff => image::ImageFormat::Tiff,
        }
    }

    /// Whether `kamadak-exif` can pull an EXIF block out of this container.
    pub fn may_carry_exif(self) -> bool {
        matches!(
            self,
            ContainerFormat::Jpeg
                | ContainerFormat::Png
                | ContainerFormat::WebP
                | ContainerFormat::Tiff
        )
    }

    /// Short lowercase name, as used in log output.
    pub fn name(self) -> &'static str {
        match self {
            ContainerFormat::Jpeg => "jpeg",
            ContainerFormat::Png => "png",
            ContainerFormat::Gif => "gif",
            ContainerFormat::WebP => "webp",
            ContainerFormat::Bmp => "bmp",
            ContainerFormat::Tiff => "tiff",
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
