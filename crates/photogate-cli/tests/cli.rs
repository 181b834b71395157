//! Drives the built `photogate` binary over stdin/stdout.

use std::io::{Cursor, Write};
use std::process::{Command, Output, Stdio};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

fn photogate(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_photogate"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn photogate");

    // Write from a thread so a large input cannot deadlock against a full stdout pipe
    let mut child_stdin = child.stdin.take().unwrap();
    let input = stdin.to_vec();
    let writer = std::thread::spawn(move || {
        let _ = child_stdin.write_all(&input);
    });

    let output = child.wait_with_output().expect("failed to wait on photogate");
    writer.join().unwrap();
    output
}

fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&DynamicImage::new_rgb8(width, height), ImageFormat::Jpeg)
}

/// Insert an APP1 segment whose TIFF block holds only the Orientation tag.
fn with_orientation(jpeg: &[u8], code: u16) -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II\x2a\x00\x08\x00\x00\x00");
    tiff.extend_from_slice(&[0x01, 0x00, 0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    tiff.extend_from_slice(&code.to_le_bytes());
    tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    let len = (2 + 6 + tiff.len()) as u16;
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

fn dimensions(jpeg: &[u8]) -> (u32, u32) {
    let img = image::load_from_memory_with_format(jpeg, ImageFormat::Jpeg).unwrap();
    (img.width(), img.height())
}

#[test]
fn full_hd_jpeg_passes_through() {
    let out = photogate(&[], &jpeg(1920, 1080));

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(&out.stdout[0..2], &[0xFF, 0xD8]);
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(dimensions(&out.stdout), (1920, 1080));
}

#[test]
fn small_jpeg_reports_resolution_too_low() {
    let out = photogate(&[], &jpeg(500, 500));

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&out.stderr), "RESOLUTION_TOO_LOW\n");
}

#[test]
fn rgba_png_over_4k_is_downscaled() {
    let src = RgbaImage::from_pixel(4000, 3000, Rgba([250, 40, 40, 30]));
    let out = photogate(&[], &encode(&DynamicImage::ImageRgba8(src), ImageFormat::Png));

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(dimensions(&out.stdout), (2880, 2160));
}

#[test]
fn exif_rotated_portrait_is_uprighted() {
    let input = with_orientation(&jpeg(1080, 1920), 6);
    let out = photogate(&[], &input);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(dimensions(&out.stdout), (1920, 1080));
}

#[test]
fn output_can_be_fed_back() {
    let first = photogate(&[], &jpeg(2560, 1440));
    assert_eq!(first.status.code(), Some(0));

    let second = photogate(&[], &first.stdout);
    assert_eq!(second.status.code(), Some(0));
    assert_eq!(dimensions(&second.stdout), (2560, 1440));
}

#[test]
fn garbage_input_fails_to_decode() {
    let out = photogate(&[], b"hello, this is not a picture");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("DECODE_FAILED: "), "stderr: {stderr}");
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn empty_input_fails_to_decode() {
    let out = photogate(&[], &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = photogate(&["--verbose"], &jpeg(1920, 1080));

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(&out.stdout[0..2], &[0xFF, 0xD8]);
    assert!(String::from_utf8_lossy(&out.stderr).contains("wrote JPEG"));
}

#[test]
fn unknown_flag_is_rejected() {
    let out = photogate(&["--quality", "50"], &jpeg(1920, 1080));

    assert_ne!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}
