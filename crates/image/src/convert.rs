use {
    crate::{ImageError, pixelformat::yuv_to_rgb},
    base::Vec2,
};

/// Converts a YUYV (YUV 4:2:2) buffer to packed RGB using BT.601.
///
/// Each `[Y0, U, Y1, V]` group yields two pixels sharing U and V.
///
/// # Errors
///
/// Returns `ImageError::Truncated` if `data` holds fewer than
/// `width * height * 2` bytes.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let expected = size.area() * 2;
    if data.len() < expected {
        return Err(ImageError::Truncated {
            expected,
            got: data.len(),
        });
    }

    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data[..expected].chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }
    Ok(rgb)
}

/// Decodes one JPEG image (an MJPEG frame) into packed RGB.
pub fn jpeg_to_rgb(data: &[u8]) -> Result<(Vec2<usize>, Vec<u8>), ImageError> {
    let decoded = crates_image::load_from_memory_with_format(data, crates_image::ImageFormat::Jpeg)?;
    let rgb = decoded.to_rgb8();
    let size = Vec2::new(rgb.width() as usize, rgb.height() as usize);
    Ok((size, rgb.into_raw()))
}

/// Swaps the first and third byte of every 3-byte pixel (RGB <-> BGR).
pub fn swap_red_blue(data: &[u8]) -> Vec<u8> {
    let mut swapped = Vec::with_capacity(data.len());
    for pixel in data.chunks_exact(3) {
        swapped.extend_from_slice(&[pixel[2], pixel[1], pixel[0]]);
    }
    swapped
}
