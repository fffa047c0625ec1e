use crate::{Image, ImageError, PixelFormat, pixelformat::yuv_to_rgb};

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack a frame into one `0xAARRGGBB` word per pixel for window output.
pub fn to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    if let Some(bpp) = image.format.bytes_per_pixel() {
        let expected = image.size.area() * bpp;
        if image.data.len() < expected {
            return Err(ImageError::Truncated {
                expected,
                got: image.data.len(),
            });
        }
    }

    let mut buf = Vec::with_capacity(image.size.area());
    match image.format {
        PixelFormat::Rgb8 => {
            for p in image.data.chunks_exact(3).take(image.size.area()) {
                buf.push(pack_u32(p[0], p[1], p[2]));
            }
        }
        PixelFormat::Bgr8 => {
            for p in image.data.chunks_exact(3).take(image.size.area()) {
                buf.push(pack_u32(p[2], p[1], p[0]));
            }
        }
        PixelFormat::Yuyv => {
            for chunk in image.data.chunks_exact(4).take(image.size.area() / 2) {
                let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
                let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
                buf.push(pack_u32(r0, g0, b0));
                buf.push(pack_u32(r1, g1, b1));
            }
        }
        PixelFormat::Jpeg => {
            let decoded = image.to_format(PixelFormat::Rgb8)?;
            return to_u32(&decoded);
        }
    }
    Ok(buf)
}
