use {
    super::types::LetterboxInfo,
    crate::InferError,
    base::Tensor,
    image::{Image, PixelFormat},
};

/// Side of the square model input.
pub const INPUT_SIZE: usize = 640;

// gray padding, already in [0, 1]
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Letterbox an RGB frame into a `[1, 3, 640, 640]` tensor with values in
/// `[0, 1]`.
///
/// The frame is scaled by nearest neighbor so the longer side fills the
/// input, then centered on gray padding. The returned [`LetterboxInfo`] maps
/// model coordinates back to frame pixels.
pub fn preprocess(frame: &Image) -> Result<(Tensor<f32>, LetterboxInfo), InferError> {
    if frame.format != PixelFormat::Rgb8 {
        return Err(InferError::Shape(format!(
            "expected an Rgb8 frame, got {:?}",
            frame.format
        )));
    }
    if frame.is_empty() {
        return Err(InferError::Shape(format!(
            "empty frame ({}x{}, {} bytes)",
            frame.width(),
            frame.height(),
            frame.data.len()
        )));
    }

    let (w, h) = (frame.width(), frame.height());
    let scale = (INPUT_SIZE as f32 / w as f32).min(INPUT_SIZE as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).clamp(1, INPUT_SIZE);
    let new_h = ((h as f32 * scale) as usize).clamp(1, INPUT_SIZE);
    let pad_x = (INPUT_SIZE - new_w) / 2;
    let pad_y = (INPUT_SIZE - new_h) / 2;

    let plane = INPUT_SIZE * INPUT_SIZE;
    let mut data = vec![PAD_VALUE; 3 * plane];
    for y in 0..new_h {
        let src_y = ((y as f32 / scale) as usize).min(h - 1);
        let row = (y + pad_y) * INPUT_SIZE + pad_x;
        for x in 0..new_w {
            let src_x = ((x as f32 / scale) as usize).min(w - 1);
            let src = (src_y * w + src_x) * 3;
            for ch in 0..3 {
                data[ch * plane + row + x] = frame.data[src + ch] as f32 / 255.0;
            }
        }
    }

    let tensor = Tensor::new(vec![1, 3, INPUT_SIZE, INPUT_SIZE], data)?;
    let letterbox = LetterboxInfo {
        scale,
        pad_x: pad_x as f32,
        pad_y: pad_y as f32,
    };
    Ok((tensor, letterbox))
}
