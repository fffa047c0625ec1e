use {
    super::types::{LANDMARK_COUNT, LetterboxInfo},
    crate::InferError,
    base::{Rect, Tensor, Vec2},
};

/// IoU above which the weaker of two overlapping candidates is suppressed.
pub const NMS_IOU: f32 = 0.45;

// box (4) + score (1) + keypoints (17 * 3)
const ROWS: usize = 5 + LANDMARK_COUNT * 3;

/// A person found by the model, in frame pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCandidate {
    pub bbox: Rect<f32>,
    pub score: f32,
    /// `(x, y, confidence)` per landmark.
    pub keypoints: [(f32, f32, f32); LANDMARK_COUNT],
}

/// Decode a raw `[1, 56, N]` YOLO pose output.
///
/// Candidates below `score_threshold` are dropped, the rest go through
/// greedy non-maximum suppression at `iou_threshold` and are mapped out of
/// the letterbox. The result is sorted by score, best first.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &LetterboxInfo,
    score_threshold: f32,
    iou_threshold: f32,
) -> Result<Vec<PersonCandidate>, InferError> {
    let Some([1, ROWS, n]) = output.dims::<3>() else {
        return Err(InferError::Shape(format!(
            "expected output [1, {ROWS}, N], got {:?}",
            output.shape
        )));
    };

    // element [0, row, i] lives at row * n + i
    let at = |row: usize, i: usize| output.data[row * n + i];

    let mut candidates = Vec::new();
    for i in 0..n {
        let score = at(4, i);
        if score.is_nan() || score < score_threshold {
            continue;
        }
        let (cx, cy, w, h) = (at(0, i), at(1, i), at(2, i), at(3, i));
        let (x0, y0) = letterbox.to_source(cx - w / 2.0, cy - h / 2.0);
        let (x1, y1) = letterbox.to_source(cx + w / 2.0, cy + h / 2.0);

        let mut keypoints = [(0.0, 0.0, 0.0); LANDMARK_COUNT];
        for (k, keypoint) in keypoints.iter_mut().enumerate() {
            let row = 5 + k * 3;
            let (x, y) = letterbox.to_source(at(row, i), at(row + 1, i));
            *keypoint = (x, y, at(row + 2, i).clamp(0.0, 1.0));
        }

        candidates.push(PersonCandidate {
            bbox: Rect::from_min_max(Vec2::new(x0, y0), Vec2::new(x1, y1)),
            score,
            keypoints,
        });
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut kept: Vec<PersonCandidate> = Vec::new();
    for candidate in candidates {
        if kept
            .iter()
            .all(|winner| winner.bbox.iou(&candidate.bbox) <= iou_threshold)
        {
            kept.push(candidate);
        }
    }
    Ok(kept)
}
