use base::Rect;

/// Number of landmarks in the COCO body layout.
pub const LANDMARK_COUNT: usize = 17;

/// A body joint. `x` and `y` are fractions of the frame width and height,
/// `z` is relative depth (always 0.0 for 2-D models), `visibility` is the
/// model's confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility,
        }
    }
}

/// COCO landmark indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl LandmarkIndex {
    pub const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        LandmarkIndex::Nose,
        LandmarkIndex::LeftEye,
        LandmarkIndex::RightEye,
        LandmarkIndex::LeftEar,
        LandmarkIndex::RightEar,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
        LandmarkIndex::LeftElbow,
        LandmarkIndex::RightElbow,
        LandmarkIndex::LeftWrist,
        LandmarkIndex::RightWrist,
        LandmarkIndex::LeftHip,
        LandmarkIndex::RightHip,
        LandmarkIndex::LeftKnee,
        LandmarkIndex::RightKnee,
        LandmarkIndex::LeftAnkle,
        LandmarkIndex::RightAnkle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LandmarkIndex::Nose => "nose",
            LandmarkIndex::LeftEye => "left_eye",
            LandmarkIndex::RightEye => "right_eye",
            LandmarkIndex::LeftEar => "left_ear",
            LandmarkIndex::RightEar => "right_ear",
            LandmarkIndex::LeftShoulder => "left_shoulder",
            LandmarkIndex::RightShoulder => "right_shoulder",
            LandmarkIndex::LeftElbow => "left_elbow",
            LandmarkIndex::RightElbow => "right_elbow",
            LandmarkIndex::LeftWrist => "left_wrist",
            LandmarkIndex::RightWrist => "right_wrist",
            LandmarkIndex::LeftHip => "left_hip",
            LandmarkIndex::RightHip => "right_hip",
            LandmarkIndex::LeftKnee => "left_knee",
            LandmarkIndex::RightKnee => "right_knee",
            LandmarkIndex::LeftAnkle => "left_ankle",
            LandmarkIndex::RightAnkle => "right_ankle",
        }
    }
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for LandmarkIndex {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkIndex::ALL.get(value).copied().ok_or(value)
    }
}

/// Pairs of landmarks joined by a line in the skeleton drawing.
pub const POSE_CONNECTIONS: [(LandmarkIndex, LandmarkIndex); 19] = {
    use LandmarkIndex::*;
    [
        // head
        (Nose, LeftEye),
        (Nose, RightEye),
        (LeftEye, RightEye),
        (LeftEye, LeftEar),
        (RightEye, RightEar),
        (LeftEar, LeftShoulder),
        (RightEar, RightShoulder),
        // torso
        (LeftShoulder, RightShoulder),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, RightHip),
        // arms
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        // legs
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
    ]
};

/// One detected person.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseLandmarks {
    pub landmarks: [Landmark; LANDMARK_COUNT],
    /// Person box in frame pixels.
    pub bbox: Rect<f32>,
    pub score: f32,
}

impl PoseLandmarks {
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[usize::from(index)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkIndex, &Landmark)> {
        LandmarkIndex::ALL.into_iter().zip(self.landmarks.iter())
    }
}

/// Parameters of the letterbox transform, used to map model coordinates back
/// to the source frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxInfo {
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
}

impl LetterboxInfo {
    pub fn to_source(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.pad_x) / self.scale, (y - self.pad_y) / self.scale)
    }
}
