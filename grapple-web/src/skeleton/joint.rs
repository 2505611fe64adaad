//! Joint labels and per-joint display metadata

/// The 23 tracked landmarks of one body, left/right pairs first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Joint {
    LeftToe,
    RightToe,
    LeftHeel,
    RightHeel,
    LeftAnkle,
    RightAnkle,
    LeftKnee,
    RightKnee,
    LeftHip,
    RightHip,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHand,
    RightHand,
    LeftFingers,
    RightFingers,
    Core,
    Neck,
    Head,
}

pub const JOINT_COUNT: usize = 23;

/// Every joint, in ordinal order
pub const JOINTS: [Joint; JOINT_COUNT] = [
    Joint::LeftToe, Joint::RightToe,
    Joint::LeftHeel, Joint::RightHeel,
    Joint::LeftAnkle, Joint::RightAnkle,
    Joint::LeftKnee, Joint::RightKnee,
    Joint::LeftHip, Joint::RightHip,
    Joint::LeftShoulder, Joint::RightShoulder,
    Joint::LeftElbow, Joint::RightElbow,
    Joint::LeftWrist, Joint::RightWrist,
    Joint::LeftHand, Joint::RightHand,
    Joint::LeftFingers, Joint::RightFingers,
    Joint::Core, Joint::Neck, Joint::Head,
];

impl Joint {
    /// Ordinal, usable as an array index
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Joint> {
        JOINTS.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Joint::LeftToe => "LeftToe",
            Joint::RightToe => "RightToe",
            Joint::LeftHeel => "LeftHeel",
            Joint::RightHeel => "RightHeel",
            Joint::LeftAnkle => "LeftAnkle",
            Joint::RightAnkle => "RightAnkle",
            Joint::LeftKnee => "LeftKnee",
            Joint::RightKnee => "RightKnee",
            Joint::LeftHip => "LeftHip",
            Joint::RightHip => "RightHip",
            Joint::LeftShoulder => "LeftShoulder",
            Joint::RightShoulder => "RightShoulder",
            Joint::LeftElbow => "LeftElbow",
            Joint::RightElbow => "RightElbow",
            Joint::LeftWrist => "LeftWrist",
            Joint::RightWrist => "RightWrist",
            Joint::LeftHand => "LeftHand",
            Joint::RightHand => "RightHand",
            Joint::LeftFingers => "LeftFingers",
            Joint::RightFingers => "RightFingers",
            Joint::Core => "Core",
            Joint::Neck => "Neck",
            Joint::Head => "Head",
        }
    }

    /// Display metadata for this joint
    pub fn def(self) -> &'static JointDef {
        &JOINT_DEFS[self.index()]
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering radius and whether the editor lets the user grab the joint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointDef {
    pub joint: Joint,
    /// meters
    pub radius: f64,
    pub draggable: bool,
}

const fn def(joint: Joint, radius: f64, draggable: bool) -> JointDef {
    JointDef { joint, radius, draggable }
}

/// Indexed by `Joint::index()`
pub const JOINT_DEFS: [JointDef; JOINT_COUNT] = [
    def(Joint::LeftToe, 0.025, false),
    def(Joint::RightToe, 0.025, false),
    def(Joint::LeftHeel, 0.03, false),
    def(Joint::RightHeel, 0.03, false),
    def(Joint::LeftAnkle, 0.03, true),
    def(Joint::RightAnkle, 0.03, true),
    def(Joint::LeftKnee, 0.05, true),
    def(Joint::RightKnee, 0.05, true),
    def(Joint::LeftHip, 0.09, true),
    def(Joint::RightHip, 0.09, true),
    def(Joint::LeftShoulder, 0.08, true),
    def(Joint::RightShoulder, 0.08, true),
    def(Joint::LeftElbow, 0.045, true),
    def(Joint::RightElbow, 0.045, true),
    def(Joint::LeftWrist, 0.02, false),
    def(Joint::RightWrist, 0.02, false),
    def(Joint::LeftHand, 0.02, true),
    def(Joint::RightHand, 0.02, true),
    def(Joint::LeftFingers, 0.02, false),
    def(Joint::RightFingers, 0.02, false),
    def(Joint::Core, 0.1, false),
    def(Joint::Neck, 0.04, false),
    def(Joint::Head, 0.11, true),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_table_order() {
        for (i, joint) in JOINTS.iter().enumerate() {
            assert_eq!(joint.index(), i);
            assert_eq!(Joint::from_index(i), Some(*joint));
        }
        assert_eq!(Joint::from_index(JOINT_COUNT), None);
    }

    #[test]
    fn test_defs_are_indexed_by_joint() {
        for joint in JOINTS {
            assert_eq!(joint.def().joint, joint);
            assert!(joint.def().radius > 0.0);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Joint::LeftToe.name(), "LeftToe");
        assert_eq!(Joint::Head.to_string(), "Head");
    }
}
