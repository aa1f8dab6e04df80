//! Worktop segments derived from base unit runs.

use kitchenkit_core::data::{CornerJoint, Project, UnitCategory, WallId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointType {
    Straight,
    Corner,
}

/// What a worktop segment covers: a wall run or a corner joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorktopSpan {
    Wall(WallId),
    Corner(CornerJoint),
}

impl std::fmt::Display for WorktopSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wall(wall) => write!(f, "{}", wall),
            Self::Corner(joint) => write!(f, "{}", joint),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorktopSegment {
    pub wall: WorktopSpan,
    pub length: f64,
    pub joint_type: JointType,
}

/// Straight segments per wall (sum of base unit widths, empty runs
/// omitted) followed by zero-length corner joints for the layout.
pub fn auto_generate_worktop(project: &Project) -> Vec<WorktopSegment> {
    let straight = WallId::ALL.iter().filter_map(|&wall| {
        let length: f64 = project
            .units_on_wall(wall)
            .filter(|u| u.category == UnitCategory::Base)
            .map(|u| u.width)
            .sum();
        (length > 0.0).then_some(WorktopSegment {
            wall: WorktopSpan::Wall(wall),
            length,
            joint_type: JointType::Straight,
        })
    });

    let corners = project
        .mode
        .corner_joints()
        .iter()
        .map(|&joint| WorktopSegment {
            wall: WorktopSpan::Corner(joint),
            length: 0.0,
            joint_type: JointType::Corner,
        });

    straight.chain(corners).collect()
}

pub fn total_worktop_length(segments: &[WorktopSegment]) -> f64 {
    segments.iter().map(|s| s.length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchenkit_core::data::LayoutMode;

    #[test]
    fn test_u_layout_worktop() {
        let project = Project::new("Worktop", LayoutMode::U);
        let segments = auto_generate_worktop(&project);
        let summary: Vec<_> = segments
            .iter()
            .map(|s| (s.wall.to_string(), s.length, s.joint_type))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("A".to_string(), 310.0, JointType::Straight),
                ("B".to_string(), 60.0, JointType::Straight),
                ("C".to_string(), 150.0, JointType::Straight),
                ("A-B".to_string(), 0.0, JointType::Corner),
                ("B-C".to_string(), 0.0, JointType::Corner),
            ]
        );
        assert_eq!(total_worktop_length(&segments), 520.0);
    }

    #[test]
    fn test_span_serializes_as_plain_string() {
        let json = serde_json::to_string(&WorktopSpan::Corner(CornerJoint::BtoC)).unwrap();
        assert_eq!(json, "\"B-C\"");
        let span: WorktopSpan = serde_json::from_str("\"Island\"").unwrap();
        assert_eq!(span, WorktopSpan::Wall(WallId::Island));
    }
}
