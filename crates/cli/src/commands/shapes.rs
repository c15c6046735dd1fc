use facecut_core::FaceShape;

use crate::commands::CommandResult;

pub fn run(shape: Option<FaceShape>) -> CommandResult {
    match shape {
        Some(shape) => {
            CommandResult::success_with_data("shapes", format!("{shape} face shape"), &shape.profile())
        }
        None => {
            let profiles: Vec<_> = FaceShape::ALL.iter().map(FaceShape::profile).collect();
            CommandResult::success_with_data(
                "shapes",
                format!("{} face shapes", profiles.len()),
                &profiles,
            )
        }
    }
}
