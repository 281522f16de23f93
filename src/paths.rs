use std::path::PathBuf;

/// Root of the surrounding project: the parent of this crate's directory,
/// since the cropper lives in a tool crate next to the app it serves.
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(root) => root.to_path_buf(),
        None => manifest_dir,
    }
}

pub fn logo_input_path() -> PathBuf {
    project_root()
        .join("ModerBox")
        .join("Assets")
        .join("avalonia-logo.png")
}

pub fn logo_output_path() -> PathBuf {
    project_root()
        .join("ModerBox")
        .join("Assets")
        .join("avalonia-logo-cropped.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_asset_paths() {
        assert!(logo_input_path().ends_with("ModerBox/Assets/avalonia-logo.png"));
        assert!(logo_output_path().ends_with("ModerBox/Assets/avalonia-logo-cropped.png"));
    }

    #[test]
    fn test_paths_share_project_root() {
        assert_eq!(
            logo_input_path().parent(),
            logo_output_path().parent()
        );
    }
}
