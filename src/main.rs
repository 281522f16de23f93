mod cropper;
mod paths;

fn main() {
    env_logger::init(); // Initialize logger

    let input_path = paths::logo_input_path();
    let output_path = paths::logo_output_path();

    match cropper::crop_logo(&input_path, &output_path) {
        Ok(()) => println!("✅ Logo crop completed successfully."),
        Err(e) => println!("❌ An error occurred: {}", e),
    }
}
