use std::fs;

use a2v_studio::request::{AnimationMode, DrivingOption, GenerationRequest, RequestError};
use proptest::prelude::*;
use tempfile::TempDir;

fn request_with_media(dir: &TempDir) -> GenerationRequest {
    let image = dir.path().join("ref.jpg");
    let audio = dir.path().join("voice.wav");
    fs::write(&image, b"jpg").expect("write image");
    fs::write(&audio, b"wav").expect("write audio");
    GenerationRequest {
        reference_image: image,
        input_audio: audio,
        ..GenerationRequest::default()
    }
}

#[test]
fn defaults_match_the_form() {
    let request = GenerationRequest::default();
    assert_eq!(request.animation_mode, AnimationMode::Human);
    assert_eq!(request.driving_option, DrivingOption::ExpressionFriendly);
    assert!(request.normalize_lip && request.relative_motion);
    assert!(request.crop_input && request.stitching && request.paste_back);
    assert_eq!(request.driving_multiplier, 1.0);
    assert_eq!(request.crop_scale, 2.3);
    assert_eq!(request.crop_x_offset, 0.0);
    assert_eq!(request.crop_y_offset, -0.125);
    assert_eq!(request.cfg_scale, 4.0);
}

#[test]
fn in_range_request_with_readable_media_passes() {
    let dir = TempDir::new().expect("tempdir");
    request_with_media(&dir).validate().expect("valid");
}

#[test]
fn missing_media_is_rejected() {
    let dir = TempDir::new().expect("tempdir");

    let mut request = request_with_media(&dir);
    request.reference_image = dir.path().join("absent.jpg");
    assert!(matches!(
        request.validate(),
        Err(RequestError::ImageNotReadable(_))
    ));

    let mut request = request_with_media(&dir);
    request.input_audio = dir.path().join("absent.wav");
    assert!(matches!(
        request.validate(),
        Err(RequestError::AudioNotReadable(_))
    ));
}

#[test]
fn out_of_range_controls_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let base = request_with_media(&dir);

    let cases: Vec<(&str, Box<dyn Fn(&mut GenerationRequest)>)> = vec![
        ("driving_multiplier", Box::new(|r| r.driving_multiplier = 2.5)),
        ("crop_scale", Box::new(|r| r.crop_scale = 1.0)),
        ("crop_x_offset", Box::new(|r| r.crop_x_offset = 0.75)),
        ("crop_y_offset", Box::new(|r| r.crop_y_offset = -0.75)),
        ("cfg_scale", Box::new(|r| r.cfg_scale = 12.0)),
        ("cfg_scale", Box::new(|r| r.cfg_scale = f64::NAN)),
    ];
    for (name, mutate) in cases {
        let mut request = base.clone();
        mutate(&mut request);
        match request.validate() {
            Err(RequestError::OutOfRange { field, .. }) => assert_eq!(field, name),
            other => panic!("{name}: expected out-of-range, got {other:?}"),
        }
    }
}

#[test]
fn mode_wire_form_is_lowercase() {
    assert_eq!(
        serde_json::to_value(AnimationMode::Animal).expect("json"),
        serde_json::json!("animal")
    );
    assert_eq!(
        serde_json::from_value::<AnimationMode>(serde_json::json!("animal")).expect("json"),
        AnimationMode::Animal
    );
    assert_eq!(
        serde_json::from_value::<AnimationMode>(serde_json::json!("Animal")).expect("json"),
        AnimationMode::Human
    );
}

#[test]
fn driving_option_wire_form_is_kebab_case() {
    assert_eq!(
        serde_json::to_value(DrivingOption::ExpressionFriendly).expect("json"),
        serde_json::json!("expression-friendly")
    );
    assert_eq!(
        serde_json::from_value::<DrivingOption>(serde_json::json!("pose-friendly")).expect("json"),
        DrivingOption::PoseFriendly
    );
}

proptest! {
    #[test]
    fn any_text_other_than_the_animal_literal_is_human(text in "\\PC*") {
        prop_assume!(text != "animal");
        prop_assert_eq!(AnimationMode::from(text.as_str()), AnimationMode::Human);
    }
}
