use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use a2v_studio::pipeline::{dispatch::Dispatcher, Pipeline, PipelineError, VideoArtifact};
use a2v_studio::request::{AnimationMode, DrivingOption, GenerationRequest};

struct RecordingPipeline {
    artifact: PathBuf,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl RecordingPipeline {
    fn new(artifact: &str) -> Arc<Self> {
        Arc::new(Self {
            artifact: PathBuf::from(artifact),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().expect("lock").clone()
    }
}

impl Pipeline for RecordingPipeline {
    fn generate(&self, request: &GenerationRequest) -> Result<VideoArtifact, PipelineError> {
        self.calls.lock().expect("lock").push(request.clone());
        Ok(VideoArtifact {
            path: self.artifact.clone(),
        })
    }
}

struct FailingPipeline;

impl Pipeline for FailingPipeline {
    fn generate(&self, _request: &GenerationRequest) -> Result<VideoArtifact, PipelineError> {
        Err(PipelineError::MissingArtifact(PathBuf::from("missing.mp4")))
    }
}

fn sample_request(mode: AnimationMode) -> GenerationRequest {
    GenerationRequest {
        reference_image: PathBuf::from("ref.jpg"),
        input_audio: PathBuf::from("voice.wav"),
        normalize_lip: true,
        relative_motion: true,
        driving_multiplier: 1.0,
        animation_mode: mode,
        driving_option: DrivingOption::ExpressionFriendly,
        crop_input: true,
        crop_scale: 2.3,
        crop_x_offset: 0.0,
        crop_y_offset: -0.125,
        stitching: true,
        paste_back: true,
        cfg_scale: 4.0,
    }
}

#[test]
fn animal_mode_reaches_only_the_animal_pipeline() {
    let human = RecordingPipeline::new("human.mp4");
    let animal = RecordingPipeline::new("animal.mp4");
    let dispatcher = Dispatcher::new(human.clone(), animal.clone());

    let request = sample_request(AnimationMode::Animal);
    dispatcher.dispatch(&request).expect("dispatch");

    assert_eq!(animal.calls().len(), 1);
    assert!(human.calls().is_empty());
}

#[test]
fn human_mode_reaches_only_the_human_pipeline() {
    let human = RecordingPipeline::new("human.mp4");
    let animal = RecordingPipeline::new("animal.mp4");
    let dispatcher = Dispatcher::new(human.clone(), animal.clone());

    let request = sample_request(AnimationMode::Human);
    dispatcher.dispatch(&request).expect("dispatch");

    assert_eq!(human.calls().len(), 1);
    assert!(animal.calls().is_empty());
}

#[test]
fn unrecognized_mode_text_routes_to_the_human_pipeline() {
    let human = RecordingPipeline::new("human.mp4");
    let animal = RecordingPipeline::new("animal.mp4");
    let dispatcher = Dispatcher::new(human.clone(), animal.clone());

    let request = sample_request(AnimationMode::from("giraffe"));
    dispatcher.dispatch(&request).expect("dispatch");

    assert_eq!(human.calls().len(), 1);
    assert!(animal.calls().is_empty());
}

#[test]
fn request_arrives_field_for_field_unmodified() {
    let human = RecordingPipeline::new("human.mp4");
    let animal = RecordingPipeline::new("animal.mp4");
    let dispatcher = Dispatcher::new(human, animal.clone());

    let request = sample_request(AnimationMode::Animal);
    dispatcher.dispatch(&request).expect("dispatch");

    assert_eq!(animal.calls(), vec![request]);
}

#[test]
fn pipeline_result_returns_verbatim() {
    let human = RecordingPipeline::new("human.mp4");
    let animal = RecordingPipeline::new("animal.mp4");
    let dispatcher = Dispatcher::new(human, animal);

    let artifact = dispatcher
        .dispatch(&sample_request(AnimationMode::Animal))
        .expect("dispatch");
    assert_eq!(artifact.path, PathBuf::from("animal.mp4"));

    let artifact = dispatcher
        .dispatch(&sample_request(AnimationMode::Human))
        .expect("dispatch");
    assert_eq!(artifact.path, PathBuf::from("human.mp4"));
}

#[test]
fn backend_fault_propagates_untouched() {
    let human = RecordingPipeline::new("human.mp4");
    let dispatcher = Dispatcher::new(human, Arc::new(FailingPipeline));

    let err = dispatcher
        .dispatch(&sample_request(AnimationMode::Animal))
        .expect_err("fault");
    assert!(matches!(err, PipelineError::MissingArtifact(path) if path.ends_with("missing.mp4")));
}
