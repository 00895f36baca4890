//! Test doubles shared by the integration tests.

pub mod recording_presenter;

pub use recording_presenter::RecordingPresenter;
