mod mock_contact_repository;
mod recording_listener;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use recording_listener::RecordingListener;
