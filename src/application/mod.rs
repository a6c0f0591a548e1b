mod playback;

pub use playback::Playback;
