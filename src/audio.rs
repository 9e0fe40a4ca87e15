//! Audio collaborator interface
//!
//! Fire-and-forget playback: the core hands over a sound id and never
//! waits on the device. A shell whose audio device fails to initialize
//! should treat that as fatal at startup; a missing device mid-run is
//! its own problem.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// An object landed on the plate or a Devil was captured
    Pickup,
    /// A damaging hit got through
    Hit,
}

/// Playback sink supplied by the shell
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Silent sink for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}

/// Map a frame's events onto sounds
pub fn route_events(events: &[GameEvent], audio: &mut dyn AudioSink) {
    for event in events {
        match event {
            GameEvent::Collected(_) | GameEvent::DevilCaptured => audio.play(Sound::Pickup),
            GameEvent::LifeLost => audio.play(Sound::Hit),
            _ => {}
        }
    }
}
