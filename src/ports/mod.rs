mod copy_chord_listener;

pub use copy_chord_listener::{CopyChordEvent, CopyChordListener};
