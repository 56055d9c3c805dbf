/// Presentation collaborators: terminal input, renderer, sound.

pub mod input;
pub mod renderer;
pub mod sound;
