//! One component per card scene.

mod final_letter;
mod gallery;
mod hero;
mod letter;
mod playlist;

pub use final_letter::FinalLetter;
pub use gallery::Gallery;
pub use hero::Hero;
pub use letter::Letter;
pub use playlist::Playlist;
