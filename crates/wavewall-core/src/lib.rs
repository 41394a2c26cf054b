pub mod animation;
pub mod color;
pub mod constants;
pub mod controller;
pub mod gesture;
pub mod layout;
pub mod music;
pub mod path;
pub mod state;
pub mod wave;

pub use animation::*;
pub use color::Rgba;
pub use constants::*;
pub use controller::*;
pub use gesture::*;
pub use layout::*;
pub use music::*;
pub use path::*;
pub use state::*;
pub use wave::*;
