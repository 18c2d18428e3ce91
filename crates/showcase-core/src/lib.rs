pub mod camera;
pub mod constants;
pub mod object;
pub mod path;
pub mod picking;
pub mod pointer;
pub mod ray;
pub mod showcase;

pub use camera::*;
pub use constants::*;
pub use object::*;
pub use path::*;
pub use picking::*;
pub use pointer::*;
pub use ray::*;
