mod stroke;
pub use stroke::*;

mod builder;
pub use builder::*;
