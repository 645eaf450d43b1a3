pub mod entities;
pub mod helpers;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use helpers::*;
pub use ports::*;
pub use value_objects::*;
