pub mod diets;
pub mod matcher;
pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
