pub mod negative;
pub mod normalizer;
pub mod synonyms;
pub mod value_objects;

pub use negative::*;
pub use normalizer::*;
pub use value_objects::*;
