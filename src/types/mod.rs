mod detection;
mod record;
mod token;

pub use detection::*;
pub use record::*;
pub use token::*;
