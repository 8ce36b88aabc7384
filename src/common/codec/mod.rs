pub mod encoder;
pub mod types;

pub use encoder::*;
pub use types::*;

// Codec proptesting
//------------------------------------------------------------------------------
