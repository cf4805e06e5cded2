pub mod ensemble;
pub mod huggingface;
pub mod traits;
pub mod utils;
