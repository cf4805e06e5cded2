pub mod huggingface;

pub use huggingface::HuggingFaceClassifier;
