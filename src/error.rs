use thiserror::Error;

/// Everything that can go wrong between sending a prompt and holding a
/// typed artifact. All variants are absorbed at the pipeline boundary and
/// traded for a fallback value; callers of the public API never see them.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Completion(#[from] reqwest::Error),

    #[error("empty response from model")]
    EmptyResponse,

    #[error("could not parse JSON from model response (preview: {preview})")]
    JsonExtraction { preview: String },

    #[error("model output did not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}
