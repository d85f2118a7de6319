pub mod fetch;
pub mod replacer;
pub mod rewrite;
pub mod server;

// Re-export main types for convenient access
pub use replacer::{classify, CasePattern, WordSwap};
pub use rewrite::{rewrite_document, RewrittenPage};

// Re-export the service pieces for embedding and tests
pub use fetch::{FetchConfig, FetchError, PageFetcher};
pub use server::{router, serve, AppState};
