/*!
 * Translation of extracted document text.
 *
 * - `core`: the translation service wrapping the active provider
 * - `batch`: splitting long documents into request-sized chunks
 * - `pipeline`: cleaning, language resolution and translation in order
 */

// Re-export main types for easier usage
pub use self::batch::{TextChunk, split_into_chunks};
pub use self::core::TranslationService;
pub use self::pipeline::{PipelineOptions, PipelineOutcome, TranslationPipeline};

// Submodules
pub mod batch;
pub mod core;
pub mod pipeline;
