pub mod llm_menu_extractor;
pub mod sample_menu_extractor;

pub use llm_menu_extractor::LlmMenuExtractor;
pub use sample_menu_extractor::SampleMenuExtractor;
