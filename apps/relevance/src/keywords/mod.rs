// Keyword Extractor & Normalizer
// Pure text → keyword functions used by both the index builder and the boosting engine.

pub mod extractor;
pub mod stop_words;

pub use extractor::{
    extract_keywords_from_text, extract_query_keywords, get_keyword_variants, normalize_keyword,
};
