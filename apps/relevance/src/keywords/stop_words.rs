//! Stop-word tables for keyword extraction.
//!
//! `TEXT_STOP_WORDS` is used when indexing catalog prose. `QUERY_STOP_WORDS`
//! is applied to natural-language search questions and is deliberately broader.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words dropped from catalog text.
pub const TEXT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done",
    "down", "due", "during", "each", "either", "else", "elsewhere", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "for", "former",
    "formerly", "from", "further", "had", "has", "have", "having", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "last",
    "latter", "least", "less", "made", "many", "may", "me", "meanwhile", "might", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither", "never",
    "nevertheless", "next", "no", "nobody", "none", "nor", "not", "nothing", "now", "nowhere",
    "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others",
    "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "rather",
    "same", "several", "she", "should", "since", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "this", "those", "though", "through",
    "throughout", "thru", "thus", "to", "together", "too", "toward", "towards", "under",
    "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever",
    "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Words that carry no topical signal in a question about the portfolio owner.
pub const QUERY_STOP_WORDS: &[&str] = &[
    // articles, conjunctions, prepositions
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "of", "in", "on", "at", "to",
    "for", "from", "by", "with", "about", "into", "onto", "over", "under", "between", "through",
    "during", "before", "after", "than", "as", "via", "per", "any", "some", "all", "each",
    "every", "more", "most", "other", "such", "very", "also", "just", "only", "too",
    // pronouns
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our",
    "ours", "they", "them", "their", "theirs", "this", "that", "these", "those",
    // auxiliary and modal verbs
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "doing",
    "done", "have", "has", "had", "having", "can", "could", "will", "would", "shall", "should",
    "may", "might", "must",
    // question words
    "what", "which", "who", "whom", "whose", "when", "where", "why", "how", "whether",
    // conversational fillers
    "tell", "show", "give", "list", "find", "know", "want", "like", "please", "explain",
    "describe", "share", "anything", "something", "things", "thing", "there", "here",
    "much", "many", "kind", "kinds", "sort", "type", "types", "get", "got", "let",
    "lets", "not", "no", "yes", "ever", "else", "then", "now",
    // the portfolio owner
    "deven",
];

static TEXT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TEXT_STOP_WORDS.iter().copied().collect());

static QUERY_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| QUERY_STOP_WORDS.iter().copied().collect());

pub fn is_text_stop_word(word: &str) -> bool {
    TEXT_SET.contains(word)
}

pub fn is_query_stop_word(word: &str) -> bool {
    QUERY_SET.contains(word)
}
