// topterms: top-weighted term extraction for fitted topic models
//
// This is the library root. `topics` summarizes topic-by-term weight
// matrices, `preprocess` cleans raw text before a model is fitted, and
// `output` renders summaries for the terminal.

pub mod config;
pub mod error;
pub mod output;
pub mod preprocess;
pub mod topics;
