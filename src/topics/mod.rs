// Topic summarization: top-term extraction over fitted topic models.

pub mod traits;
pub mod summary;
pub mod extract;
pub mod export;
