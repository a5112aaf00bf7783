// Text preprocessing applied before vectorization.

pub mod tweets;
