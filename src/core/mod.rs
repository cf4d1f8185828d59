pub mod descriptors;
pub mod dice;
pub mod disposition;
pub mod names;
pub mod pipeline;
pub mod table;
