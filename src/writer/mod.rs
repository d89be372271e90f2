pub mod dataset;
pub mod vocabulary;
