pub mod dataset;
pub mod engine;
pub mod grammar;
pub mod lexicon;
pub mod normalizer;
pub mod notice;
pub mod resolver;
pub mod types;
