pub mod job;
pub mod lifecycle;
pub mod preload;
pub mod renderer;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;
