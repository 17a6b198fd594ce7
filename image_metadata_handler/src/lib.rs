pub mod config;
pub mod handler;
pub mod model;
pub mod service;

#[cfg(test)]
mod test_support;
