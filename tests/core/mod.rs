// tests/core/mod.rs

#[cfg(test)]
mod context;
