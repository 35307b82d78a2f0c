// src/util/mod.rs
pub mod markup;
pub mod testing;
