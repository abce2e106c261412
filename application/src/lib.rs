pub mod filter;
pub mod form;
pub mod service;
pub mod transfer;

#[cfg(test)]
pub(crate) mod memory;
