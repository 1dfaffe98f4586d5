pub mod data;
pub mod defaults;
pub mod io;
pub mod keys;
pub mod printing;

#[cfg(test)]
mod tests;
