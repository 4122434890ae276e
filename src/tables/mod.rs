pub mod record;
pub mod code_map;
pub mod errors;
#[cfg(feature = "online")]
pub mod online;
#[cfg(test)]
mod tests;
