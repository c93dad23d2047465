pub mod definitions;
pub mod enum_cases;
pub mod identifiers;

#[cfg(test)]
mod tests;
