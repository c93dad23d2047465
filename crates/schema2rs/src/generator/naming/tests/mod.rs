mod definitions;
mod enum_cases;
mod identifiers;
