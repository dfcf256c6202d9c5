/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Label used for transactions and usages without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
