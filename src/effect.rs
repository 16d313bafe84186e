//! Effects - side effects declared by the reducer

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch every entry from the configured endpoint
    LoadPokedex,
}
