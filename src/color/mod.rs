//! Color code table and band layouts

mod role;
mod table;

pub use role::{BandCount, BandRole};
pub use table::{
    Color, ColorEntry, DisplayColor, digit_entry, display_tokens, multiplier_entry, unset,
};
pub(crate) use table::{TABLE, pow10, scale};

impl ColorEntry {
    /// Whether this color can be placed in a band of the given role
    pub fn has_role(&self, role: BandRole) -> bool {
        match role {
            BandRole::Digit1 | BandRole::Digit2 | BandRole::Digit3 => self.digit.is_some(),
            BandRole::Multiplier => self.multiplier_exp.is_some(),
            BandRole::Tolerance => self.tolerance.is_some(),
            BandRole::Tcr => self.tcr.is_some(),
        }
    }
}

/// Every table entry, unset sentinel first
pub fn entries() -> &'static [ColorEntry] {
    &TABLE
}

/// Colors selectable for a band role, in table order.
///
/// The first digit never offers the zero color.
pub fn colors_for_role(role: BandRole) -> Vec<&'static ColorEntry> {
    TABLE
        .iter()
        .filter(|e| e.has_role(role))
        .filter(|e| role != BandRole::Digit1 || e.digit != Some(0))
        .collect()
}
