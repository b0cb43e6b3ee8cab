//! Button-identifier resolution from diagram markup.
//!
//! The configuration UI's diagram surface embeds the name of the currently
//! selected button in its markup between comment delimiters, e.g.
//! `<!--BTN_A-->`. The identifier is derived fresh from that markup on
//! every submission and never stored.

/// Opening delimiter of a button marker.
pub const OPENING_DELIMITER: &str = "<!--";

/// Closing delimiter of a button marker.
pub const CLOSING_DELIMITER: &str = "-->";

/// Extracts the button identifier from the diagram surface's current markup.
///
/// Every occurrence of [`OPENING_DELIMITER`] and every occurrence of
/// [`CLOSING_DELIMITER`] is removed independently, preserving the order and
/// content of the remaining text. No pairing validation and no trimming is
/// performed: markup without delimiters comes back unchanged, an unpaired
/// delimiter is still stripped, and markup with several markers yields all
/// fragments concatenated. The driver owns rejection of identifiers it does
/// not recognize, including the empty one.
pub fn resolve_button(markup: &str) -> String {
    let opened: String = markup.split(OPENING_DELIMITER).collect();
    opened.split(CLOSING_DELIMITER).collect()
}
