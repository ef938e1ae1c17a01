//! Shared helpers for document generation: units and download filenames.

use genpdf::Mm;
use sanitize_filename::sanitize;

const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Convert PDF points to the millimetres genpdf works in.
pub fn pt(points: f32) -> Mm {
    Mm::from(f64::from(points) * MM_PER_POINT)
}

/// Strip characters that must not reach a `Content-Disposition` value:
/// path separators, quotes, control and reserved filename characters.
pub fn sanitize_download_name(name: &str) -> String {
    sanitize(name.trim())
}

/// Suggested filename for a generated offer letter, e.g. `OfferLetter_Jane Doe.pdf`.
pub fn offer_letter_filename(candidate_name: &str) -> String {
    format!("OfferLetter_{}.pdf", sanitize_download_name(candidate_name))
}

/// ASCII-only rendition for the plain `filename=` parameter.
pub fn ascii_fallback(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
        .collect()
}
