//! 3D structure viewer model: where to fetch the precomputed structure and
//! how to color it by prediction confidence.

/// Public bucket holding the precomputed dsDNA structures.
pub const STRUCTURE_BASE_URL: &str =
    "https://origin-workbench-public-3dstructures.s3.us-east-2.amazonaws.com/protenix-dsdna-3dstructures";

/// CIF URL for a sequence id, with the id percent-encoded.
pub fn structure_url(sequence_id: &str) -> String {
    format!(
        "{}/{}.cif",
        STRUCTURE_BASE_URL,
        percent_encode(sequence_id)
    )
}

/// RFC 3986 unreserved characters pass through; everything else is encoded.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// pLDDT confidence banding. The structure pipeline stores pLDDT in the
/// B-factor column, so this maps B-factor to a display color.
pub fn plddt_color(b_factor: f64) -> &'static str {
    if b_factor > 90.0 {
        "#1e40af" // very high confidence
    } else if b_factor > 70.0 {
        "#60a5fa" // confident
    } else if b_factor > 50.0 {
        "#fbbf24" // low confidence
    } else {
        "#f97316" // very low confidence
    }
}

// Viewer presentation
pub const CARTOON_THICKNESS: f64 = 0.4;
pub const CARTOON_OPACITY: f64 = 0.9;
pub const STICK_RADIUS: f64 = 0.15;
pub const SPIN_AXIS: &str = "y";
pub const SPIN_SPEED: f64 = 0.4;
pub const ZOOM_INITIAL: f64 = 1.05;
pub const ZOOM_RESET: f64 = 0.9;
