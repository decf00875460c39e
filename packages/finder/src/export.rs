//! Export encoders for search results.
//!
//! Pure functions over a result snapshot; writing the bytes anywhere is
//! the caller's business. Callers are expected to skip export entirely
//! when there are no results, and both encoders return empty bytes in
//! that case.

use regex::Regex;

use crate::error::Result;
use crate::types::profile::BusinessProfile;

/// Column headers, in emit order.
const CSV_HEADERS: &str = "Name,Address,Phone,Email,Website,About,Owner,Rating,Map URL";

/// Encode profiles as CSV bytes.
///
/// Output is UTF-8 with a leading BOM so spreadsheet tools detect the
/// encoding. Every field except the rating is double-quoted with
/// embedded quotes doubled, and an unset value encodes as `""`. The
/// rating cell is the bare numeric value (integral ratings print
/// without a decimal point); unset and zero ratings encode as an empty
/// cell. Rows are newline-joined with no trailing newline.
pub fn to_csv(profiles: &[BusinessProfile]) -> Vec<u8> {
    if profiles.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(profiles.len() + 1);
    lines.push(CSV_HEADERS.to_string());

    for profile in profiles {
        let row = [
            quote(Some(&profile.name)),
            quote(profile.address.as_deref()),
            quote(profile.phone.as_deref()),
            quote(profile.email.as_deref()),
            quote(profile.website.as_deref()),
            quote(profile.about.as_deref()),
            quote(profile.owner.as_deref()),
            rating_cell(profile.rating),
            quote(profile.map_url.as_deref()),
        ];
        lines.push(row.join(","));
    }

    format!("\u{feff}{}", lines.join("\n")).into_bytes()
}

/// Encode profiles as pretty-printed JSON bytes.
///
/// Two-space indent, record order and declared key order preserved,
/// unset fields omitted. Empty input yields empty bytes without
/// invoking the serializer.
pub fn to_json(profiles: &[BusinessProfile]) -> Result<Vec<u8>> {
    if profiles.is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::to_vec_pretty(profiles)?)
}

/// Build the export filename for a search, e.g.
/// `businesses_Coffee_Shops_Portland,_OR.csv`.
///
/// Whitespace runs in the category and region are collapsed to single
/// underscores; other characters pass through untouched.
pub fn export_filename(category: &str, region: &str, ext: &str) -> String {
    format!(
        "businesses_{}_{}.{}",
        sanitize(category),
        sanitize(region),
        ext
    )
}

fn sanitize(part: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(part, "_").into_owned()
}

fn quote(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{}\"", value.replace('"', "\"\"")),
        None => "\"\"".to_string(),
    }
}

fn rating_cell(rating: Option<f64>) -> String {
    match rating {
        Some(rating) if rating != 0.0 => rating.to_string(),
        _ => String::new(),
    }
}
