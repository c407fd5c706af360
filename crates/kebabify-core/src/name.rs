//! Name normalisation: kebab-case conversion and vendor prefix stripping.
//!
//! Everything here is a pure `&str -> String` function. No I/O.

use std::sync::LazyLock;

use regex::Regex;

/// A lowercase ASCII letter immediately followed by an uppercase one.
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));

/// Runs of whitespace, underscores and plus signs.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_+]+").expect("valid regex"));

/// Anything outside `[A-Za-z0-9_-]`.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid regex"));

static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

static EDGE_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-|-$").expect("valid regex"));

/// Numeric icon-service prefix found on vendor icon file names, e.g. `10-icon-service-`.
static VENDOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9]+-icon-service-").expect("valid regex"));

/// Converts `input` to kebab-case.
///
/// The steps run in a fixed order, each on the previous result:
///
/// 1. split camelCase boundaries (`fooBar` -> `foo-Bar`)
/// 2. collapse whitespace, `_` and `+` runs into `-`
/// 3. drop every character outside `[A-Za-z0-9_-]`
/// 4. lowercase
/// 5. collapse repeated hyphens
/// 6. trim one leading and one trailing hyphen
///
/// The result may be empty when nothing in `input` survives step 3.
///
/// # Examples
///
/// ```
/// use kebabify_core::kebab_case;
///
/// assert_eq!(kebab_case("Virtual_Machines"), "virtual-machines");
/// assert_eq!(kebab_case("storageAccounts (Classic)"), "storage-accounts-classic");
/// ```
pub fn kebab_case(input: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(input, "${1}-${2}");
    let hyphenated = SEPARATOR_RUN.replace_all(&split, "-");
    let retained = DISALLOWED.replace_all(&hyphenated, "");
    let lowered = retained.to_ascii_lowercase();
    let collapsed = HYPHEN_RUN.replace_all(&lowered, "-");
    EDGE_HYPHEN.replace_all(&collapsed, "").into_owned()
}

/// Splits a file name at its last `.` into `(stem, extension)`.
///
/// The extension keeps its dot. A name without a dot is all stem and the
/// extension is empty.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Removes a leading vendor prefix (`<digits>-icon-service-`, any case) from `stem`.
pub fn strip_vendor_prefix(stem: &str) -> &str {
    match VENDOR_PREFIX.find(stem) {
        Some(m) => &stem[m.end()..],
        None => stem,
    }
}

/// Normalises a file name: strips the vendor prefix, kebab-cases the stem and
/// re-appends the original extension untouched.
///
/// ```
/// use kebabify_core::transform_file_name;
///
/// assert_eq!(
///     transform_file_name("10-icon-service-Storage-Accounts.svg"),
///     "storage-accounts.svg"
/// );
/// ```
pub fn transform_file_name(name: &str) -> String {
    let (stem, extension) = split_extension(name);
    let mut out = kebab_case(strip_vendor_prefix(stem));
    out.push_str(extension);
    out
}

/// Normalises a directory name. Plain kebab-case, no prefix or extension handling.
pub fn transform_directory_name(name: &str) -> String {
    kebab_case(name)
}
