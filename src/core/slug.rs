use regex::Regex;

/// Canonical URL slug of a title: lower-case, every maximal run of non-word
/// characters becomes a single hyphen, no leading or trailing hyphen.
pub fn slugify(title: &str) -> String {
    let re = Regex::new(r"[^\w]+").unwrap();
    let lowered = title.to_lowercase();
    re.replace_all(&lowered, "-").trim_matches('-').to_string()
}

/// Season/episode numbers lose their leading zeros in URL segments.
pub fn strip_leading_zeros(value: &str) -> &str {
    value.trim_start_matches('0')
}
