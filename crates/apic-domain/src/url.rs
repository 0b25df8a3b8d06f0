//! URL joining

/// Join a base URL and a relative path with exactly one `/` between them.
///
/// Any number of trailing separators on `base` and leading separators on
/// `path` collapse into one.
///
/// ```
/// use apic_domain::build_url;
///
/// assert_eq!(build_url("https://api.test/", "/v1/users"), "https://api.test/v1/users");
/// assert_eq!(build_url("https://api.test", "v1/users"), "https://api.test/v1/users");
/// ```
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    let mut url = String::with_capacity(base.len() + path.len() + 1);
    url.push_str(base);
    url.push('/');
    url.push_str(path);
    url
}
