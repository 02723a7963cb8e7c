use regex::Regex;

lazy_static::lazy_static! {
    /// Exactly one `.` with a non-empty segment on each side.
    pub static ref NODE_TYPE_RE: Regex = Regex::new(r"^[^.]+\.[^.]+$").unwrap();
}

/// Check the raw shape `<package>.<name>` without normalizing first.
pub fn is_valid_node_type_format(node_type: &str) -> bool {
    NODE_TYPE_RE.is_match(node_type)
}
