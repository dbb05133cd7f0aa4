//! Type name manipulation.
//!
//! Type names are absolute `/`-separated paths (`/base/samples/Frame`).
//! Template arguments may contain `/` themselves (`/std/vector</base/Time>`),
//! so splitting tracks `<`/`>` nesting.

/// Separator between namespace segments.
pub const SEPARATOR: char = '/';

/// Split a type name into its namespace segments.
///
/// Separators nested inside template arguments do not split.
///
/// # Examples
/// ```
/// use typekit_core::names::split_typename;
/// assert_eq!(split_typename("/base/Time"), vec!["base", "Time"]);
/// assert_eq!(
///     split_typename("/std/vector</base/Time>"),
///     vec!["std", "vector</base/Time>"],
/// );
/// ```
pub fn split_typename(name: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in name.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            SEPARATOR if depth == 0 => {
                if i > start {
                    segments.push(&name[start..i]);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < name.len() {
        segments.push(&name[start..]);
    }
    segments
}

/// Last segment of a type name.
pub fn basename(name: &str) -> &str {
    split_typename(name).last().copied().unwrap_or("")
}

/// Namespace of a type name, with leading and trailing separators.
///
/// # Examples
/// ```
/// use typekit_core::names::namespace;
/// assert_eq!(namespace("/base/samples/Frame"), "/base/samples/");
/// assert_eq!(namespace("/double"), "/");
/// ```
pub fn namespace(name: &str) -> String {
    let segments = split_typename(name);
    let mut ns = String::from(SEPARATOR);
    for segment in segments.iter().take(segments.len().saturating_sub(1)) {
        ns.push_str(segment);
        ns.push(SEPARATOR);
    }
    ns
}

/// Whether `name` is an absolute type name with no empty segment.
pub fn is_valid_typename(name: &str) -> bool {
    name.starts_with(SEPARATOR) && name.len() > 1 && !name.ends_with(SEPARATOR)
}

/// Name of a fixed-size array of `element`.
pub fn array_name(element: &str, length: usize) -> String {
    format!("{element}[{length}]")
}

/// Name of a container of kind `kind` holding `element`.
pub fn container_name(kind: &str, element: &str) -> String {
    format!("{kind}<{element}>")
}
