// File: src/key.rs
// Purpose: Legacy view keys and the `redirect:` directive

/// Joins the parts of a legacy key
pub const KEY_SEPARATOR: char = '.';

/// Marks an evaluated view path as a client redirect
pub const REDIRECT_PREFIX: &str = "redirect:";

/// Builds `<component>.<logic>.<result>`.
///
/// Names are joined as given; a name that itself contains `.` yields an
/// ambiguous key.
pub fn legacy_key(component: &str, logic: &str, result: &str) -> String {
    let mut key = String::with_capacity(component.len() + logic.len() + result.len() + 2);
    key.push_str(component);
    key.push(KEY_SEPARATOR);
    key.push_str(logic);
    key.push(KEY_SEPARATOR);
    key.push_str(result);
    key
}

/// What an evaluated view path asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Client redirect to the path with the prefix stripped
    Redirect(&'a str),
    /// Server-side forward to the whole path
    Forward(&'a str),
}

impl<'a> Directive<'a> {
    pub fn parse(evaluated: &'a str) -> Self {
        match evaluated.strip_prefix(REDIRECT_PREFIX) {
            Some(location) => Directive::Redirect(location),
            None => Directive::Forward(evaluated),
        }
    }
}
