//! Positional placeholder formatting for translation templates.
//!
//! Templates use `{0}`, `{1}`, ... for arguments and `{{` / `}}` for literal
//! braces. An alignment or format suffix (`{0,5}`, `{0:N2}`) is accepted and
//! ignored. Placeholders without a matching argument stay in the output as
//! written.

/// Substitute positional arguments into `template`.
///
/// # Examples
/// ```
/// use cs2_menu_text::i18n::format_positional;
///
/// assert_eq!(format_positional("Page {0}/{1}", &["2", "5"]), "Page 2/5");
/// assert_eq!(format_positional("{{literal}}", &[] as &[&str]), "{literal}");
/// assert_eq!(format_positional("Missing {3}", &["a"]), "Missing {3}");
/// ```
pub fn format_positional<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().map(|(_, c)| *c) == Some('{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek().map(|(_, c)| *c) == Some('}') => {
                chars.next();
                result.push('}');
            }
            '{' => {
                let Some(end) = template[start..].find('}').map(|offset| start + offset) else {
                    result.push_str(&template[start..]);
                    break;
                };

                let placeholder = &template[start..=end];
                match resolve(&template[start + 1..end], args) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(placeholder),
                }

                while chars.peek().is_some_and(|(idx, _)| *idx <= end) {
                    chars.next();
                }
            }
            other => result.push(other),
        }
    }

    result
}

fn resolve<'a, S: AsRef<str>>(inner: &str, args: &'a [S]) -> Option<&'a str> {
    let index = inner.split([',', ':']).next().unwrap_or("").trim();
    let index: usize = index.parse().ok()?;
    args.get(index).map(|arg| arg.as_ref())
}
