// Shared prompt fragments and prompt-building utilities.
// Each feature that needs completions defines its own prompts.rs alongside it.

/// Closing instruction appended to every advice prompt.
pub const TONE_INSTRUCTION: &str =
    "Ensure that the response is **empathetic, scientifically sound, and actionable**.";

/// Fills `{name}` placeholders in `template` from `values` in a single pass.
///
/// Substituted text is never rescanned, so user input containing braces or
/// placeholder names is emitted literally. Placeholders with no matching
/// value are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
