//! Internal DTD entity declarations.
//!
//! JMdict declares its grammatical categories as general entities in the internal subset
//! (`<!ENTITY v1 "Ichidan verb">`) and references them in text (`<pos>&v1;</pos>`).
use std::collections::HashMap;

const DECLARATION: &str = "<!ENTITY";

/// Collect internal general entity declarations from the content of a `<!DOCTYPE …>`.
///
/// Parameter entities (`<!ENTITY % …>`) and external entities (`SYSTEM`/`PUBLIC`) are ignored,
/// as are declarations inside comments. Later declarations of an existing name are ignored too.
pub fn parse_declarations(doctype: &str) -> HashMap<String, String> {
    let doctype = strip_comments(doctype);
    let mut entities = HashMap::new();
    let mut rest = doctype.as_str();

    while let Some(start) = rest.find(DECLARATION) {
        rest = rest[start + DECLARATION.len()..].trim_start();
        if rest.starts_with('%') {
            continue;
        }

        let name_end = match rest.find(char::is_whitespace) {
            Some(end) => end,
            None => break,
        };
        let name = &rest[..name_end];
        let definition = rest[name_end..].trim_start();

        let quote = match definition.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => continue,
        };
        let value = &definition[1..];
        let value_end = match value.find(quote) {
            Some(end) => end,
            None => break,
        };

        entities
            .entry(name.to_string())
            .or_insert_with(|| value[..value_end].to_string());
        rest = &value[value_end..];
    }

    entities
}

fn strip_comments(doctype: &str) -> String {
    let mut out = String::with_capacity(doctype.len());
    let mut rest = doctype;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find("-->") {
            Some(end) => &rest[start + end + 3..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}
