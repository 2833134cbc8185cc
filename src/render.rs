//! Swift source rendering for the generated module.

use crate::error::GenerateError;
use crate::model::{DelimiterPolicy, GeneratedModule};
use std::path::Path;

/// Header written at the top of every generated file
pub const HEADER: &str = "//\n//  Generated code do not edit\n//\n";

const INDENT: &str = "    ";
const QUOTES: &str = "\"\"\"";

/// Render the complete module text.
///
/// The file ends with the closing brace and no trailing newline.
pub fn render_module(module: &GeneratedModule) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');
    output.push_str(&format!(
        "{} {} {{\n",
        module.container.as_ref(),
        module.name
    ));

    for entry in &module.entries {
        output.push_str(&format!(
            "{INDENT}static let {} = {}\n",
            entry.identifier, entry.value
        ));
    }

    output.push('}');
    output
}

/// Embed `content` as a Swift multi-line string literal.
///
/// Content free of `"""` and `\` is emitted as a plain literal, byte for byte.
/// Anything else either gets the shortest `#` run that keeps it literal inside
/// a raw string, or is rejected, depending on `policy`.
pub fn string_literal(
    content: &str,
    policy: DelimiterPolicy,
    path: &Path,
) -> Result<String, GenerateError> {
    let hazard = if content.contains(QUOTES) {
        Some(QUOTES)
    } else if content.contains('\\') {
        Some("\\")
    } else {
        None
    };

    let hashes = match (hazard, policy) {
        (None, _) => String::new(),
        (Some(found), DelimiterPolicy::Reject) => {
            return Err(GenerateError::DelimiterConflict {
                path: path.to_path_buf(),
                found,
            });
        }
        (Some(_), DelimiterPolicy::Raw) => raw_hashes(content),
    };

    Ok(format!("{hashes}{QUOTES}\n{content}\n{QUOTES}{hashes}"))
}

/// Shortest run of `#` such that neither the closing delimiter nor an escape
/// sequence of that raw level occurs in `content`.
fn raw_hashes(content: &str) -> String {
    let mut hashes = String::from("#");
    loop {
        let closes = content.contains(&format!("{QUOTES}{hashes}"));
        let escapes = content.contains(&format!("\\{hashes}"));
        if !closes && !escapes {
            return hashes;
        }
        hashes.push('#');
    }
}
