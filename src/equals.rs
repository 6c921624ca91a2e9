use std::sync::LazyLock;

use regex::Regex;

use crate::lines::{split_lines, BlockBuffer};
use crate::model::{Assignment, ClassifiedLine};

// Anchored: leading whitespace, a first token, an optional second token,
// then a single `=` and the rest of the line. A line with three or more
// tokens before its `=` fails the match and passes through untouched.
static ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\S+)(\s*)(\S*) *=(.*)$").unwrap());

/// Lines up the `=` signs of a block of assignment statements.
///
/// Two assignment shapes take part: plain `name = value` lines, and
/// declaration-like `prefix name = value` lines. Prefixed lines first get
/// their prefix and name merged into one field, with the gap sized so all
/// names start one column past the widest prefix; after that a single
/// width pass pads every left-hand side to a common width, so both shapes'
/// `=` signs land in the same column. Every other line — no `=`, several
/// `=`, no assignment shape — is reproduced byte-for-byte in place.
///
/// # Example
///
/// ```rust
/// use blockalign::align_equals;
///
/// let output = align_equals("ass=ass;\na = a");
/// assert_eq!(output, "ass = ass;\na   = a");
/// ```
pub fn align_equals(text: &str) -> String {
    let (lines, trailing_newline) = split_lines(text);

    let (entries, max_lhs_pre) = classify_lines(&lines);
    let (entries, max_lhs) = merge_prefixes(entries, max_lhs_pre);

    let mut buffer = BlockBuffer::default();
    for (row, entry) in entries.iter().enumerate() {
        if row > 0 {
            buffer.line_break();
        }
        match entry {
            ClassifiedLine::Passthrough(line) => {
                buffer.add(line);
            }
            ClassifiedLine::Assignment(assignment) => {
                buffer
                    .add(&assignment.leading_whitespace)
                    .add(&assignment.lhs)
                    .spaces(max_lhs - assignment.lhs.chars().count())
                    .add(" = ")
                    .add(&assignment.rhs);
            }
        }
    }
    buffer.into_string(trailing_newline)
}

/// Classifies every line, tracking the widest declaration prefix seen.
fn classify_lines(lines: &[&str]) -> (Vec<ClassifiedLine>, usize) {
    let mut entries = Vec::with_capacity(lines.len());
    let mut max_lhs_pre = 0;
    for line in lines {
        let entry = classify(line);
        if let ClassifiedLine::Assignment(assignment) = &entry {
            max_lhs_pre = max_lhs_pre.max(assignment.lhs_prefix.chars().count());
        }
        entries.push(entry);
    }
    (entries, max_lhs_pre)
}

fn classify(line: &str) -> ClassifiedLine {
    if line.matches('=').count() != 1 {
        return ClassifiedLine::Passthrough(line.to_string());
    }
    let Some(caps) = ASSIGNMENT_RE.captures(line) else {
        return ClassifiedLine::Passthrough(line.to_string());
    };
    let (lhs_prefix, lhs) = if caps[4].is_empty() {
        (String::new(), caps[2].to_string())
    } else {
        (caps[2].to_string(), caps[4].to_string())
    };
    ClassifiedLine::Assignment(Assignment {
        leading_whitespace: caps[1].to_string(),
        lhs_prefix,
        lhs,
        rhs: caps[5].trim().to_string(),
    })
}

/// Folds each declaration prefix into its name, producing new entries, and
/// returns them with the widest merged left-hand side.
///
/// The gap after a prefix is `max_lhs_pre - prefix_width + 1` spaces: names
/// start one column past the widest prefix, so the longest prefix still gets
/// a single separating space.
fn merge_prefixes(
    entries: Vec<ClassifiedLine>,
    max_lhs_pre: usize,
) -> (Vec<ClassifiedLine>, usize) {
    let mut merged = Vec::with_capacity(entries.len());
    let mut max_lhs = 0;
    for entry in entries {
        let entry = match entry {
            ClassifiedLine::Assignment(assignment) if !assignment.lhs_prefix.is_empty() => {
                let gap = max_lhs_pre - assignment.lhs_prefix.chars().count() + 1;
                let lhs = format!(
                    "{}{}{}",
                    assignment.lhs_prefix,
                    " ".repeat(gap),
                    assignment.lhs
                );
                ClassifiedLine::Assignment(Assignment {
                    lhs_prefix: String::new(),
                    lhs,
                    ..assignment
                })
            }
            other => other,
        };
        if let ClassifiedLine::Assignment(assignment) = &entry {
            max_lhs = max_lhs.max(assignment.lhs.chars().count());
        }
        merged.push(entry);
    }
    (merged, max_lhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(leading: &str, prefix: &str, lhs: &str, rhs: &str) -> ClassifiedLine {
        ClassifiedLine::Assignment(Assignment {
            leading_whitespace: leading.to_string(),
            lhs_prefix: prefix.to_string(),
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        })
    }

    #[test]
    fn classifies_plain_assignment() {
        assert_eq!(classify("  x = 1;"), assignment("  ", "", "x", "1;"));
        assert_eq!(classify("ass=ass;"), assignment("", "", "ass", "ass;"));
    }

    #[test]
    fn classifies_prefixed_declaration() {
        assert_eq!(
            classify("    int puServerIsUp        = false;"),
            assignment("    ", "int", "puServerIsUp", "false;")
        );
    }

    #[test]
    fn multiple_or_zero_equals_pass_through() {
        assert_eq!(
            classify("if (a == b) { x = 1; }"),
            ClassifiedLine::Passthrough("if (a == b) { x = 1; }".to_string())
        );
        assert_eq!(
            classify("// a comment"),
            ClassifiedLine::Passthrough("// a comment".to_string())
        );
    }

    #[test]
    fn three_tokens_before_equals_pass_through() {
        assert_eq!(
            classify("a b c = 1"),
            ClassifiedLine::Passthrough("a b c = 1".to_string())
        );
    }

    #[test]
    fn mixed_plain_forms_share_one_equals_column() {
        assert_eq!(align_equals("ass=ass;\na = a"), "ass = ass;\na   = a");
    }

    #[test]
    fn dotted_names_align() {
        let input = "PeriodicUpdateWindow.parent = parent;\n\
                     PeriodicUpdateWindow.as = new AnalyticsSuite();";
        let expected = "PeriodicUpdateWindow.parent = parent;\n\
                        PeriodicUpdateWindow.as     = new AnalyticsSuite();";
        assert_eq!(align_equals(input), expected);
    }

    #[test]
    fn longest_prefix_keeps_one_space_before_its_name() {
        let input = "int x = 1;\nString y = 2;";
        assert_eq!(align_equals(input), "int    x = 1;\nString y = 2;");
    }

    #[test]
    fn passthrough_lines_stay_byte_identical_in_place() {
        let input = "x = 1;\n//sdkfljslkjdflsdjfk\ny == 2;\nzz = 3;";
        let output = align_equals(input);
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines[1], "//sdkfljslkjdflsdjfk");
        assert_eq!(lines[2], "y == 2;");
    }

    #[test]
    fn empty_rhs_still_renders_the_equals() {
        assert_eq!(align_equals("x =\nyy = 1"), "x  = \nyy = 1");
    }

    #[test]
    fn trailing_newline_matches_input() {
        assert_eq!(align_equals("x = 1\ny = 2\n"), "x = 1\ny = 2\n");
        assert_eq!(align_equals("x = 1\ny = 2"), "x = 1\ny = 2");
    }

    #[test]
    fn aligning_twice_changes_nothing() {
        let input = "int x = 1;\nString yy = 2;\n// note\ntotal = 3;\n";
        let once = align_equals(input);
        assert_eq!(align_equals(&once), once);
    }
}
