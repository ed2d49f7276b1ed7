// ABOUTME: Markdown helpers used by the presentation shell.
// ABOUTME: Extracts embedded mermaid blocks and strips code fences for display.

/// The opening fence that marks an embedded diagram block.
pub const MERMAID_FENCE: &str = "```mermaid";

/// Split text around the first ` ```mermaid ` fenced block: the text before
/// the opening fence, the diagram body, and the text after the closing
/// fence. Fence lines themselves are not included in any part.
pub fn split_mermaid(text: &str) -> Option<(&str, &str, &str)> {
    let start = text.find(MERMAID_FENCE)?;
    let before = &text[..start];
    let rest = text[start + MERMAID_FENCE.len()..].strip_prefix('\n')?;
    let end = rest.find("\n```")?;
    let after = &rest[end + "\n```".len()..];
    Some((before, &rest[..end], after))
}

/// Return the body of the first ` ```mermaid ` fenced block, if any.
pub fn extract_mermaid(text: &str) -> Option<&str> {
    split_mermaid(text).map(|(_, diagram, _)| diagram)
}

/// Keep only the contents of fenced code blocks, dropping prose and the
/// fence lines. Used to display code-only views of a response.
pub fn strip_code_fences(text: &str) -> String {
    let mut in_code_block = false;
    let mut kept = Vec::new();

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            kept.push(line);
        }
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_mermaid_body() {
        let text = "# Title\n\n```mermaid\ngraph TD\n    A --> B\n```\n\nMore text.";
        let body = extract_mermaid(text).unwrap();
        assert_eq!(body, "graph TD\n    A --> B");
    }

    #[test]
    fn split_keeps_surrounding_text() {
        let text = "# Title\n\n```mermaid\ngraph TD\n    A --> B\n```\n\nMore text.";
        let (before, diagram, after) = split_mermaid(text).unwrap();
        assert_eq!(before, "# Title\n\n");
        assert_eq!(diagram, "graph TD\n    A --> B");
        assert_eq!(after, "\n\nMore text.");
    }

    #[test]
    fn split_with_nothing_after_fence() {
        let text = "```mermaid\ngraph TD\n```";
        let (before, diagram, after) = split_mermaid(text).unwrap();
        assert!(before.is_empty());
        assert_eq!(diagram, "graph TD");
        assert!(after.is_empty());
    }

    #[test]
    fn no_mermaid_block_returns_none() {
        assert!(extract_mermaid("plain markdown with ```python\ncode\n```").is_none());
    }

    #[test]
    fn unterminated_fence_returns_none() {
        assert!(extract_mermaid("```mermaid\ngraph TD").is_none());
    }

    #[test]
    fn strips_prose_keeps_code() {
        let text = "Intro prose.\n```python\nprint('hi')\n```\nOutro prose.";
        assert_eq!(strip_code_fences(text), "print('hi')");
    }

    #[test]
    fn strip_handles_multiple_blocks() {
        let text = "```\nfirst\n```\nbetween\n```\nsecond\n```";
        assert_eq!(strip_code_fences(text), "first\nsecond");
    }

    #[test]
    fn strip_of_plain_text_is_empty() {
        assert_eq!(strip_code_fences("no code here"), "");
    }
}
