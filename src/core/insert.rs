use crate::core::render::SECTION_MARKER;
use crate::domain::model::PageOutcome;

const MAIN_CLOSE: &str = "</main>";
const FOOTER_OPEN: &str = "<footer";

/// Result of splicing a fragment into a page. `content` is only set when
/// the page changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub outcome: PageOutcome,
    pub content: Option<String>,
}

impl Insertion {
    fn unchanged(outcome: PageOutcome) -> Self {
        Self {
            outcome,
            content: None,
        }
    }
}

pub fn has_section(content: &str) -> bool {
    content.contains(SECTION_MARKER)
}

/// Byte offset where the fragment goes: before the first `</main>`, else
/// before the whitespace leading into the first `<footer`.
pub fn insertion_point(content: &str) -> Option<usize> {
    if let Some(idx) = content.find(MAIN_CLOSE) {
        return Some(idx);
    }

    content
        .find(FOOTER_OPEN)
        .map(|idx| content[..idx].trim_end().len())
}

pub fn insert_fragment(content: &str, fragment: &str) -> Insertion {
    if has_section(content) {
        return Insertion::unchanged(PageOutcome::AlreadyPresent);
    }

    if fragment.is_empty() {
        return Insertion::unchanged(PageOutcome::NoRelatedServices);
    }

    let Some(at) = insertion_point(content) else {
        return Insertion::unchanged(PageOutcome::NoInsertionPoint);
    };

    let mut updated = String::with_capacity(content.len() + fragment.len());
    updated.push_str(&content[..at]);
    updated.push_str(fragment);
    updated.push_str(&content[at..]);

    Insertion {
        outcome: PageOutcome::Added,
        content: Some(updated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = "<section>Other Locksmith Services in Welland</section>";

    #[test]
    fn test_inserts_before_first_main_close() {
        let page = "<header>h</header><main>body</main><footer>f</footer><main>x</main>";
        let result = insert_fragment(page, FRAGMENT);

        assert_eq!(result.outcome, PageOutcome::Added);
        let content = result.content.unwrap();
        assert_eq!(
            content,
            format!(
                "<header>h</header><main>body{}</main><footer>f</footer><main>x</main>",
                FRAGMENT
            )
        );
        assert_eq!(content.matches(FRAGMENT).count(), 1);
    }

    #[test]
    fn test_falls_back_to_footer_keeping_whitespace() {
        let page = "<body>\n  <div>x</div>\n\n    <footer class=\"site\">f</footer>\n</body>";
        let result = insert_fragment(page, FRAGMENT);

        assert_eq!(result.outcome, PageOutcome::Added);
        assert_eq!(
            result.content.unwrap(),
            format!(
                "<body>\n  <div>x</div>{}\n\n    <footer class=\"site\">f</footer>\n</body>",
                FRAGMENT
            )
        );
    }

    #[test]
    fn test_footer_at_start_of_page() {
        let page = "<footer>f</footer>";
        let result = insert_fragment(page, FRAGMENT);
        assert_eq!(result.content.unwrap(), format!("{}<footer>f</footer>", FRAGMENT));
    }

    #[test]
    fn test_no_anchor_leaves_page_alone() {
        let result = insert_fragment("<body><div>no anchors</div></body>", FRAGMENT);
        assert_eq!(result.outcome, PageOutcome::NoInsertionPoint);
        assert!(result.content.is_none());
    }

    #[test]
    fn test_marker_wins_over_everything() {
        let page = "<main><h2>Other Locksmith Services in Thorold</h2></main>";
        let result = insert_fragment(page, FRAGMENT);
        assert_eq!(result.outcome, PageOutcome::AlreadyPresent);

        let result = insert_fragment(page, "");
        assert_eq!(result.outcome, PageOutcome::AlreadyPresent);
    }

    #[test]
    fn test_empty_fragment_is_a_no_op() {
        let result = insert_fragment("<main></main>", "");
        assert_eq!(result.outcome, PageOutcome::NoRelatedServices);
        assert!(result.content.is_none());
    }
}
