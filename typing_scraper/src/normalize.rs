use once_cell::sync::Lazy;
use regex::Regex;

/// A whitespace run that renders as more than one line break. Every match
/// spans at least three characters and ends in a newline, so replacing it
/// can never loop on a zero-length match.
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n*\s\n*\s\n*\n").expect("BLANK_RUN regex"));

/// Collapse whitespace runs until block boundaries are separated by at most
/// one blank line, then drop the trailing run.
///
/// Collapsing is repeated until stable: a substitution can bring the
/// remainder of a run next to the replacement and form a new match. Each
/// substitution strictly shortens the text, so the loop terminates.
pub fn normalize(text: &str) -> String {
    let mut text = text.to_owned();
    while BLANK_RUN.is_match(&text) {
        text = BLANK_RUN.replace_all(&text, "\n\n").into_owned();
    }

    text.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn collapses_whitespace_runs_to_one_blank_line() {
        assert_eq!(normalize("a\n  \nb"), "a\n\nb");
        assert_eq!(normalize("a\n \n \n \nb"), "a\n\nb");
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn is_idempotent() {
        let messy = "intro\n \n  \n\nbody text\n\t\n\nmore\n  \n";
        let once = normalize(messy);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn never_emits_three_consecutive_newlines() {
        let inputs = [
            "\n\n\n\n\n",
            "a\n\n\n\nb",
            "x \n \n \n y\n\n\n",
            "one\n \t \ntwo\n\n \n\nthree",
        ];
        for input in inputs {
            assert!(!normalize(input).contains("\n\n\n"), "input {:?}", input);
        }
    }

    #[test]
    fn leaves_single_spaces_and_line_breaks_alone() {
        assert_eq!(normalize("Hello World"), "Hello World");
        assert_eq!(normalize("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn trims_the_trailing_run() {
        assert_eq!(normalize("\nHello\n"), "\nHello");
        assert_eq!(normalize("\nHello\n\nWorld\n"), "\nHello\n\nWorld");
    }
}
