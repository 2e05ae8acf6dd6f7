//! Colour markup for text.
//!
//! Text may switch fill colour mid-string with a tag such as `%#ff0000%`.
//! Any other `%...%` token is a tag that is dropped without changing colour.
//! A literal percent sign is written `\%`.

/// Colour used for text that precedes the first colour tag.
pub const DEFAULT_COLOUR: &str = "#ffffff";

/// A run of visible text painted in a single colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub text: String,
    pub colour: String,
}

impl Instruction {
    fn new(colour: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            colour: colour.into(),
        }
    }
}

enum State {
    Literal,
    Escaped,
    InTag,
}

/// Split marked-up text into coloured runs.
///
/// The returned runs always start with one in [`DEFAULT_COLOUR`], so the
/// first run may be empty. Concatenating every run's text yields
/// [`visible_text`].
pub fn parse(input: &str) -> Vec<Instruction> {
    let mut instructions = vec![Instruction::new(DEFAULT_COLOUR)];
    let mut state = State::Literal;
    let mut tag = String::new();

    for ch in input.chars() {
        state = match state {
            State::Literal => match ch {
                '\\' => State::Escaped,
                '%' => {
                    tag.clear();
                    State::InTag
                }
                _ => {
                    push_text(&mut instructions, ch);
                    State::Literal
                }
            },
            State::Escaped => {
                if ch != '%' {
                    push_text(&mut instructions, '\\');
                }
                push_text(&mut instructions, ch);
                State::Literal
            }
            State::InTag => {
                if ch == '%' {
                    if tag.starts_with('#') {
                        instructions.push(Instruction::new(tag.as_str()));
                    }
                    State::Literal
                } else {
                    tag.push(ch);
                    State::InTag
                }
            }
        };
    }

    // Leftovers at end of input are literal text
    match state {
        State::Literal => {}
        State::Escaped => push_text(&mut instructions, '\\'),
        State::InTag => {
            push_text(&mut instructions, '%');
            for ch in tag.chars() {
                push_text(&mut instructions, ch);
            }
        }
    }

    instructions
}

/// The text that remains once every tag is removed and escapes resolved.
pub fn visible_text(input: &str) -> String {
    parse(input).into_iter().map(|i| i.text).collect()
}

fn push_text(instructions: &mut [Instruction], ch: char) {
    if let Some(last) = instructions.last_mut() {
        last.text.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn runs(input: &str) -> Vec<(String, String)> {
        parse(input)
            .into_iter()
            .map(|i| (i.text, i.colour))
            .collect()
    }

    fn run(text: &str, colour: &str) -> (String, String) {
        (text.to_string(), colour.to_string())
    }

    #[test]
    fn test_plain_text_is_default_colour() {
        assert_eq!(runs("Hello"), vec![run("Hello", "#ffffff")]);
    }

    #[test]
    fn test_colour_switch() {
        assert_eq!(
            runs("Hello %#ff0000%World"),
            vec![run("Hello ", "#ffffff"), run("World", "#ff0000")]
        );
    }

    #[test]
    fn test_single_tag_gives_two_runs() {
        assert_eq!(
            runs("A%#ff0000%B"),
            vec![run("A", "#ffffff"), run("B", "#ff0000")]
        );
    }

    #[test]
    fn test_leading_tag_leaves_empty_default_run() {
        assert_eq!(
            runs("%#00ff00%go%#0000ff80%stop"),
            vec![
                run("", "#ffffff"),
                run("go", "#00ff00"),
                run("stop", "#0000ff80")
            ]
        );
    }

    #[test]
    fn test_escaped_percent_is_literal() {
        assert_eq!(runs(r"100\% done"), vec![run("100% done", "#ffffff")]);
    }

    #[test]
    fn test_escape_hides_following_tag() {
        // The escaped percent is literal, so the next one opens a tag that never closes
        assert_eq!(
            runs(r"A\%#ff0000%B"),
            vec![run("A%#ff0000%B", "#ffffff")]
        );
    }

    #[test]
    fn test_non_colour_tags_are_dropped() {
        assert_eq!(
            runs("a%bold%b%%c"),
            vec![run("abc", "#ffffff")]
        );
    }

    #[rstest]
    #[case("50%", "50%")]
    #[case("x %#ff0000", "x %#ff0000")]
    #[case(r"tail\", r"tail\")]
    #[case(r"a\b", r"a\b")]
    #[case("", "")]
    fn test_visible_text_edge_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(visible_text(input), expected);
    }

    #[test]
    fn test_runs_repartition_visible_text() {
        let input = r"one %#111111%two \% %skip%three %#222222%";
        let joined: String = parse(input).iter().map(|i| i.text.as_str()).collect();
        assert_eq!(joined, "one two % three ");
        assert_eq!(parse(input).last().unwrap().colour, "#222222");
    }
}
