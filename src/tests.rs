use expect_test::{expect, Expect};
use proptest::prelude::*;

use crate::{diff_line, diff_sequence, diff_text, LineSource, Solution};

fn render(solution: &Solution) -> String {
    solution
        .lines()
        .iter()
        .map(|line| format!("{} [{}|{}]\n", line.source.as_str(), line.left, line.right))
        .collect()
}

fn check(solution: &Solution, expected: Expect) {
    expected.assert_eq(&render(solution));
}

#[test]
fn addition() {
    check(
        &diff_text("aaa\nccc", "aaa\nbbb\nccc"),
        expect![[r#"
            = [aaa|aaa]
            > [|bbb]
            = [ccc|ccc]
        "#]],
    );
}

#[test]
fn change() {
    check(
        &diff_text("aaa\nbbb\nccc", "aaa\nddd\nccc"),
        expect![[r#"
            = [aaa|aaa]
            ~ [bbb|ddd]
            = [ccc|ccc]
        "#]],
    );
}

#[test]
fn transposition() {
    // the histogram engine anchors on `aaa` and `ccc` and keeps `bbb` as a
    // delete/re-add pair around the second anchor
    check(
        &diff_text("aaa\nbbb\nccc", "aaa\nccc\nbbb"),
        expect![[r#"
            = [aaa|aaa]
            < [bbb|]
            = [ccc|ccc]
            > [|bbb]
        "#]],
    );
    // the plain aligner resolves the same tie the other way around: on equal
    // scores the later candidate wins, so skipping B beats skipping A
    check(
        &diff_sequence("aaa\nbbb\nccc", "aaa\nccc\nbbb"),
        expect![[r#"
            = [aaa|aaa]
            > [|ccc]
            = [bbb|bbb]
            < [ccc|]
        "#]],
    );
}

#[test]
fn identical_inputs() {
    let text = "fn main() {\n    println!(\"hi\");\n}";
    check(
        &diff_text(text, text),
        expect![[r#"
            = [fn main() {|fn main() {]
            = [    println!("hi");|    println!("hi");]
            = [}|}]
        "#]],
    );
}

#[test]
fn empty_pre_image() {
    check(
        &diff_text("", "x\ny"),
        expect![[r#"
            > [|x]
            > [|y]
        "#]],
    );
}

#[test]
fn empty_post_image() {
    check(
        &diff_text("x\ny", ""),
        expect![[r#"
            < [x|]
            < [y|]
        "#]],
    );
}

#[test]
fn both_empty() {
    // the post-image fast path is checked first, so the single blank row of
    // an empty document comes out as an addition
    check(
        &diff_text("", ""),
        expect![[r#"
            > [|]
        "#]],
    );
}

#[test]
fn trailing_newline_only_on_one_side() {
    check(
        &diff_text("a\n", "a"),
        expect![[r#"
            = [a|a]
            < [|]
        "#]],
    );
    check(
        &diff_text("a", "a\n"),
        expect![[r#"
            = [a|a]
            > [|]
        "#]],
    );
}

#[test]
fn carriage_returns_are_line_content() {
    let solution = diff_text("a\r\nb", "a\nb");
    // trimmed comparison matches the lines up, but the panes keep the `\r`
    assert_eq!(solution.len(), 2);
    assert_eq!(solution.lines()[0].source, LineSource::FromBoth);
    assert_eq!(solution.lines()[0].left, "a\r");
    assert_eq!(solution.lines()[0].right, "a\r");
}

#[test]
fn whitespace_only_change_stays_a_match() {
    check(
        &diff_sequence("  a\nb", "a\nb"),
        expect![[r#"
            = [  a|a]
            = [b|b]
        "#]],
    );
}

#[test]
fn anchors_repeat_the_pre_image_text() {
    // `  mid` and `mid  ` are trimmed-equal and land inside a matched region,
    // whose rows always carry the pre-image text on both panes
    check(
        &diff_text("x\n  mid\ny", "x\nmid  \ny"),
        expect![[r#"
            = [x|x]
            = [  mid|  mid]
            = [y|y]
        "#]],
    );
}

#[test]
fn blank_gap_line_is_absorbed() {
    // a gap that is exactly one blank pre-image line takes the empty-document
    // fast path, so the blank line is folded into the addition run
    check(
        &diff_text("x\n\nz", "x\nq\nr\nz"),
        expect![[r#"
            = [x|x]
            > [|q]
            > [|r]
            = [z|z]
        "#]],
    );
}

#[test]
fn word_diff() {
    check(
        &diff_line("the quick fox", "the slow fox").unwrap(),
        expect![[r#"
            = [the |the ]
            ~ [quick |slow ]
            = [fox|fox]
        "#]],
    );
}

#[test]
fn word_diff_refuses_pathological_input() {
    // 10_001 one-character words per side put the score matrix over the cap
    let a = "+".repeat(10_001);
    let b = "+".repeat(10_001);
    assert!(diff_line(&a, &b).is_none());
    assert!(diff_line(&a, "short").is_some());
}

fn sides(solution: &Solution) -> (Vec<String>, Vec<String>) {
    let lefts = solution
        .lines()
        .iter()
        .filter(|line| {
            matches!(
                line.source,
                LineSource::FromA | LineSource::FromBoth | LineSource::FromBothEdit
            )
        })
        .map(|line| line.left.to_owned())
        .collect();
    let rights = solution
        .lines()
        .iter()
        .filter(|line| {
            matches!(
                line.source,
                LineSource::FromB | LineSource::FromBoth | LineSource::FromBothEdit
            )
        })
        .map(|line| line.right.to_owned())
        .collect();
    (lefts, rights)
}

proptest! {
    #[test]
    fn text_diff_reconstructs_both_sides(
        a_lines in prop::collection::vec("[ab]{1,3}", 1..8),
        b_lines in prop::collection::vec("[ab]{1,3}", 1..8),
    ) {
        let a = a_lines.join("\n");
        let b = b_lines.join("\n");
        let solution = diff_text(&a, &b);

        prop_assert!(solution.len() >= a_lines.len().max(b_lines.len()));
        prop_assert!(solution.len() <= a_lines.len() + b_lines.len());

        let (lefts, rights) = sides(&solution);
        prop_assert_eq!(lefts, a_lines);
        prop_assert_eq!(rights, b_lines);

        for line in solution.lines() {
            if line.source == LineSource::FromBoth {
                prop_assert_eq!(line.left.trim(), line.right.trim());
            }
        }
    }

    #[test]
    fn sequence_diff_reconstructs_both_sides(
        a_lines in prop::collection::vec("[ab ]{1,3}", 1..8),
        b_lines in prop::collection::vec("[ab ]{1,3}", 1..8),
    ) {
        let a = a_lines.join("\n");
        let b = b_lines.join("\n");
        let solution = diff_sequence(&a, &b);

        prop_assert!(solution.len() >= a_lines.len().max(b_lines.len()));
        prop_assert!(solution.len() <= a_lines.len() + b_lines.len());

        let (lefts, rights) = sides(&solution);
        prop_assert_eq!(lefts, a_lines);
        prop_assert_eq!(rights, b_lines);

        for line in solution.lines() {
            if line.source == LineSource::FromBoth {
                prop_assert_eq!(line.left.trim(), line.right.trim());
            }
        }
    }

    #[test]
    fn identical_inputs_only_match(lines in prop::collection::vec("[ab]{1,3}", 1..8)) {
        let text = lines.join("\n");
        let solution = diff_text(&text, &text);
        prop_assert_eq!(solution.len(), lines.len());
        for line in solution.lines() {
            prop_assert_eq!(line.source, LineSource::FromBoth);
            prop_assert_eq!(line.left, line.right);
        }
    }
}

#[cfg(feature = "formatter")]
mod formatter {
    use crate::formatter::{colored_text, html, html_line, plain_text};
    use crate::{diff_line, diff_text};

    #[test]
    fn text_output() {
        let solution = diff_text("aaa\nbbb\nccc", "aaa\nddd\nccc");
        assert_eq!(plain_text(&solution), " aaa \n-bbb\n+ddd\n ccc \n");

        let colored = colored_text(&solution);
        assert!(colored.contains("\u{1b}[31m-bbb\u{1b}[0m\n"));
        assert!(colored.contains("\u{1b}[32m+ddd\u{1b}[0m\n"));
    }

    #[test]
    fn whitespace_mismatch_renders_as_remove_add() {
        let solution = crate::diff_sequence("  a", "a");
        assert_eq!(plain_text(&solution), "-  a\n+a\n");
    }

    #[test]
    fn html_panes_and_gutters() {
        let page = html(&diff_text("aaa\nccc", "aaa\nbbb\nccc"));
        assert!(page.starts_with("<div id='gutter-left' class='gutter'>\n"));
        assert!(page.contains("<div id='diff-left' class='diff-pane'>"));
        assert!(page.contains("<div id='gutter-right' class='gutter'>"));
        assert!(page.contains("<div id='diff-right' class='diff-pane'>"));
        // the addition only advances the right line numbers
        assert!(page.contains("<div class='lc-0 line la'>bbb</div>"));
        assert!(page.contains("<div class='lc-0 line '></div>"));
        assert!(page.contains("<div class='lc-1 line lm'>aaa</div>"));
    }

    #[test]
    fn html_escapes_content() {
        let page = html(&diff_text("<b>&</b>", "<b>&</b>"));
        assert!(page.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!page.contains("<b>"));
    }

    #[test]
    fn html_one_sided_diff_renders_one_pane() {
        let page = html(&diff_text("", "only\nadded"));
        assert!(page.starts_with("<div id='gutter-right' class='gutter'>\n"));
        assert!(!page.contains("<div id='diff-left'"));
    }

    #[test]
    fn html_wraps_tabs() {
        let page = html(&diff_text("\tx", "\tx"));
        assert!(page.contains("<span class='delta-tab'>\t</span>x"));
    }

    #[test]
    fn html_word_spans() {
        let words = diff_line("foo bar", "foo baz").unwrap();
        let (left, right) = html_line(&words);
        assert_eq!(left, "foo <span class='w-edit'>bar</span>");
        assert_eq!(right, "foo <span class='w-edit'>baz</span>");
    }
}
