//! Renders a [`Solution`] for terminals and browsers.
//!
//! Formatters only ever inspect `(left, right, source)` of each row. The one
//! non-obvious case is a `=` row whose panes still differ: that is a
//! whitespace-only change and gets its own styling instead of being shown as
//! a remove/add pair of identical-looking lines.

use std::fmt::Write;

use html_escape::encode_text;
use nu_ansi_term::Color;

use crate::diff_line;
use crate::solution::{LineSource, Solution};

/// Lines this far from the nearest change get bucketed together so the
/// browser view can collapse them. One extra bucket marks lines to hide.
const MAX_CONTEXT: i64 = 10 + 1;

/// Renders the solution as a colored unified listing for terminals:
/// unchanged rows print with a leading space, deletions as red `-` lines and
/// additions as green `+` lines. An edited pair renders as its deletion
/// followed by its addition.
pub fn colored_text(solution: &Solution) -> String {
    let mut buf = String::new();
    for line in solution.lines() {
        if line.source == LineSource::FromBoth && line.left == line.right {
            writeln!(buf, " {} ", line.left).unwrap();
            continue;
        }
        if !line.left.is_empty() {
            writeln!(buf, "{}", Color::Red.paint(format!("-{}", line.left))).unwrap();
        }
        if !line.right.is_empty() {
            writeln!(buf, "{}", Color::Green.paint(format!("+{}", line.right))).unwrap();
        }
    }
    buf
}

/// Same shape as [`colored_text`] without the escape codes, for piping and
/// tests.
pub fn plain_text(solution: &Solution) -> String {
    let mut buf = String::new();
    for line in solution.lines() {
        if line.source == LineSource::FromBoth && line.left == line.right {
            writeln!(buf, " {} ", line.left).unwrap();
            continue;
        }
        if !line.left.is_empty() {
            writeln!(buf, "-{}", line.left).unwrap();
        }
        if !line.right.is_empty() {
            writeln!(buf, "+{}", line.right).unwrap();
        }
    }
    buf
}

fn div(out: &mut String, classes: &str, contents: &str) {
    out.push_str("<div class='");
    out.push_str(classes);
    out.push_str("'>");
    out.push_str(&encode_text(contents));
    out.push_str("</div>\n");
}

fn div_raw(out: &mut String, classes: &str, contents: &str) {
    out.push_str("<div class='");
    out.push_str(classes);
    out.push_str("'>");
    out.push_str(contents);
    out.push_str("</div>\n");
}

fn div_number(out: &mut String, classes: &str, number: usize) {
    writeln!(out, "<div class='{classes}'>{number}</div>").unwrap();
}

fn span(out: &mut String, classes: &str, contents: &str) {
    out.push_str("<span class='");
    out.push_str(classes);
    out.push_str("'>");
    out.push_str(&encode_text(contents));
    out.push_str("</span>");
}

/// Renders a word-level solution (see [`diff_line`]) into a before and an
/// after string. Words are emitted one at a time and changed words are
/// wrapped in `w-add` / `w-del` / `w-edit` spans.
pub fn html_line(solution: &Solution) -> (String, String) {
    let mut a = String::new();
    let mut b = String::new();
    for word in solution.lines() {
        match word.source {
            LineSource::FromA => {
                span(&mut a, "w-add", word.left);
                span(&mut b, "w-del", "");
            }
            LineSource::FromB => {
                span(&mut a, "w-del", "");
                span(&mut b, "w-add", word.right);
            }
            LineSource::FromBothEdit => {
                span(&mut a, "w-edit", word.left);
                span(&mut b, "w-edit", word.right);
            }
            LineSource::FromBoth => {
                a.push_str(&encode_text(word.left));
                b.push_str(&encode_text(word.right));
            }
            LineSource::Unknown => {}
        }
    }
    (a, b)
}

/// Builds the side-by-side browser view: a gutter and a content pane per
/// side.
///
/// Every row carries an `lc-{n}` class with its distance to the closest
/// change (`lc--1` for rows far enough from any change to hide), which is
/// what lets the GUI collapse long unchanged stretches without re-walking
/// the solution. Edited pairs are refined with [`diff_line`] and fall back to
/// whole-line text when the word diff refuses the input.
pub fn html(solution: &Solution) -> String {
    let lines = solution.lines();

    // distance to the *next* changed row, capped at MAX_CONTEXT
    let mut next_change = vec![0i64; lines.len()];
    let mut last_changed = lines.len() as i64 + 10;
    for (i, line) in lines.iter().enumerate().rev() {
        match line.source {
            LineSource::FromA | LineSource::FromB | LineSource::FromBothEdit => {
                last_changed = i as i64;
            }
            LineSource::FromBoth if line.left != line.right => last_changed = i as i64,
            _ => {}
        }
        next_change[i] = (last_changed - i as i64).min(MAX_CONTEXT);
    }

    let (mut li, mut ri) = (0usize, 0usize);
    let mut lg = String::from("<div id='gutter-left' class='gutter'>\n");
    let mut rg = String::from("<div id='gutter-right' class='gutter'>\n");
    let mut lb =
        String::from("<div id='diff-left' class='diff-pane'><div class='diff-pane-contents'>\n");
    let mut rb =
        String::from("<div id='diff-right' class='diff-pane'><div class='diff-pane-contents'>\n");
    let mut last_changed = -MAX_CONTEXT;

    for (i, line) in lines.iter().enumerate() {
        // distance to the *previous* change; the closest change in either
        // direction decides how the row is bucketed
        let mut closest_change = 0;
        if line.source == LineSource::FromBoth && line.left == line.right {
            closest_change = (i as i64 - last_changed).min(next_change[i]);
            if closest_change == MAX_CONTEXT {
                closest_change = -1;
            }
        } else {
            last_changed = i as i64;
        }
        let lc = format!("lc-{closest_change} line ");

        match line.source {
            LineSource::FromA => {
                li += 1;
                div_number(&mut lg, &format!("{lc}la"), li);
                div(&mut rg, &lc, "");
                div(&mut lb, &format!("{lc}la"), line.left);
                div(&mut rb, &lc, "");
            }
            LineSource::FromB => {
                ri += 1;
                div(&mut lg, &lc, "");
                div_number(&mut rg, &format!("{lc}la"), ri);
                div(&mut lb, &lc, "");
                div(&mut rb, &format!("{lc}la"), line.right);
            }
            LineSource::FromBothEdit => {
                li += 1;
                ri += 1;
                let (left, right) = match diff_line(line.left, line.right) {
                    Some(words) => html_line(&words),
                    None => (
                        encode_text(line.left).into_owned(),
                        encode_text(line.right).into_owned(),
                    ),
                };
                div_number(&mut lg, &format!("{lc}ln"), li);
                div_number(&mut rg, &format!("{lc}ln"), ri);
                div_raw(&mut lb, &format!("{lc}ln"), &left);
                div_raw(&mut rb, &format!("{lc}ln"), &right);
            }
            LineSource::FromBoth if line.left != line.right => {
                li += 1;
                ri += 1;
                div_number(&mut lg, &format!("{lc}line-ws"), li);
                div_number(&mut rg, &format!("{lc}line-ws"), ri);
                div(&mut lb, &format!("{lc}line-ws"), line.left);
                div(&mut rb, &format!("{lc}line-ws"), line.right);
            }
            LineSource::FromBoth => {
                li += 1;
                ri += 1;
                div_number(&mut lg, &format!("{lc}lm"), li);
                div_number(&mut rg, &format!("{lc}lm"), ri);
                div(&mut lb, &format!("{lc}lm"), line.left);
                div(&mut rb, &format!("{lc}lm"), line.right);
            }
            LineSource::Unknown => {}
        }
    }

    lg.push_str("</div>");
    rg.push_str("</div>");
    lb.push_str("</div></div>");
    rb.push_str("</div></div>");
    let lb = lb.replace('\t', "<span class='delta-tab'>\t</span>");
    let rb = rb.replace('\t', "<span class='delta-tab'>\t</span>");

    if li == 0 {
        return rg + &rb;
    }
    if ri == 0 {
        return lg + &lb;
    }
    lg + &lb + &rg + &rb
}
