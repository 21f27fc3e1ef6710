//! Width-aware printer for the Doc IR.
//!
//! The printer converts a [`Doc`] into a string by deciding at each `Group`
//! boundary whether to render flat (all on one line) or broken (with line
//! breaks and indentation). It works off an explicit command stack; a
//! group is printed flat when its contents, followed by the rest of the
//! stack up to the next possible line break, fit in the remaining width.

use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use crate::doc::{AlignKind, Doc, LineKind};
use crate::propagate::propagate_breaks;

/// Configuration for the printer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Maximum line width before groups break. Default: 80.
    pub print_width: usize,
    /// Width of one indentation level (and of a tab). Default: 2.
    pub tab_width: usize,
    /// Indent with tabs instead of spaces. Default: false.
    pub use_tabs: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: false,
        }
    }
}

/// Whether the current context is rendering flat or broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Everything on one line; `Line` renders as " " (or nothing if soft).
    Flat,
    /// Line breaks at `Line` positions.
    Break,
}

// ── Indentation ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentPart {
    /// One indentation level (a tab or `tab_width` spaces).
    Level,
    /// A fixed number of spaces.
    Spaces(usize),
}

/// The indentation in effect for a command: rendered prefix, its width, the
/// parts it was built from, and the root that `ToRoot` and literal lines
/// return to.
#[derive(Debug, Clone, Default)]
struct Indentation {
    value: String,
    length: usize,
    queue: Vec<IndentPart>,
    root: Option<Rc<Indentation>>,
}

impl Indentation {
    fn indent(self: &Rc<Self>, options: &PrintOptions) -> Rc<Self> {
        let mut queue = self.queue.clone();
        queue.push(IndentPart::Level);
        Rc::new(self.with_queue(queue, options))
    }

    fn align(self: &Rc<Self>, kind: AlignKind, options: &PrintOptions) -> Rc<Self> {
        match kind {
            AlignKind::ToRoot => self.root.clone().unwrap_or_default(),
            AlignKind::MarkRoot => Rc::new(Indentation {
                root: Some(Rc::clone(self)),
                ..(**self).clone()
            }),
            AlignKind::Width(0) => Rc::clone(self),
            AlignKind::Width(n) if n < 0 => {
                let mut queue = self.queue.clone();
                queue.pop();
                Rc::new(self.with_queue(queue, options))
            }
            AlignKind::Width(n) => {
                let mut queue = self.queue.clone();
                queue.push(IndentPart::Spaces(n.unsigned_abs() as usize));
                Rc::new(self.with_queue(queue, options))
            }
        }
    }

    /// Render `queue` into a new indentation that keeps this one's root.
    ///
    /// Consecutive alignment spaces are merged and emitted as spaces once
    /// the queue ends; when an indentation level follows them and tabs are
    /// in use, each of them becomes one tab instead.
    fn with_queue(&self, queue: Vec<IndentPart>, options: &PrintOptions) -> Indentation {
        let mut value = String::new();
        let mut length = 0;
        let mut pending_aligns = 0;
        let mut pending_spaces = 0;

        let add_tabs = |value: &mut String, length: &mut usize, count: usize| {
            value.push_str(&"\t".repeat(count));
            *length += options.tab_width * count;
        };
        let add_spaces = |value: &mut String, length: &mut usize, count: usize| {
            value.push_str(&" ".repeat(count));
            *length += count;
        };

        for part in &queue {
            match *part {
                IndentPart::Level => {
                    if options.use_tabs {
                        if pending_aligns > 0 {
                            add_tabs(&mut value, &mut length, pending_aligns);
                        }
                    } else if pending_spaces > 0 {
                        add_spaces(&mut value, &mut length, pending_spaces);
                    }
                    pending_aligns = 0;
                    pending_spaces = 0;

                    if options.use_tabs {
                        add_tabs(&mut value, &mut length, 1);
                    } else {
                        add_spaces(&mut value, &mut length, options.tab_width);
                    }
                }
                IndentPart::Spaces(n) => {
                    pending_aligns += 1;
                    pending_spaces += n;
                }
            }
        }
        if pending_spaces > 0 {
            add_spaces(&mut value, &mut length, pending_spaces);
        }

        Indentation {
            value,
            length,
            queue,
            root: self.root.clone(),
        }
    }
}

// ── Commands ────────────────────────────────────────────────────────────

/// What a command prints: a doc, or a borrowed run of parts (the tail of a
/// fill, or adjacent fill parts measured together).
#[derive(Debug, Clone, Copy)]
enum Node<'a> {
    Doc(&'a Doc),
    Concat(&'a [Doc]),
    Fill(&'a [Doc]),
}

/// A command on the printer's work stack.
#[derive(Debug, Clone)]
struct Command<'a> {
    indent: Rc<Indentation>,
    mode: Mode,
    node: Node<'a>,
}

impl<'a> Command<'a> {
    fn new(indent: &Rc<Indentation>, mode: Mode, node: Node<'a>) -> Self {
        Self {
            indent: Rc::clone(indent),
            mode,
            node,
        }
    }

    fn doc(indent: &Rc<Indentation>, mode: Mode, doc: &'a Doc) -> Self {
        Self::new(indent, mode, Node::Doc(doc))
    }
}

static HARD_LINE: Doc = Doc::Line(LineKind::Hard);

// ── Printing ────────────────────────────────────────────────────────────

/// Render a Doc as a string respecting the given options.
///
/// Breaks are propagated first (see [`propagate_breaks`]). The output has no
/// implicit trailing newline.
pub fn print_doc_to_string(doc: &Doc, options: &PrintOptions) -> String {
    let doc = propagate_breaks(doc);
    Printer::new(options).print(&doc)
}

struct Printer<'o> {
    options: &'o PrintOptions,
    out: String,
    /// Display width of the current line.
    pos: usize,
    /// Set after a hard line inside flat content: the enclosing groups
    /// must be measured again.
    should_remeasure: bool,
}

impl<'o> Printer<'o> {
    fn new(options: &'o PrintOptions) -> Self {
        Self {
            options,
            out: String::new(),
            pos: 0,
            should_remeasure: false,
        }
    }

    fn print(mut self, doc: &Doc) -> String {
        let root = Rc::new(Indentation::default());
        let mut cmds = vec![Command::doc(&root, Mode::Break, doc)];
        let mut line_suffix: Vec<Command> = Vec::new();

        while let Some(cmd) = cmds.pop() {
            match cmd.node {
                Node::Concat(parts) => push_parts(&mut cmds, &cmd, parts),
                Node::Fill(parts) => self.print_fill(&mut cmds, &cmd, parts, &line_suffix),
                Node::Doc(doc) => self.print_doc(&mut cmds, &mut line_suffix, &cmd, doc),
            }

            if cmds.is_empty() && !line_suffix.is_empty() {
                cmds.extend(line_suffix.drain(..).rev());
            }
        }

        self.out
    }

    /// Columns left on the current line; widths past `isize::MAX` saturate.
    fn remaining(&self) -> isize {
        let width = isize::try_from(self.options.print_width).unwrap_or(isize::MAX);
        let pos = isize::try_from(self.pos).unwrap_or(isize::MAX);
        width.saturating_sub(pos)
    }

    fn print_doc<'a>(
        &mut self,
        cmds: &mut Vec<Command<'a>>,
        line_suffix: &mut Vec<Command<'a>>,
        cmd: &Command<'a>,
        doc: &'a Doc,
    ) {
        let ind = &cmd.indent;
        match doc {
            Doc::Text(s) => {
                self.out.push_str(s);
                self.pos += s.width();
            }
            Doc::Concat(parts) => push_parts(cmds, cmd, parts),
            Doc::Fill(parts) => self.print_fill(cmds, cmd, parts, line_suffix),
            Doc::Indent(contents) => {
                cmds.push(Command::doc(&ind.indent(self.options), cmd.mode, contents));
            }
            Doc::Align { contents, kind } => {
                cmds.push(Command::doc(&ind.align(*kind, self.options), cmd.mode, contents));
            }
            Doc::Trim => {
                self.pos = self.pos.saturating_sub(trim(&mut self.out));
            }
            Doc::Group {
                contents,
                should_break,
                expanded_states,
            } => {
                if cmd.mode == Mode::Flat && !self.should_remeasure {
                    let mode = if *should_break { Mode::Break } else { Mode::Flat };
                    cmds.push(Command::doc(ind, mode, contents));
                    return;
                }

                self.should_remeasure = false;
                let rem = self.remaining();
                let has_line_suffix = !line_suffix.is_empty();
                let next = Command::doc(ind, Mode::Flat, contents);

                if !*should_break && fits(&next, cmds, rem, has_line_suffix, false) {
                    cmds.push(next);
                    return;
                }

                let Some(states) = expanded_states else {
                    cmds.push(Command::doc(ind, Mode::Break, contents));
                    return;
                };
                let most_expanded = states.last().unwrap_or(&**contents);
                if *should_break {
                    cmds.push(Command::doc(ind, Mode::Break, most_expanded));
                    return;
                }
                for state in states.iter().skip(1) {
                    let cmd = Command::doc(ind, Mode::Flat, state);
                    if fits(&cmd, cmds, rem, has_line_suffix, false) {
                        cmds.push(cmd);
                        return;
                    }
                }
                cmds.push(Command::doc(ind, Mode::Break, most_expanded));
            }
            Doc::IfBreak {
                break_contents,
                flat_contents,
            } => {
                let contents = match cmd.mode {
                    Mode::Break => break_contents,
                    Mode::Flat => flat_contents,
                };
                cmds.push(Command::doc(ind, cmd.mode, contents));
            }
            Doc::LineSuffix(contents) => {
                line_suffix.push(Command::doc(ind, cmd.mode, contents));
            }
            Doc::LineSuffixBoundary => {
                if !line_suffix.is_empty() {
                    cmds.push(Command::doc(ind, cmd.mode, &HARD_LINE));
                }
            }
            Doc::BreakParent => {}
            Doc::Line(kind) => {
                if cmd.mode == Mode::Flat {
                    match kind {
                        LineKind::Normal => {
                            self.out.push(' ');
                            self.pos += 1;
                            return;
                        }
                        LineKind::Soft => return,
                        LineKind::Hard | LineKind::Literal => self.should_remeasure = true,
                    }
                }

                if !line_suffix.is_empty() {
                    cmds.push(cmd.clone());
                    cmds.extend(line_suffix.drain(..).rev());
                    return;
                }

                if *kind == LineKind::Literal {
                    self.out.push('\n');
                    match &ind.root {
                        Some(root) => {
                            self.out.push_str(&root.value);
                            self.pos = root.length;
                        }
                        None => self.pos = 0,
                    }
                } else {
                    trim(&mut self.out);
                    self.out.push('\n');
                    self.out.push_str(&ind.value);
                    self.pos = ind.length;
                }
            }
        }
    }

    /// Print the next content/separator pair of a fill and queue the rest.
    ///
    /// A separator breaks when the content after it would not fit; each
    /// content is printed flat when it fits by itself.
    fn print_fill<'a>(
        &mut self,
        cmds: &mut Vec<Command<'a>>,
        cmd: &Command<'a>,
        parts: &'a [Doc],
        line_suffix: &[Command<'a>],
    ) {
        let ind = &cmd.indent;
        let rem = self.remaining();
        let has_line_suffix = !line_suffix.is_empty();

        let Some(content) = parts.first() else {
            return;
        };
        let content_flat = Command::doc(ind, Mode::Flat, content);
        let content_break = Command::doc(ind, Mode::Break, content);
        let content_fits = fits(&content_flat, &[], rem, has_line_suffix, true);

        let Some(whitespace) = parts.get(1) else {
            cmds.push(if content_fits { content_flat } else { content_break });
            return;
        };
        let whitespace_flat = Command::doc(ind, Mode::Flat, whitespace);
        let whitespace_break = Command::doc(ind, Mode::Break, whitespace);

        if parts.len() == 2 {
            if content_fits {
                cmds.push(whitespace_flat);
                cmds.push(content_flat);
            } else {
                cmds.push(whitespace_break);
                cmds.push(content_break);
            }
            return;
        }

        let remaining = Command::new(ind, cmd.mode, Node::Fill(&parts[2..]));
        let pair = Command::new(ind, Mode::Flat, Node::Concat(&parts[..3]));
        let pair_fits = fits(&pair, &[], rem, has_line_suffix, true);

        cmds.push(remaining);
        if pair_fits {
            cmds.push(whitespace_flat);
            cmds.push(content_flat);
        } else if content_fits {
            cmds.push(whitespace_break);
            cmds.push(content_flat);
        } else {
            cmds.push(whitespace_break);
            cmds.push(content_break);
        }
    }
}

/// Push `parts` so that the first one is processed first.
fn push_parts<'a>(cmds: &mut Vec<Command<'a>>, cmd: &Command<'a>, parts: &'a [Doc]) {
    for part in parts.iter().rev() {
        cmds.push(Command::doc(&cmd.indent, cmd.mode, part));
    }
}

/// Whether `next`, followed by the pending `rest` commands up to the first
/// line break, fits in `width` columns.
///
/// With `must_be_flat`, a group that is already broken never fits.
fn fits<'a>(
    next: &Command<'a>,
    rest: &[Command<'a>],
    mut width: isize,
    mut has_line_suffix: bool,
    must_be_flat: bool,
) -> bool {
    let mut rest_idx = rest.len();
    let mut stack: Vec<(Mode, Node<'a>)> = vec![(next.mode, next.node)];
    let mut out = String::new();

    while width >= 0 {
        let Some((mode, node)) = stack.pop() else {
            if rest_idx == 0 {
                return true;
            }
            rest_idx -= 1;
            stack.push((rest[rest_idx].mode, rest[rest_idx].node));
            continue;
        };

        let doc = match node {
            Node::Concat(parts) | Node::Fill(parts) => {
                stack.extend(parts.iter().rev().map(|part| (mode, Node::Doc(part))));
                continue;
            }
            Node::Doc(doc) => doc,
        };

        match doc {
            Doc::Text(s) => {
                out.push_str(s);
                width -= s.width() as isize;
            }
            Doc::Concat(parts) | Doc::Fill(parts) => {
                stack.extend(parts.iter().rev().map(|part| (mode, Node::Doc(part))));
            }
            Doc::Indent(contents) | Doc::Align { contents, .. } => {
                stack.push((mode, Node::Doc(contents)));
            }
            Doc::Trim => width += trim(&mut out) as isize,
            Doc::Group {
                contents,
                should_break,
                expanded_states,
            } => {
                if must_be_flat && *should_break {
                    return false;
                }
                let group_mode = if *should_break { Mode::Break } else { mode };
                let contents: &Doc = contents;
                let contents = match expanded_states {
                    Some(states) if group_mode == Mode::Break => {
                        states.last().unwrap_or(contents)
                    }
                    _ => contents,
                };
                stack.push((group_mode, Node::Doc(contents)));
            }
            Doc::IfBreak {
                break_contents,
                flat_contents,
            } => {
                let contents = match mode {
                    Mode::Break => break_contents,
                    Mode::Flat => flat_contents,
                };
                stack.push((mode, Node::Doc(contents)));
            }
            Doc::Line(kind) => match (mode, kind) {
                (Mode::Flat, LineKind::Normal) => {
                    out.push(' ');
                    width -= 1;
                }
                (Mode::Flat, LineKind::Soft) => {}
                _ => return true,
            },
            Doc::LineSuffix(_) => has_line_suffix = true,
            Doc::LineSuffixBoundary => {
                if has_line_suffix {
                    return true;
                }
            }
            Doc::BreakParent => {}
        }
    }

    false
}

/// Remove trailing spaces and tabs from `out`, returning how many were
/// removed.
fn trim(out: &mut String) -> usize {
    let trimmed_len = out.trim_end_matches([' ', '\t']).len();
    let count = out.len() - trimmed_len;
    out.truncate(trimmed_len);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::*;

    fn print(doc: &Doc) -> String {
        print_doc_to_string(doc, &PrintOptions::default())
    }

    fn print_width(doc: &Doc, print_width: usize) -> String {
        let options = PrintOptions {
            print_width,
            ..PrintOptions::default()
        };
        print_doc_to_string(doc, &options)
    }

    #[test]
    fn group_fits_renders_flat() {
        let doc = group(concat([text("foo"), LINE, text("bar")]));
        assert_eq!(print(&doc), "foo bar");
    }

    #[test]
    fn group_exceeds_width_breaks() {
        let doc = group(concat([
            text("hello"),
            LINE,
            text("beautiful"),
            LINE,
            text("world"),
        ]));
        assert_eq!(print_width(&doc, 10), "hello\nbeautiful\nworld");
    }

    #[test]
    fn softline_prints_nothing_when_flat() {
        let doc = group(concat([text("a"), SOFTLINE, text("b")]));
        assert_eq!(print(&doc), "ab");
        assert_eq!(print_width(&doc, 1), "a\nb");
    }

    #[test]
    fn hardline_always_breaks() {
        let doc = concat([text("a"), hardline(), text("b")]);
        assert_eq!(print(&doc), "a\nb");
    }

    #[test]
    fn hardline_breaks_enclosing_group() {
        let doc = group(concat([text("a"), LINE, text("b"), hardline(), text("c")]));
        assert_eq!(print(&doc), "a\nb\nc");
    }

    #[test]
    fn indent_applies_to_broken_lines() {
        let doc = concat([text("a"), indent(concat([hardline(), text("b")])), hardline(), text("c")]);
        assert_eq!(print(&doc), "a\n  b\nc");
    }

    #[test]
    fn nested_indent_with_tabs() {
        let options = PrintOptions {
            use_tabs: true,
            ..PrintOptions::default()
        };
        let doc = concat([
            text("a"),
            indent(concat([hardline(), text("b"), indent(concat([hardline(), text("c")]))])),
        ]);
        assert_eq!(print_doc_to_string(&doc, &options), "a\n\tb\n\t\tc");
    }

    #[test]
    fn tab_width_controls_indent_size() {
        let options = PrintOptions {
            tab_width: 4,
            ..PrintOptions::default()
        };
        let doc = concat([text("a"), indent(concat([hardline(), text("b")]))]);
        assert_eq!(print_doc_to_string(&doc, &options), "a\n    b");
    }

    #[test]
    fn align_adds_spaces_and_dedent_removes_a_level() {
        let doc = concat([
            text("a"),
            align(
                AlignKind::Width(3),
                concat([hardline(), text("b"), dedent(concat([hardline(), text("c")]))]),
            ),
        ]);
        assert_eq!(print(&doc), "a\n   b\nc");
    }

    #[test]
    fn dedent_to_root_returns_to_marked_root() {
        let doc = indent(concat([
            text("a"),
            mark_as_root(indent(concat([
                hardline(),
                text("b"),
                dedent_to_root(concat([hardline(), text("c")])),
            ]))),
            dedent_to_root(concat([hardline(), text("d")])),
        ]));
        assert_eq!(print(&doc), "a\n    b\n  c\nd");
    }

    #[test]
    fn literalline_ignores_indentation() {
        let doc = indent(concat([text("a"), literalline(), text("b"), hardline(), text("c")]));
        assert_eq!(print(&doc), "a\nb\n  c");
    }

    #[test]
    fn trailing_whitespace_is_trimmed_before_newline() {
        let doc = concat([text("a  "), hardline(), text("b")]);
        assert_eq!(print(&doc), "a\nb");
    }

    #[test]
    fn trim_removes_trailing_whitespace() {
        let doc = concat([text("a \t "), TRIM, text("b")]);
        assert_eq!(print(&doc), "ab");
    }

    #[test]
    fn fill_keeps_trailing_separator() {
        let doc = fill([text("foo"), LINE, text("bar"), LINE]);
        assert_eq!(print(&doc), "foo bar ");
    }

    #[test]
    fn fill_wraps_like_words() {
        let doc = fill([
            text("aaa"),
            LINE,
            text("bbb"),
            LINE,
            text("ccc"),
            LINE,
            text("ddd"),
        ]);
        assert_eq!(print_width(&doc, 8), "aaa bbb\nccc ddd");
    }

    #[test]
    fn conditional_group_picks_first_fitting_state() {
        let doc = conditional_group(vec![concat([text("foo"), LINE]), text("bar")]).unwrap();
        assert_eq!(print(&doc), "foo ");
        let doc = conditional_group(vec![text("long text"), text("short")]).unwrap();
        assert_eq!(print_width(&doc, 6), "short");
    }

    #[test]
    fn conditional_group_falls_back_to_most_expanded() {
        let doc = conditional_group(vec![
            text("aaaaaaaaaa"),
            group(concat([text("b"), LINE, text("c")])),
        ])
        .unwrap();
        assert_eq!(print_width(&doc, 2), "b\nc");
    }

    #[test]
    fn line_suffix_flushes_before_newline() {
        let doc = concat([text("foo"), line_suffix(text("bar")), hardline()]);
        assert_eq!(print(&doc), "foobar\n");
    }

    #[test]
    fn line_suffix_flushes_at_end() {
        let doc = concat([line_suffix(text(" // c")), text("x")]);
        assert_eq!(print(&doc), "x // c");
    }

    #[test]
    fn line_suffix_boundary_forces_flush() {
        let doc = concat([
            text("a"),
            line_suffix(text(" // c")),
            LINE_SUFFIX_BOUNDARY,
            text("b"),
        ]);
        assert_eq!(print(&doc), "a // c\nb");
        let doc = concat([text("a"), LINE_SUFFIX_BOUNDARY, text("b")]);
        assert_eq!(print(&doc), "ab");
    }

    #[test]
    fn if_break_follows_enclosing_group() {
        let flat = group(concat([text("foo"), if_break(text("bar"), text("baz"))]));
        assert_eq!(print(&flat), "foobaz");
        let broken = group(concat([
            text("foo"),
            if_break(text("bar"), text("baz")),
            BREAK_PARENT,
        ]));
        assert_eq!(print(&broken), "foobar");
        let root = concat([text("foo"), if_break(text("bar"), text("baz"))]);
        assert_eq!(print(&root), "foobar");
    }

    #[test]
    fn fits_counts_rest_until_first_break() {
        // "aaa" fits alone at width 5, but not followed by "bbb" on the
        // same line.
        let doc = concat([group(concat([text("aaa"), SOFTLINE])), text("bbb")]);
        assert_eq!(print_width(&doc, 5), "aaa\nbbb");
        assert_eq!(print_width(&doc, 6), "aaabbb");
    }

    #[test]
    fn wide_characters_count_double() {
        let doc = group(concat([text("日本"), LINE, text("語")]));
        assert_eq!(print_width(&doc, 6), "日本\n語");
        assert_eq!(print_width(&doc, 7), "日本 語");
    }

    #[test]
    fn huge_print_width_does_not_wrap() {
        let doc = group(concat([text("foo"), LINE, text("bar")]));
        assert_eq!(print_width(&doc, usize::MAX), "foo bar");
        assert_eq!(print_width(&doc, isize::MAX as usize + 1), "foo bar");
    }

    #[test]
    fn empty_doc_prints_nothing() {
        assert_eq!(print(&concat(Vec::<Doc>::new())), "");
    }

    #[test]
    fn output_is_deterministic() {
        let doc = group(concat([text("a"), LINE, text("b")]));
        assert_eq!(print(&doc), print(&doc));
    }
}
