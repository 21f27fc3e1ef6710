//! The DSL vocabulary: builder functions and builder values.
//!
//! Names resolve to closed enumerations, so every place that dispatches on a
//! builder is an exhaustive `match`.

use docscript_doc::doc::{self, Doc};

use crate::options::Vocabulary;

/// Shape a translated argument must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// A single Doc.
    Scalar,
    /// An array literal of Docs.
    Array,
    /// An integer amount (only `align`'s first argument).
    Integer,
}

/// A call-form builder: `group(...)`, `join(...)`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderFn {
    Group,
    ConditionalGroup,
    Concat,
    Fill,
    Indent,
    Dedent,
    MarkAsRoot,
    DedentToRoot,
    LineSuffix,
    IfBreak,
    Join,
    /// Extended vocabulary only.
    Align,
}

impl BuilderFn {
    pub const ALL: [BuilderFn; 12] = [
        BuilderFn::Group,
        BuilderFn::ConditionalGroup,
        BuilderFn::Concat,
        BuilderFn::Fill,
        BuilderFn::Indent,
        BuilderFn::Dedent,
        BuilderFn::MarkAsRoot,
        BuilderFn::DedentToRoot,
        BuilderFn::LineSuffix,
        BuilderFn::IfBreak,
        BuilderFn::Join,
        BuilderFn::Align,
    ];

    /// Look up a builder function by its DSL name.
    pub fn from_name(name: &str, vocabulary: Vocabulary) -> Option<BuilderFn> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == name && b.is_in(vocabulary))
    }

    pub fn name(self) -> &'static str {
        match self {
            BuilderFn::Group => "group",
            BuilderFn::ConditionalGroup => "conditionalGroup",
            BuilderFn::Concat => "concat",
            BuilderFn::Fill => "fill",
            BuilderFn::Indent => "indent",
            BuilderFn::Dedent => "dedent",
            BuilderFn::MarkAsRoot => "markAsRoot",
            BuilderFn::DedentToRoot => "dedentToRoot",
            BuilderFn::LineSuffix => "lineSuffix",
            BuilderFn::IfBreak => "ifBreak",
            BuilderFn::Join => "join",
            BuilderFn::Align => "align",
        }
    }

    /// Whether this builder exists in `vocabulary`.
    pub fn is_in(self, vocabulary: Vocabulary) -> bool {
        match self {
            BuilderFn::Align => vocabulary == Vocabulary::Extended,
            _ => true,
        }
    }

    /// The declared argument shapes; their count is the builder's arity.
    pub fn params(self) -> &'static [ArgShape] {
        use ArgShape::*;
        match self {
            BuilderFn::Group
            | BuilderFn::Indent
            | BuilderFn::Dedent
            | BuilderFn::MarkAsRoot
            | BuilderFn::DedentToRoot
            | BuilderFn::LineSuffix => &[Scalar],
            BuilderFn::ConditionalGroup | BuilderFn::Concat | BuilderFn::Fill => &[Array],
            BuilderFn::IfBreak => &[Scalar, Scalar],
            BuilderFn::Join => &[Scalar, Array],
            BuilderFn::Align => &[Integer, Scalar],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }
}

/// An identifier-form builder: `line`, `hardline`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderValue {
    Line,
    Softline,
    Hardline,
    Literalline,
    BreakParent,
    LineSuffixBoundary,
    /// Extended vocabulary only.
    Trim,
}

impl BuilderValue {
    pub const ALL: [BuilderValue; 7] = [
        BuilderValue::Line,
        BuilderValue::Softline,
        BuilderValue::Hardline,
        BuilderValue::Literalline,
        BuilderValue::BreakParent,
        BuilderValue::LineSuffixBoundary,
        BuilderValue::Trim,
    ];

    /// Look up a builder value by its DSL name.
    pub fn from_name(name: &str, vocabulary: Vocabulary) -> Option<BuilderValue> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == name && b.is_in(vocabulary))
    }

    pub fn name(self) -> &'static str {
        match self {
            BuilderValue::Line => "line",
            BuilderValue::Softline => "softline",
            BuilderValue::Hardline => "hardline",
            BuilderValue::Literalline => "literalline",
            BuilderValue::BreakParent => "breakParent",
            BuilderValue::LineSuffixBoundary => "lineSuffixBoundary",
            BuilderValue::Trim => "trim",
        }
    }

    /// Whether this builder exists in `vocabulary`.
    pub fn is_in(self, vocabulary: Vocabulary) -> bool {
        match self {
            BuilderValue::Trim => vocabulary == Vocabulary::Extended,
            _ => true,
        }
    }

    /// The Doc this value stands for.
    pub fn to_doc(self) -> Doc {
        match self {
            BuilderValue::Line => doc::LINE,
            BuilderValue::Softline => doc::SOFTLINE,
            BuilderValue::Hardline => doc::hardline(),
            BuilderValue::Literalline => doc::literalline(),
            BuilderValue::BreakParent => doc::BREAK_PARENT,
            BuilderValue::LineSuffixBoundary => doc::LINE_SUFFIX_BOUNDARY,
            BuilderValue::Trim => doc::TRIM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for builder in BuilderFn::ALL {
            assert_eq!(
                BuilderFn::from_name(builder.name(), Vocabulary::Extended),
                Some(builder)
            );
        }
        for value in BuilderValue::ALL {
            assert_eq!(
                BuilderValue::from_name(value.name(), Vocabulary::Extended),
                Some(value)
            );
        }
    }

    #[test]
    fn standard_vocabulary_excludes_align_and_trim() {
        assert_eq!(BuilderFn::from_name("align", Vocabulary::Standard), None);
        assert_eq!(BuilderValue::from_name("trim", Vocabulary::Standard), None);
        assert_eq!(
            BuilderFn::from_name("group", Vocabulary::Standard),
            Some(BuilderFn::Group)
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(BuilderFn::from_name("Group", Vocabulary::Extended), None);
        assert_eq!(BuilderValue::from_name("hardLine", Vocabulary::Extended), None);
    }

    #[test]
    fn arities() {
        assert_eq!(BuilderFn::Group.arity(), 1);
        assert_eq!(BuilderFn::IfBreak.arity(), 2);
        assert_eq!(BuilderFn::Join.params(), &[ArgShape::Scalar, ArgShape::Array]);
        assert_eq!(BuilderFn::Align.params(), &[ArgShape::Integer, ArgShape::Scalar]);
    }

    #[test]
    fn values_map_to_doc_constants() {
        assert_eq!(BuilderValue::Hardline.to_doc(), doc::hardline());
        assert_eq!(BuilderValue::Softline.to_doc(), doc::SOFTLINE);
    }
}
