//! Macros used for generating documentation

/// A macro for generating the doc-comments for parallel versions of various
/// descriptor functions. It takes the name of the sequential function as an
/// argument as a string literal.
///
/// It uses concat! to generate doc-links to the provided sequential function
/// name in string literal form.
macro_rules! generate_parallel_doc_comment {
    ($name:literal) => {
        concat!(
            "A parallel version of [`",
            $name,
            "()`].\n\nThis function does the same operation as [`",
            $name,
            "()`] but distributes rows of the output across threads using `rayon`.\nThe descriptor it returns is identical."
        )
    };
}
