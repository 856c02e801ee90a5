//! Property-based tests for the stream rewriter

use mwsplit_core::rewrite_str;
use proptest::prelude::*;

proptest! {
    /// Text containing none of `[`, `\`, `^` is passed through unchanged.
    #[test]
    fn identity_on_plain_text(s in "[a-zA-Z0-9 .,;<>+#$~àéß日]{0,64}") {
        prop_assert_eq!(rewrite_str(&s).unwrap(), s);
    }

    /// A superblank is passed through unchanged no matter what it contains,
    /// as long as the terminator does not occur early.
    #[test]
    fn superblank_passthrough(s in "[a-zA-Z0-9 ^\\\\\\[<>+#$é]{0,48}") {
        let input = format!("[{s}]");
        prop_assert_eq!(rewrite_str(&input).unwrap(), input);
    }

    /// An escape pair is passed through unchanged for any escaped character.
    #[test]
    fn escape_passthrough(c in any::<char>()) {
        let input = format!("\\{c}");
        prop_assert_eq!(rewrite_str(&input).unwrap(), input);
    }

    /// A chunk with no tags and no join or queue markers is untouched.
    #[test]
    fn untagged_chunk_untouched(s in "[a-zA-Z0-9 .>é-]{0,32}") {
        let input = format!("^{s}$");
        prop_assert_eq!(rewrite_str(&input).unwrap(), input);
    }

    /// One tag followed by a join always splits into exactly two chunks,
    /// and a `+` inside the tag itself is never rewritten.
    #[test]
    fn join_after_tag_splits(
        head in "[a-z]{1,12}",
        tag in "[a-z+]{1,8}",
        tail in "[a-z]{1,12}",
    ) {
        let input = format!("^{head}<{tag}>+{tail}$");
        let expected = format!("^{head}<{tag}>$ ^{tail}$");
        prop_assert_eq!(rewrite_str(&input).unwrap(), expected);
    }

    /// An unterminated chunk always fails, whatever the body.
    #[test]
    fn unterminated_chunk_fails(s in "[a-z<>+# ]{0,32}") {
        let input = format!("^{s}");
        prop_assert!(rewrite_str(&input).is_err());
    }
}
