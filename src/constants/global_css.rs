/// Stylesheet injected into the choice view: left-aligned question text and
/// options, content block centered at a readable width.
pub const GLOBAL_CSS: &str = r#"
    .prodigy-content {
        text-align: left;
        max-width: 800px;
        margin: 0 auto;
    }

    .prodigy-choice {
        text-align: left;
    }
"#;
