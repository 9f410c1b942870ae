/// UseCase metadata used for identification and page titles
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "pdf_chat")
    fn usecase_name() -> &'static str;

    /// Display name for the UI (e.g. "Chat with a PDF")
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_pdf_chat"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl UseCaseMetadata for Sample {
        fn usecase_index() -> &'static str {
            "u999"
        }

        fn usecase_name() -> &'static str {
            "sample"
        }

        fn display_name() -> &'static str {
            "Sample"
        }
    }

    #[test]
    fn test_full_name_joins_index_and_name() {
        assert_eq!(Sample::full_name(), "u999_sample");
        assert_eq!(Sample::description(), "");
    }
}
