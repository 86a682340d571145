#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("{tag:?} is not a valid tag")]
    Unrecognized { tag: String },

    #[error("{tag:?} is not a valid {kind} tag")]
    InvalidTag { tag: String, kind: &'static str },
}

impl TagError {
    pub(crate) fn invalid(tag: &str, kind: &'static str) -> Self {
        Self::InvalidTag {
            tag: tag.to_string(),
            kind,
        }
    }

    /// The raw string that failed to parse.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Unrecognized { tag } | Self::InvalidTag { tag, .. } => tag,
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_display() {
        let error = TagError::Unrecognized {
            tag: "bogus".to_string(),
        };
        assert_eq!(error.to_string(), "\"bogus\" is not a valid tag");
    }

    #[test]
    fn test_invalid_tag_display() {
        let error = TagError::invalid("actionresult-foo/0_ar_2", "action");
        assert_eq!(
            error.to_string(),
            "\"actionresult-foo/0_ar_2\" is not a valid action tag"
        );
    }

    #[test]
    fn test_tag_accessor() {
        assert_eq!(TagError::invalid("unit-x", "unit").tag(), "unit-x");
        let error = TagError::Unrecognized {
            tag: "nohyphen".to_string(),
        };
        assert_eq!(error.tag(), "nohyphen");
    }

    #[test]
    fn test_error_clone_and_equality() {
        let error1 = TagError::invalid("service-", "service");
        let error2 = error1.clone();
        assert_eq!(error1, error2);
        assert_ne!(error1, TagError::invalid("service-", "unit"));
    }

    #[test]
    fn test_result_type_err() {
        let error = TagError::invalid("x", "action");
        let result: Result<i32> = Err(error.clone());
        assert_eq!(result, Err(error));
    }
}
