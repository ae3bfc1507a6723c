//! Shared value types.

/// Whether a form region is displayed.
///
/// Maps onto the CSS `display` property (`""` restores the stylesheet
/// default, `"none"` hides) and onto the `attr_display_*` flag the server
/// reads back to skip validation of hidden attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    /// Visibility from a boolean "is shown" flag.
    pub fn shown_if(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }

    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }

    /// Value for `style.display`.
    pub fn css_display(self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => "none",
        }
    }

    /// Value posted back in the hidden `attr_display_*` input.
    pub fn display_flag(self) -> &'static str {
        match self {
            Visibility::Shown => "1",
            Visibility::Hidden => "0",
        }
    }

    /// The opposite visibility.
    pub fn inverse(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_and_flag_values() {
        assert_eq!(Visibility::Shown.css_display(), "");
        assert_eq!(Visibility::Hidden.css_display(), "none");
        assert_eq!(Visibility::Shown.display_flag(), "1");
        assert_eq!(Visibility::Hidden.display_flag(), "0");
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Visibility::Shown.inverse(), Visibility::Hidden);
        assert_eq!(Visibility::shown_if(false).inverse(), Visibility::Shown);
    }
}
