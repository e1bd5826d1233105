//! Suggestion dropdown state and keyboard navigation

/// Keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dropdown hidden, or Enter without a highlight
    Ignored,
    /// Highlight moved (`None` means no item highlighted)
    Highlighted(Option<usize>),
    /// An item was chosen; the dropdown is now hidden
    Selected(String),
    Hidden,
}

/// One autocomplete dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdown {
    items: Vec<String>,
    highlighted: Option<usize>,
    visible: bool,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the items; shown only when there is something to show
    pub fn show(&mut self, items: Vec<String>) {
        self.visible = !items.is_empty();
        self.items = items;
        self.highlighted = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    /// Handle a key press while the input has focus
    pub fn key(&mut self, key: DropdownKey) -> KeyOutcome {
        if !self.visible {
            return KeyOutcome::Ignored;
        }
        match key {
            DropdownKey::ArrowDown => {
                let last = self.items.len() - 1;
                self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
                KeyOutcome::Highlighted(self.highlighted)
            }
            DropdownKey::ArrowUp => {
                self.highlighted = self.highlighted.and_then(|i| i.checked_sub(1));
                KeyOutcome::Highlighted(self.highlighted)
            }
            DropdownKey::Enter => match self.highlighted {
                Some(index) => self.select(index).map_or(KeyOutcome::Ignored, KeyOutcome::Selected),
                None => KeyOutcome::Ignored,
            },
            DropdownKey::Escape => {
                self.hide();
                KeyOutcome::Hidden
            }
        }
    }

    /// Choose the item at `index` and hide
    pub fn select(&mut self, index: usize) -> Option<String> {
        let value = self.items.get(index).cloned()?;
        self.hide();
        Some(value)
    }
}

/// Decode the host's JSON suggestion list
///
/// Anything other than a JSON array of strings yields no suggestions.
pub fn parse_suggestions(json: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(json) {
        Ok(items) => items,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed suggestion list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        let mut d = Dropdown::new();
        d.show(vec!["Alpha".into(), "Beta".into(), "Gamma".into()]);
        d
    }

    #[test]
    fn test_arrow_navigation_is_bounded() {
        let mut d = dropdown();
        assert_eq!(d.key(DropdownKey::ArrowUp), KeyOutcome::Highlighted(None));
        assert_eq!(d.key(DropdownKey::ArrowDown), KeyOutcome::Highlighted(Some(0)));
        d.key(DropdownKey::ArrowDown);
        d.key(DropdownKey::ArrowDown);
        assert_eq!(d.key(DropdownKey::ArrowDown), KeyOutcome::Highlighted(Some(2)));
        assert_eq!(d.key(DropdownKey::ArrowUp), KeyOutcome::Highlighted(Some(1)));
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let mut d = dropdown();
        assert_eq!(d.key(DropdownKey::Enter), KeyOutcome::Ignored);
        d.key(DropdownKey::ArrowDown);
        d.key(DropdownKey::ArrowDown);
        assert_eq!(d.key(DropdownKey::Enter), KeyOutcome::Selected("Beta".into()));
        assert!(!d.is_visible());
    }

    #[test]
    fn test_keys_ignored_while_hidden() {
        let mut d = dropdown();
        assert_eq!(d.key(DropdownKey::Escape), KeyOutcome::Hidden);
        assert_eq!(d.key(DropdownKey::ArrowDown), KeyOutcome::Ignored);
    }

    #[test]
    fn test_empty_list_stays_hidden() {
        let mut d = Dropdown::new();
        d.show(Vec::new());
        assert!(!d.is_visible());
        assert_eq!(d.key(DropdownKey::ArrowDown), KeyOutcome::Ignored);
    }

    #[test]
    fn test_parse_suggestions() {
        assert_eq!(parse_suggestions(r#"["a","b"]"#), vec!["a", "b"]);
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("not json").is_empty());
        assert!(parse_suggestions(r#"{"a":1}"#).is_empty());
        assert!(parse_suggestions("[1,2]").is_empty());
    }
}
