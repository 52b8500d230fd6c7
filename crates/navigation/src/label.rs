use crate::config::{Label, MenuItem};

/// Types that carry a raw label, either directly or nested under a `label`
/// field. Both shapes occur in configuration data and must be accepted.
pub trait LabelProvider {
    fn raw_label(&self) -> Option<&Label>;
}

impl LabelProvider for Label {
    fn raw_label(&self) -> Option<&Label> {
        Some(self)
    }
}

impl LabelProvider for MenuItem {
    fn raw_label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}

/// Resolves a label to a display string for the given language.
///
/// Plain string labels are returned verbatim (single-language shorthand);
/// localized labels are looked up by language code. Anything unresolvable
/// yields the empty string, never an error.
pub fn resolve_label<P>(provider: &P, language: &str) -> String
where
    P: LabelProvider + ?Sized,
{
    match provider.raw_label() {
        Some(Label::Text(text)) => text.clone(),
        Some(Label::Localized(labels)) => labels.get(language).cloned().unwrap_or_default(),
        None => String::new(),
    }
}
