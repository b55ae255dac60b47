//! Display labels for list items

use crate::error::{GuiError, GuiResult};
use std::fmt;
use std::rc::Rc;

/// Capability an item type exposes so lists can label it.
///
/// `label` is the item's default text. `field` resolves a named field to its
/// text, with `Ok(None)` for a known field that currently has no value and an
/// error for a name the type does not know.
pub trait ListItem {
    fn label(&self) -> String;

    fn field(&self, name: &str) -> GuiResult<Option<String>> {
        Err(GuiError::UnknownField {
            field: name.to_string(),
            item: std::any::type_name::<Self>(),
        })
    }
}

impl ListItem for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl ListItem for &str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}

/// An absent item is labelled with the empty string
impl<T: ListItem> ListItem for Option<T> {
    fn label(&self) -> String {
        self.as_ref().map(ListItem::label).unwrap_or_default()
    }

    fn field(&self, name: &str) -> GuiResult<Option<String>> {
        match self {
            Some(item) => item.field(name),
            None => Ok(None),
        }
    }
}

macro_rules! display_list_item {
    ($($ty:ty),*) => {
        $(
            impl ListItem for $ty {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_list_item!(char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Where a list takes its item labels from
pub enum LabelSource<T> {
    /// `ListItem::label`
    Default,
    /// `ListItem::field` with the given name
    Field(String),
    /// An explicit function supplied by the owner of the list
    Extractor(Rc<dyn Fn(&T) -> String>),
}

impl<T> LabelSource<T> {
    pub fn field(name: impl Into<String>) -> Self {
        LabelSource::Field(name.into())
    }

    pub fn extractor(f: impl Fn(&T) -> String + 'static) -> Self {
        LabelSource::Extractor(Rc::new(f))
    }
}

impl<T: ListItem> LabelSource<T> {
    /// Resolve the label for one item
    pub fn label_for(&self, item: &T) -> GuiResult<String> {
        match self {
            LabelSource::Default => Ok(item.label()),
            LabelSource::Field(name) => Ok(item.field(name)?.unwrap_or_default()),
            LabelSource::Extractor(extract) => Ok(extract(item)),
        }
    }
}

impl<T> Default for LabelSource<T> {
    fn default() -> Self {
        LabelSource::Default
    }
}

impl<T> Clone for LabelSource<T> {
    fn clone(&self) -> Self {
        match self {
            LabelSource::Default => LabelSource::Default,
            LabelSource::Field(name) => LabelSource::Field(name.clone()),
            LabelSource::Extractor(f) => LabelSource::Extractor(Rc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for LabelSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSource::Default => write!(f, "Default"),
            LabelSource::Field(name) => f.debug_tuple("Field").field(name).finish(),
            LabelSource::Extractor(_) => write!(f, "Extractor(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        nickname: Option<String>,
        age: u32,
    }

    impl ListItem for Person {
        fn label(&self) -> String {
            format!("Person({})", self.name)
        }

        fn field(&self, name: &str) -> GuiResult<Option<String>> {
            match name {
                "name" => Ok(Some(self.name.clone())),
                "nickname" => Ok(self.nickname.clone()),
                "age" => Ok(Some(self.age.to_string())),
                _ => Err(GuiError::UnknownField {
                    field: name.to_string(),
                    item: "Person",
                }),
            }
        }
    }

    fn alice() -> Person {
        Person {
            name: "Alice".to_string(),
            nickname: None,
            age: 30,
        }
    }

    #[test]
    fn test_default_labels_are_the_strings() {
        let source = LabelSource::default();
        for name in ["Alice", "Bob"] {
            assert_eq!(source.label_for(&name).unwrap(), name);
        }
    }

    #[test]
    fn test_default_uses_item_label() {
        let source = LabelSource::default();
        assert_eq!(source.label_for(&alice()).unwrap(), "Person(Alice)");
    }

    #[test]
    fn test_field_source() {
        let source = LabelSource::field("age");
        assert_eq!(source.label_for(&alice()).unwrap(), "30");
    }

    #[test]
    fn test_field_without_value_is_empty() {
        let source = LabelSource::field("nickname");
        assert_eq!(source.label_for(&alice()).unwrap(), "");
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let source = LabelSource::field("surname");
        let err = source.label_for(&alice()).unwrap_err();
        assert_eq!(
            err,
            GuiError::UnknownField {
                field: "surname".to_string(),
                item: "Person",
            }
        );
    }

    #[test]
    fn test_plain_types_reject_fields() {
        let source = LabelSource::field("name");
        assert!(matches!(
            source.label_for(&"Alice"),
            Err(GuiError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_absent_item_is_empty() {
        let item: Option<Person> = None;
        assert_eq!(LabelSource::default().label_for(&item).unwrap(), "");
        assert_eq!(LabelSource::field("name").label_for(&item).unwrap(), "");
    }

    #[test]
    fn test_present_optional_item_delegates() {
        let item = Some(alice());
        assert_eq!(LabelSource::field("name").label_for(&item).unwrap(), "Alice");
    }

    #[test]
    fn test_extractor_source() {
        let source = LabelSource::extractor(|p: &Person| p.name.to_uppercase());
        assert_eq!(source.label_for(&alice()).unwrap(), "ALICE");
    }

    #[test]
    fn test_numbers_use_display() {
        assert_eq!(LabelSource::default().label_for(&42u32).unwrap(), "42");
    }
}
