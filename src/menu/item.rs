use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use super::options::MenuOptions;
use crate::output::OutputSink;

/// Where a piece of computed text is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Index of the entry the text belongs to.
    pub index: usize,
    /// Whether that entry is the current selection.
    pub current: bool,
}

pub type TextFn = Arc<dyn Fn(&MenuItem, &MenuOptions, RenderContext) -> String + Send + Sync>;

/// Callback bound to a raw key code on one item.
pub type ItemAction =
    Box<dyn FnMut(&mut MenuItem, &mut MenuOptions, &mut dyn OutputSink) -> io::Result<()> + Send>;

/// Display text that is either fixed or computed at render time.
#[derive(Clone)]
pub enum Text {
    Static(String),
    Computed(TextFn),
}

impl Text {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&MenuItem, &MenuOptions, RenderContext) -> String + Send + Sync + 'static,
    {
        Text::Computed(Arc::new(f))
    }

    pub fn resolve(&self, item: &MenuItem, options: &MenuOptions, context: RenderContext) -> String {
        match self {
            Text::Static(text) => text.clone(),
            Text::Computed(f) => f(item, options, context),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::Static(String::new())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Text::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::Static(text.to_string())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::Static(text)
    }
}

/// One selectable row.
#[derive(Default)]
pub struct MenuItem {
    pub title: Text,
    pub hotkey: Option<char>,
    /// First flagged item starts as the current selection.
    pub selected: bool,
    /// Replaces the menu help message while this item is current.
    pub help_message: Option<Text>,
    /// Selecting the item moves to it but never resolves the menu.
    pub prevent: bool,
    /// Caller data carried into the resolved result untouched.
    pub extras: Map<String, Value>,
    actions: BTreeMap<u32, ItemAction>,
}

impl MenuItem {
    pub fn new(title: impl Into<Text>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey);
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn help_message(mut self, text: impl Into<Text>) -> Self {
        self.help_message = Some(text.into());
        self
    }

    pub fn prevent(mut self) -> Self {
        self.prevent = true;
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Bind `action` to `raw_code` while this item is current.
    pub fn on_key<F>(mut self, raw_code: u32, action: F) -> Self
    where
        F: FnMut(&mut MenuItem, &mut MenuOptions, &mut dyn OutputSink) -> io::Result<()>
            + Send
            + 'static,
    {
        self.actions.insert(raw_code, Box::new(action));
        self
    }

    pub fn has_action(&self, raw_code: u32) -> bool {
        self.actions.contains_key(&raw_code)
    }

    /// Run the action bound to `raw_code`. Returns `false` when none is bound.
    pub(crate) fn dispatch_action(
        &mut self,
        raw_code: u32,
        options: &mut MenuOptions,
        sink: &mut dyn OutputSink,
    ) -> io::Result<bool> {
        // Taken out for the call so the action may borrow the item mutably.
        let Some(mut action) = self.actions.remove(&raw_code) else {
            return Ok(false);
        };
        let outcome = action(self, options, sink);
        self.actions.entry(raw_code).or_insert(action);
        outcome.map(|()| true)
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("title", &self.title)
            .field("hotkey", &self.hotkey)
            .field("selected", &self.selected)
            .field("help_message", &self.help_message)
            .field("prevent", &self.prevent)
            .field("extras", &self.extras)
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A row of the menu: an item or a blank spacer.
#[derive(Debug)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

impl MenuEntry {
    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut MenuItem> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        MenuEntry::Item(item)
    }
}

/// The item a menu resolved with.
#[derive(Debug)]
pub struct Selected {
    pub index: usize,
    /// Title as rendered when the menu resolved.
    pub title: String,
    pub item: MenuItem,
}

impl Selected {
    /// Extras merged with `title`, `hotkey` and `index`.
    ///
    /// `title` and `hotkey` replace extras of the same name; an `index` extra
    /// is kept as is.
    pub fn to_json(&self) -> Value {
        let mut object = self.item.extras.clone();
        object.insert("title".to_string(), Value::String(self.title.clone()));
        if let Some(hotkey) = self.item.hotkey {
            object.insert("hotkey".to_string(), Value::String(hotkey.to_string()));
        }
        object
            .entry("index")
            .or_insert_with(|| Value::from(self.index));
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::VirtualTerminal;
    use serde_json::json;

    #[test]
    fn computed_text_sees_item_and_context() {
        let item = MenuItem::new("unused").hotkey('q');
        let text = Text::computed(|item, _, ctx| format!("{:?}@{}", item.hotkey, ctx.index));
        let rendered = text.resolve(
            &item,
            &MenuOptions::default(),
            RenderContext {
                index: 3,
                current: true,
            },
        );
        assert_eq!(rendered, "Some('q')@3");
    }

    #[test]
    fn action_can_mutate_item_and_is_kept_for_next_press() {
        let mut item = MenuItem::new("count: 0").on_key(39, |item, _, _| {
            let count = item.extras.get("count").and_then(Value::as_u64).unwrap_or(0) + 1;
            item.extras.insert("count".into(), json!(count));
            item.title = format!("count: {count}").into();
            Ok(())
        });
        let mut options = MenuOptions::default();
        let mut screen = VirtualTerminal::new();

        assert!(item.dispatch_action(39, &mut options, &mut screen).expect("run"));
        assert!(item.dispatch_action(39, &mut options, &mut screen).expect("run"));
        assert!(!item.dispatch_action(40, &mut options, &mut screen).expect("run"));
        assert_eq!(item.extras["count"], json!(2));
        assert!(item.has_action(39));
    }

    #[test]
    fn selected_json_merges_extras() {
        let selected = Selected {
            index: 2,
            title: "Apples".into(),
            item: MenuItem::new("Apples")
                .hotkey('a')
                .extra("price", 3)
                .extra("title", "shadowed"),
        };
        assert_eq!(
            selected.to_json(),
            json!({"title": "Apples", "hotkey": "a", "index": 2, "price": 3})
        );
    }

    #[test]
    fn selected_json_keeps_an_index_extra() {
        let selected = Selected {
            index: 2,
            title: "Apples".into(),
            item: MenuItem::new("Apples").extra("index", "sku-17"),
        };
        assert_eq!(
            selected.to_json(),
            json!({"title": "Apples", "index": "sku-17"})
        );
    }
}
