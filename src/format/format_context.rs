use std::sync::{Mutex, Once};

use bc_components::tags::GLOBAL_TAGS;
use dcbor::{Tag, TagsStore, TagsStoreTrait};

use crate::known_values::{KNOWN_VALUES, KnownValuesStore};

/// Everything needed to render human-readable names for tags and known
/// values when formatting an envelope for debugging or display.
///
/// Purely a rendering aid: it never influences digests or the wire
/// encoding.
#[derive(Clone, Debug)]
pub struct FormatContext {
    tags: TagsStore,
    known_values: KnownValuesStore,
}

impl FormatContext {
    pub fn new(tags: Option<&TagsStore>, known_values: Option<&KnownValuesStore>) -> Self {
        Self {
            tags: tags.cloned().unwrap_or_default(),
            known_values: known_values.cloned().unwrap_or_default(),
        }
    }

    pub fn tags(&self) -> &TagsStore { &self.tags }

    pub fn assigned_name_for_tag(&self, tag: &Tag) -> Option<String> {
        self.tags.assigned_name_for_tag(tag)
    }

    pub fn name_for_tag(&self, tag: &Tag) -> String { self.tags.name_for_tag(tag) }

    pub fn known_values(&self) -> &KnownValuesStore { &self.known_values }
}

impl Default for FormatContext {
    fn default() -> Self { Self::new(None, None) }
}

/// Which [`FormatContext`] a formatting call should consult.
#[derive(Clone, Default)]
pub enum FormatContextOpt<'a> {
    /// Use bare defaults; no tag or known-value names are resolved.
    None,
    /// Use the process-wide [`GLOBAL_FORMAT_CONTEXT`].
    #[default]
    Global,
    /// Use an explicitly supplied context.
    Custom(&'a FormatContext),
}

pub struct LazyFormatContext {
    init: Once,
    data: Mutex<Option<FormatContext>>,
}

impl LazyFormatContext {
    pub fn get(&self) -> std::sync::MutexGuard<'_, Option<FormatContext>> {
        self.init.call_once(|| {
            let tags_binding = GLOBAL_TAGS.get();
            let tags = tags_binding.as_ref();
            let known_values_binding = KNOWN_VALUES.get();
            let known_values = known_values_binding.as_ref();
            let context = FormatContext::new(tags, known_values);
            *self.data.lock().unwrap() = Some(context);
        });
        self.data.lock().unwrap()
    }
}

pub static GLOBAL_FORMAT_CONTEXT: LazyFormatContext =
    LazyFormatContext { init: Once::new(), data: Mutex::new(None) };

#[macro_export]
macro_rules! with_format_context {
    ($action:expr) => {{
        let binding = $crate::format::GLOBAL_FORMAT_CONTEXT.get();
        let context = binding.as_ref().unwrap();
        $action(context)
    }};
}
