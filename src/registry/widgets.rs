use crate::foundation::core::ElementId;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Toolkit-native text label.
pub struct TextView {
    /// Current text.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Toolkit-native push button. The label is fixed at creation.
pub struct Button {
    label: String,
}

impl Button {
    pub(crate) fn new(label: String) -> Self {
        Self { label }
    }

    /// Button label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
/// Reference to an element living in the host's vertical layout.
pub enum Widget {
    /// A [`TextView`] by id.
    TextView(ElementId),
    /// A [`Button`] by id.
    Button(ElementId),
    /// A [`Canvas`](crate::Canvas) by id.
    Canvas(ElementId),
}

/// The single vertical container every widget is appended to, in creation order.
#[derive(Clone, Debug, Default)]
pub struct Column {
    children: Vec<Widget>,
}

impl Column {
    pub(crate) fn push(&mut self, widget: Widget) {
        self.children.push(widget);
    }

    pub(crate) fn remove(&mut self, widget: Widget) -> bool {
        match self.children.iter().position(|&w| w == widget) {
            Some(i) => {
                self.children.remove(i);
                true
            }
            None => false,
        }
    }

    /// Children top to bottom.
    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the column is empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
