use crate::config::MenuItem;
use crate::id_path::IdPath;

/// A sequence of nodes from the configuration tree starting at a menu, where
/// every node is a child of the previous one.
///
/// Paths borrow from the `Configuration` they were found in; they are
/// transient values created per lookup and usually reduced to an [`IdPath`].
#[derive(Debug, Clone, Default)]
pub struct ObjectPath<'a> {
    objects: Vec<&'a MenuItem>,
}

impl<'a> ObjectPath<'a> {
    /// Creates a path from the given nodes, dropping any `None` entries.
    pub fn new<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a MenuItem>>,
    {
        Self {
            objects: objects.into_iter().flatten().collect(),
        }
    }

    pub(crate) fn from_nodes(objects: Vec<&'a MenuItem>) -> Self {
        Self { objects }
    }

    /// The node at the given level, or `None` when out of range.
    pub fn object(&self, level: usize) -> Option<&'a MenuItem> {
        self.objects.get(level).copied()
    }

    /// The final node of the path, but only when the path reaches deeper
    /// than the menu itself. A bare top-level menu without a deeper
    /// selection is not a leaf item for dispatch purposes.
    pub fn last_item(&self) -> Option<&'a MenuItem> {
        if self.objects.len() > 1 {
            self.object(self.objects.len() - 1)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Reduces the path to its ids.
    pub fn to_id_path(&self) -> IdPath {
        IdPath::new(self.objects.iter().map(|object| Some(object.id.clone())))
    }
}
