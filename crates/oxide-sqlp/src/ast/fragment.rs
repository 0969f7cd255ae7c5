//! Caller-defined leaf nodes.

use std::fmt;

/// A leaf node kind the parser doesn't know about.
///
/// Rewriting code can substitute any value that renders itself as SQL into a
/// tree through [`Node::Fragment`](super::Node::Fragment). A fragment is
/// serialized through its [`Display`](fmt::Display) implementation, copied
/// through [`Fragment::clone_fragment`], and never has children, so walks
/// treat it as a leaf.
///
/// Every cloneable type that implements `Debug` and `Display` is a fragment:
///
/// ```
/// use std::fmt;
///
/// use oxide_sqlp::{Node, parse};
///
/// #[derive(Debug, Clone)]
/// struct Placeholder(usize);
///
/// impl fmt::Display for Placeholder {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "?{}", self.0)
///     }
/// }
///
/// let mut nodes = parse("id = :id").unwrap();
/// for node in nodes.iter_mut() {
///     if matches!(node, Node::NamedParam(_)) {
///         *node = Node::fragment(Placeholder(1));
///     }
/// }
/// assert_eq!(nodes.to_string(), "id = ?1");
/// ```
pub trait Fragment: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns an independent copy of this fragment.
    fn clone_fragment(&self) -> Box<dyn Fragment>;
}

impl<T> Fragment for T
where
    T: fmt::Debug + fmt::Display + Clone + Send + Sync + 'static,
{
    fn clone_fragment(&self) -> Box<dyn Fragment> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Fragment> {
    fn clone(&self) -> Self {
        (**self).clone_fragment()
    }
}

/// Fragments are equal when they serialize to the same SQL.
impl PartialEq for dyn Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for dyn Fragment {}
