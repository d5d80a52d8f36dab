//! The two concrete storage layouts behind [`super::VertexSubset`].

use crate::graph::Vid;

/// Internal storage for a [`super::VertexSubset`].
pub enum Representation<P> {
    /// An explicit list of member vids with a parallel payload array.
    Sparse { vids: Vec<Vid>, payload: Vec<P> },
    /// A length-`n` presence bitmap with a length-`n` payload array (only
    /// meaningful where the bitmap is set).
    Dense { present: Vec<bool>, payload: Vec<P> },
}
