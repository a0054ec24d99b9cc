use phpcanon::{Canonicalizer, Coverage};
use strum::IntoEnumIterator;

/// One canonicalizer per coverage mode
pub fn canonicalizers() -> impl Iterator<Item = Canonicalizer> {
    Coverage::iter().map(|coverage| Canonicalizer::builder().coverage(coverage).build())
}
