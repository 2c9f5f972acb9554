//! K-way ordered merge of sorted sparse sources.
//!
//! Every elementwise polynomial operation reduces to walking several
//! sorted term sequences in lockstep. [`OrderedMerge`] does that with a
//! binary heap holding one cursor per source, so merging N entries from
//! K sources costs O(N log K). Each distinct key comes out exactly once,
//! as a [`MergeRecord`] listing the sources that hold it.
//!
//! The merge is lazy and single-pass.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use smallvec::SmallVec;

/// All values sharing one key, tagged by the index of their source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MergeRecord<K, V> {
    /// The shared key.
    pub key: K,
    /// (source index, value) pairs in ascending source order.
    pub entries: SmallVec<[(usize, V); 4]>,
}

impl<K, V> MergeRecord<K, V> {
    /// Returns the value contributed by `source`, if it holds this key.
    #[must_use]
    pub fn get(&self, source: usize) -> Option<&V> {
        self.entries
            .iter()
            .find(|(index, _)| *index == source)
            .map(|(_, value)| value)
    }
}

/// Lazy ascending merge of several sorted `(key, value)` sources.
///
/// Each source must yield its keys in non-decreasing order. If a source
/// yields the same key twice, the later value replaces the earlier one
/// in that key's record.
pub struct OrderedMerge<K: Ord, V, I: Iterator<Item = (K, V)>> {
    sources: Vec<I>,
    pending: Vec<Option<V>>,
    heap: BinaryHeap<Reverse<(K, usize)>>,
}

impl<K: Ord, V, I: Iterator<Item = (K, V)>> OrderedMerge<K, V, I> {
    /// Starts a merge over `sources`.
    pub fn new<S>(sources: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I, Item = (K, V)>,
    {
        let sources: Vec<I> = sources.into_iter().map(IntoIterator::into_iter).collect();
        let mut merge = Self {
            pending: (0..sources.len()).map(|_| None).collect(),
            heap: BinaryHeap::with_capacity(sources.len()),
            sources,
        };
        for index in 0..merge.sources.len() {
            merge.advance(index);
        }
        merge
    }

    /// Returns the number of sources being merged.
    #[must_use]
    pub fn width(&self) -> usize {
        self.sources.len()
    }

    fn advance(&mut self, index: usize) {
        if let Some((key, value)) = self.sources[index].next() {
            self.pending[index] = Some(value);
            self.heap.push(Reverse((key, index)));
        }
    }
}

impl<K: Ord, V, I: Iterator<Item = (K, V)>> Iterator for OrderedMerge<K, V, I> {
    type Item = MergeRecord<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse((key, first)) = self.heap.pop()?;
        let mut entries: SmallVec<[(usize, V); 4]> = SmallVec::new();

        let mut index = first;
        loop {
            if let Some(value) = self.pending[index].take() {
                match entries.last_mut() {
                    Some(last) if last.0 == index => last.1 = value,
                    _ => entries.push((index, value)),
                }
            }
            self.advance(index);

            match self.heap.peek() {
                Some(Reverse((next, _))) if *next == key => {}
                _ => break,
            }
            match self.heap.pop() {
                Some(Reverse((_, next_index))) => index = next_index,
                None => break,
            }
        }

        Some(MergeRecord { key, entries })
    }
}

/// Adapts a source of items into `(key, item)` pairs.
pub struct Keyed<I, F> {
    inner: I,
    key_fn: F,
}

impl<K, I, F> Iterator for Keyed<I, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
{
    type Item = (K, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(((self.key_fn)(&item), item))
    }
}

/// Merges sources of plain items, ordered by a caller-computed key.
///
/// `key_fn` must be non-decreasing along every source. When it maps two
/// items of one source to the same key, only the later item survives.
pub fn merge_by_key<K, T, S, F>(
    sources: S,
    key_fn: F,
) -> OrderedMerge<K, T, Keyed<<S::Item as IntoIterator>::IntoIter, F>>
where
    K: Ord,
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    F: Fn(&T) -> K + Clone,
{
    OrderedMerge::new(sources.into_iter().map(|source| Keyed {
        inner: source.into_iter(),
        key_fn: key_fn.clone(),
    }))
}

/// Merge that reports every source for every key.
///
/// Sources that do not hold a key contribute a clone of `fill`.
pub struct FilledMerge<K: Ord, V: Clone, I: Iterator<Item = (K, V)>> {
    inner: OrderedMerge<K, V, I>,
    fill: V,
}

impl<K: Ord, V: Clone, I: Iterator<Item = (K, V)>> Iterator for FilledMerge<K, V, I> {
    type Item = (K, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        let mut row = vec![self.fill.clone(); self.inner.width()];
        for (index, value) in record.entries {
            row[index] = value;
        }
        Some((record.key, row))
    }
}

/// Starts a filled merge over `sources`.
pub fn filled_merge<K, V, S, I>(sources: S, fill: V) -> FilledMerge<K, V, I>
where
    K: Ord,
    V: Clone,
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I, Item = (K, V)>,
    I: Iterator<Item = (K, V)>,
{
    FilledMerge {
        inner: OrderedMerge::new(sources),
        fill,
    }
}
