/// An insertion-ordered map that allows multiple values for each key.
pub use dup_ord_map::DupOrdMap;

mod dup_ord_map {
    use std::iter::FromIterator;

    /// A map that remembers the order entries were inserted in and keeps
    /// every entry, duplicate keys included. Lookup returns the first entry
    /// for a key; later duplicates stay visible through iteration.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DupOrdMap<K, V> {
        items: Vec<(K, V)>,
    }

    fn as_pair_of_refs<K, V>(x: &(K, V)) -> (&K, &V) {
        (&x.0, &x.1)
    }

    pub type Iter<'a, K, V> = std::iter::Map<
        std::slice::Iter<'a, (K, V)>,
        fn(&'a (K, V)) -> (&'a K, &'a V),
    >;
    pub type IntoIter<K, V> = std::vec::IntoIter<(K, V)>;

    impl<K: PartialEq, V> DupOrdMap<K, V> {
        pub fn new() -> Self {
            DupOrdMap { items: Vec::new() }
        }

        pub fn insert(&mut self, key: K, value: V) {
            self.items.push((key, value));
        }

        /// The value of the first entry inserted under `key`.
        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: std::borrow::Borrow<Q>,
            Q: PartialEq + ?Sized,
        {
            self.items
                .iter()
                .find(|(k, _)| k.borrow() == key)
                .map(|(_, v)| v)
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }
        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }

        pub fn iter(&self) -> Iter<'_, K, V> {
            self.items.iter().map(as_pair_of_refs)
        }
    }

    impl<K: PartialEq, V> Default for DupOrdMap<K, V> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<K: PartialEq, V> FromIterator<(K, V)> for DupOrdMap<K, V> {
        fn from_iter<T>(iter: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
        {
            DupOrdMap {
                items: iter.into_iter().collect(),
            }
        }
    }

    impl<K, V> IntoIterator for DupOrdMap<K, V> {
        type Item = (K, V);
        type IntoIter = IntoIter<K, V>;

        fn into_iter(self) -> Self::IntoIter {
            self.items.into_iter()
        }
    }

    impl<'a, K: PartialEq, V> IntoIterator for &'a DupOrdMap<K, V> {
        type Item = (&'a K, &'a V);
        type IntoIter = Iter<'a, K, V>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }
}
