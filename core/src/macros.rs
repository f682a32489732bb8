//! Impl generators shared by the collection types.
//!
//! Every element container in the crate exposes its active elements through
//! an inherent `as_slice(&self) -> &[T]`, and every map through
//! `as_entries(&self) -> &[MapEntry<K, V>]`. The macros below derive the rest
//! of the read-only surface from that one accessor:
//!
//! | Macro               | Provides |
//! |---------------------|----------|
//! | `slot_reads!`       | size, membership scan, iteration, snapshots, `Debug`, `Display`, rejected mutation |
//! | `set_semantics!`    | [`Membership`](crate::capability::Membership), set equality, set hash code |
//! | `map_reads!`        | lookup, views, map equality, map hash code, `Debug`, `Display`, rejected mutation |

macro_rules! slot_reads {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Number of active elements.
            #[inline]
            pub fn len(&self) -> usize {
                self.as_slice().len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.as_slice().is_empty()
            }

            /// Front-to-back iterator over the active elements.
            pub fn iter(&self) -> $crate::iter::Iter<'_, T> {
                $crate::iter::Iter::over(self.as_slice())
            }
        }

        impl<T: PartialEq> $name<T> {
            /// Linear scan for an equal element.
            pub fn contains(&self, value: &T) -> bool {
                self.as_slice().contains(value)
            }

            /// Whether every item is contained; vacuously true for no items.
            pub fn contains_all<I>(&self, values: I) -> bool
            where
                I: IntoIterator,
                I::Item: ::std::borrow::Borrow<T>,
            {
                values
                    .into_iter()
                    .all(|value| self.contains(::std::borrow::Borrow::borrow(&value)))
            }
        }

        impl<T: Clone> $name<T> {
            /// Fresh copy of the active elements.
            pub fn to_vec(&self) -> Vec<T> {
                self.as_slice().to_vec()
            }

            /// Clones the active elements into the front of `dest` and returns
            /// how many were written.
            ///
            /// Never allocates: a `dest` shorter than `len` fails with
            /// `OutOfRange` and is left untouched. Use `to_vec` for a fresh copy.
            pub fn copy_into(&self, dest: &mut [T]) -> $crate::error::Result<usize> {
                let source = self.as_slice();
                let bound = dest.len();
                let target = dest
                    .get_mut(..source.len())
                    .ok_or($crate::error::Error::OutOfRange { index: source.len(), bound })?;
                target.clone_from_slice(source);
                Ok(source.len())
            }
        }

        impl<T> $crate::capability::Container for $name<T> {
            fn len(&self) -> usize {
                self.as_slice().len()
            }
        }

        impl<T> $crate::capability::Iterable<T> for $name<T> {
            fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
            where
                T: 'a,
            {
                self.as_slice().iter()
            }
        }

        impl<'a, T> IntoIterator for &'a $name<T> {
            type Item = &'a T;
            type IntoIter = $crate::iter::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<T> $crate::mutation::RejectsMutation<T> for $name<T> {}

        impl<T: ::core::fmt::Debug> ::core::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_list().entries(self.as_slice()).finish()
            }
        }

        impl<T: ::core::fmt::Display> ::core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::render::write_elements(f, self.as_slice())
            }
        }
    };
}

macro_rules! set_semantics {
    ($name:ident) => {
        impl<T: ::core::hash::Hash> $name<T> {
            /// Sum of element digests; equal sets of any kind agree.
            pub fn hash_code(&self) -> u64 {
                $crate::hash_code::set_hash_code(self)
            }
        }

        impl<T: PartialEq> $crate::capability::Membership<T> for $name<T> {
            fn contains_element(&self, value: &T) -> bool {
                self.contains(value)
            }
        }

        impl<T, O> PartialEq<O> for $name<T>
        where
            T: PartialEq,
            O: $crate::capability::Membership<T> + ?Sized,
        {
            fn eq(&self, other: &O) -> bool {
                $crate::capability::set_eq(self, other)
            }
        }

        impl<T: Eq> Eq for $name<T> {}

        impl<T: ::core::hash::Hash> ::core::hash::Hash for $name<T> {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_code());
            }
        }
    };
}

macro_rules! map_reads {
    ($name:ident) => {
        impl<K, V> $name<K, V> {
            /// Number of entries.
            #[inline]
            pub fn len(&self) -> usize {
                self.as_entries().len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.as_entries().is_empty()
            }

            /// Entries in insertion order.
            pub fn iter(&self) -> $crate::iter::Iter<'_, $crate::entry::MapEntry<K, V>> {
                $crate::iter::Iter::over(self.as_entries())
            }

            pub fn key_set(&self) -> $crate::views::KeySet<'_, K, V> {
                $crate::views::KeySet::new(self.as_entries())
            }

            pub fn values(&self) -> $crate::views::Values<'_, K, V> {
                $crate::views::Values::new(self.as_entries())
            }

            pub fn entry_set(&self) -> $crate::views::EntrySet<'_, K, V> {
                $crate::views::EntrySet::new(self.as_entries())
            }
        }

        impl<K: PartialEq, V> $name<K, V> {
            /// Value of the first entry whose key equals `key`.
            pub fn get(&self, key: &K) -> Option<&V> {
                let index = $crate::map::find_key(self.as_entries(), key)?;
                Some(self.as_entries()[index].value())
            }

            pub fn contains_key(&self, key: &K) -> bool {
                $crate::map::find_key(self.as_entries(), key).is_some()
            }

            /// Index of the first entry whose key equals `key`.
            pub fn find_key(&self, key: &K) -> Option<usize> {
                $crate::map::find_key(self.as_entries(), key)
            }
        }

        impl<K, V: PartialEq> $name<K, V> {
            pub fn contains_value(&self, value: &V) -> bool {
                self.as_entries().iter().any(|entry| entry.value() == value)
            }
        }

        impl<K: ::core::hash::Hash, V: ::core::hash::Hash> $name<K, V> {
            /// Sum of entry codes; equal maps of any kind agree.
            pub fn hash_code(&self) -> u64 {
                self.as_entries()
                    .iter()
                    .fold(0u64, |code, entry| code.wrapping_add(entry.hash_code()))
            }
        }

        impl<K, V> $crate::capability::Container for $name<K, V> {
            fn len(&self) -> usize {
                self.as_entries().len()
            }
        }

        impl<K: PartialEq, V> $crate::capability::KeyedLookup<K, V> for $name<K, V> {
            fn lookup(&self, key: &K) -> Option<&V> {
                self.get(key)
            }

            fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
            where
                K: 'a,
                V: 'a,
            {
                self.as_entries().iter().map(|entry| (entry.key(), entry.value()))
            }
        }

        impl<K, V, O> PartialEq<O> for $name<K, V>
        where
            K: PartialEq,
            V: PartialEq,
            O: $crate::capability::KeyedLookup<K, V> + ?Sized,
        {
            fn eq(&self, other: &O) -> bool {
                $crate::capability::map_eq(self, other)
            }
        }

        impl<K: Eq, V: Eq> Eq for $name<K, V> {}

        impl<K: ::core::hash::Hash, V: ::core::hash::Hash> ::core::hash::Hash for $name<K, V> {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_code());
            }
        }

        impl<'a, K, V> IntoIterator for &'a $name<K, V> {
            type Item = &'a $crate::entry::MapEntry<K, V>;
            type IntoIter = $crate::iter::Iter<'a, $crate::entry::MapEntry<K, V>>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<K, V> $crate::mutation::RejectsMapMutation<K, V> for $name<K, V> {}

        impl<K: ::core::fmt::Debug, V: ::core::fmt::Debug> ::core::fmt::Debug for $name<K, V> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_map()
                    .entries(self.as_entries().iter().map(|entry| (entry.key(), entry.value())))
                    .finish()
            }
        }

        impl<K, V> ::core::fmt::Display for $name<K, V>
        where
            K: ::core::fmt::Display,
            V: ::core::fmt::Display,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::render::write_pairs(
                    f,
                    self.as_entries().iter().map(|entry| (entry.key(), entry.value())),
                )
            }
        }
    };
}
