//! Mutation entry points that always fail.
//!
//! The collections keep the familiar mutating calls so that code written
//! against a mutable collection API finds them, but every call returns
//! [`Error::Unsupported`] and leaves the contents untouched. Implementors
//! take the provided methods as they are.

use std::borrow::Borrow;

use crate::error::{Error, Result};

pub trait RejectsMutation<T> {
    fn add(&self, _value: T) -> Result<bool> {
        Err(Error::unsupported("add"))
    }

    fn remove(&self, _value: &T) -> Result<bool> {
        Err(Error::unsupported("remove"))
    }

    fn add_all<I: IntoIterator<Item = T>>(&self, _values: I) -> Result<bool> {
        Err(Error::unsupported("add_all"))
    }

    fn remove_all<I>(&self, _values: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Err(Error::unsupported("remove_all"))
    }

    fn retain_all<I>(&self, _values: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Err(Error::unsupported("retain_all"))
    }

    fn clear(&self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }
}

pub trait RejectsListMutation<T>: RejectsMutation<T> {
    fn set(&self, _index: usize, _value: T) -> Result<T> {
        Err(Error::unsupported("set"))
    }

    fn insert(&self, _index: usize, _value: T) -> Result<()> {
        Err(Error::unsupported("insert"))
    }

    fn insert_all<I: IntoIterator<Item = T>>(&self, _index: usize, _values: I) -> Result<bool> {
        Err(Error::unsupported("insert_all"))
    }

    fn remove_at(&self, _index: usize) -> Result<T> {
        Err(Error::unsupported("remove_at"))
    }
}

pub trait RejectsMapMutation<K, V> {
    fn put(&self, _key: K, _value: V) -> Result<Option<V>> {
        Err(Error::unsupported("put"))
    }

    fn remove_key(&self, _key: &K) -> Result<Option<V>> {
        Err(Error::unsupported("remove"))
    }

    fn put_all<I: IntoIterator<Item = (K, V)>>(&self, _entries: I) -> Result<()> {
        Err(Error::unsupported("put_all"))
    }

    fn clear(&self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }
}
