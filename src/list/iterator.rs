use crate::list::{List, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It starts from the first node (`tail.next`) and yields exactly as many
/// elements as the list held when the iterator was created, so walking the
/// cycle always terminates.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use circular_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            current: list.head_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for element in self.clone() {
            f.field(element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the current element and step to its successor, or return `None`
    /// once the captured length is used up.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `current` is a node of the borrowed list.
        let current: &'a Node<T> = unsafe { self.current?.as_ref() };
        self.current = Some(current.next);
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Like [`Iter`], it yields exactly the length captured at creation.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// being read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use circular_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            current: list.head_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut ptr = self.current;
        for _ in 0..self.len {
            // SAFETY: the remaining `len` nodes from `current` belong to the
            // borrowed list.
            let Some(node) = ptr else { break };
            let current = unsafe { node.as_ref() };
            f.field(&current.element);
            ptr = Some(current.next);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return the current element and step to its successor, or return `None`
    /// once the captured length is used up.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let mut node = self.current?;
        // SAFETY: `len > 0`, so `node` is a node of the borrowed list, and it is
        // yielded only once since the traversal stops after one lap.
        let current: &'a mut Node<T> = unsafe { node.as_mut() };
        self.current = Some(current.next);
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Build a list holding the elements of `array` in order.
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    /// assert_eq!(list.to_string(), "{ 0 1 2 }");
    /// assert_eq!(list.len(), 3);
    /// ```
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_iter(vec)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER();
                    for (i, item) in vec.$ITER().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.len(), 0);

                    // Stop early, then start over from the front.
                    let mut iter = list.$ITER();
                    for (i, item) in vec.$ITER().take(mid).enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    drop(iter);
                    let mut iter = list.$ITER();
                    for item in vec.$ITER() {
                        assert_eq!(iter.next(), Some(item));
                    }
                    assert_eq!(iter.next(), None);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input, mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 2);
        test_case(0..10, 0);
        test_case(0..2, 2);
        test_case(0..2, 1);
        test_case(0..2, 0);
        test_case(0..1, 1);
        test_case(0..1, 0);
        test_case(0..0, 0);
    }

    #[test]
    fn iter_indexed() {
        let list = List::from([5, 5, 5]);
        assert_eq!(Vec::from_iter(list.indexed()), vec![(0, &5), (1, &5), (2, &5)]);

        let list = List::from_iter(1..=10);
        let pairs = Vec::from_iter(list.indexed().map(|(i, &e)| (i, e)));
        assert_eq!(pairs, Vec::from_iter((0..10).zip(1..=10)));

        assert_eq!(List::<i32>::new().indexed().next(), None);
    }

    #[test]
    fn iter_independent_traversals() {
        let list = List::from([1, 2, 3]);
        let mut first = list.iter();
        let mut second = list.iter();
        assert_eq!(first.next(), Some(&1));
        assert_eq!(first.next(), Some(&2));
        assert_eq!(second.next(), Some(&1));

        let forked = first.clone();
        assert_eq!(Vec::from_iter(first), vec![&3]);
        assert_eq!(Vec::from_iter(forked), vec![&3]);
        assert_eq!(Vec::from_iter(second), vec![&2, &3]);
        assert_eq!(list.iter().count(), 3);
    }

    #[test]
    fn iter_one_lap_only() {
        // The cycle never ends on its own, only the captured length stops it.
        let list = List::from(['x']);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&'x'));
        assert_eq!(iter.next(), None);
        assert_eq!(list.iter().take(5).count(), 1);
    }

    #[test]
    fn into_iter_and_collect() {
        let list = List::from(vec![1, 2, 3]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(Vec::from_iter(iter), vec![2, 3]);

        let mut list: List<i32> = (0..3).collect();
        list.extend(&[3, 4]);
        list.extend(vec![5]);
        for element in &mut list {
            *element *= 2;
        }
        let doubled: Vec<i32> = (&list).into_iter().copied().collect();
        assert_eq!(doubled, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn iter_debug() {
        let list = List::from([1, 2]);
        assert_eq!(format!("{:?}", list.iter()), "Iter(1, 2)");
        let mut list = list;
        assert_eq!(format!("{:?}", list.iter_mut()), "IterMut(1, 2)");
        assert_eq!(format!("{:?}", list.into_iter()), "IntoIter { list: [1, 2] }");
    }
}
