use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use tracing::trace;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copy: the clone is built from new nodes in the same order, so the two
/// lists never share a node.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the position of the first element equal to `x`, or `None` if
    /// there is none. The scan stops at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3, 2, 4]);
    /// assert_eq!(list.find_first(&2), Some(1));
    /// assert_eq!(list.find_first(&42), None);
    /// ```
    pub fn find_first(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Returns the position of the last element equal to `x`, or `None` if
    /// there is none. Always scans the whole list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3, 2, 4]);
    /// assert_eq!(list.find_last(&2), Some(3));
    /// assert_eq!(List::new().find_last(&2), None);
    /// ```
    pub fn find_last(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.indexed()
            .filter(|(_, e)| *e == x)
            .map(|(i, _)| i)
            .last()
    }

    /// Retains only the elements specified by the predicate, and returns the
    /// number of removed elements.
    ///
    /// The list is walked once, for its length at the time of the call. A
    /// rejected node is unlinked from its predecessor, and the tail moves back
    /// to the last kept node when the tail itself is rejected. The order of the
    /// kept elements is preserved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// assert_eq!(list.retain(|x| x % 2 == 0), 3);
    /// assert_eq!(list.to_string(), "{ 2 4 6 }");
    /// ```
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = match self.tail {
            Some(tail) => tail,
            None => return 0,
        };
        let len = self.len();
        for _ in 0..len {
            // SAFETY: `prev` is either the tail or a kept node, so it is still in
            // the list, and its successor is the next node to visit.
            unsafe {
                let current = prev.as_ref().next;
                if keep(&current.as_ref().element) {
                    prev = current;
                } else {
                    drop(self.detach_after(prev));
                }
            }
        }
        let removed = len - self.len();
        trace!(removed, len = self.len(), "retain");
        removed
    }

    /// Removes every element equal to `x`, and returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 1, 2, 1, 1, 3, 1, 1]);
    /// assert_eq!(list.remove_all(&1), 6);
    /// assert_eq!(list.to_string(), "{ 2 3 }");
    /// ```
    pub fn remove_all(&mut self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        self.retain(|e| e != x)
    }

    /// Reverses the order of the elements in place.
    ///
    /// No node is allocated or freed: each `next` link is turned around to point
    /// at its predecessor, and the former first node becomes the tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// list.reverse();
    /// assert_eq!(list.to_string(), "{ 5 4 3 2 1 }");
    /// ```
    pub fn reverse(&mut self) {
        let tail = match self.tail {
            Some(tail) if self.len() > 1 => tail,
            _ => return,
        };
        trace!(len = self.len(), "reverse");
        // SAFETY: the walk visits each of the `len` nodes of the cycle once,
        // starting right after the tail.
        unsafe {
            let head = tail.as_ref().next;
            let (mut prev, mut current) = (tail, head);
            for _ in 0..self.len() {
                let next = current.as_ref().next;
                current.as_mut().next = prev;
                prev = current;
                current = next;
            }
            self.tail = Some(head);
        }
    }
}
