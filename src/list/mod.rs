use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::list::error::ListError;
use crate::{IntoIter, Iter, IterMut};

pub mod error;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes, implemented as a circular
/// list. The only stored reference into the node cycle is the *tail*, and the first
/// element is always the node after it, so pushing at either end or popping the
/// front takes constant time. Accessing, inserting or removing elements at a given
/// position takes *O*(*i*) time.
///
/// The `List` contains:
/// - a pointer `tail` to the last node, or `None` if the list is empty;
/// - a length field `len` indicating the number of nodes in the cycle.
///
/// # Positions
///
/// Positional operations ([`get`], [`insert`], [`remove`]) take a signed index and
/// reject negative or too large values with a [`ListError`] instead of panicking.
/// The list is left untouched when an error is returned.
///
/// [`get`]: List::get
/// [`insert`]: List::insert
/// [`remove`]: List::remove
pub struct List<T> {
    /// the last node of the list, whose `next` is the first node
    tail: Option<NonNull<Node<T>>>,
    /// the length of the list
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Nodes detached from a list, still closed as a ring (`back.next` is the
/// front node). Used in list splicing.
pub(crate) struct DetachedRing<T> {
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: `tail` is always a valid node when present, and so is `tail.next`
        // (the first node, or `tail` itself in a single-element list).
        self.tail.map(|tail| unsafe { tail.as_ref().next })
    }

    /// Return the node reached by advancing `at` steps from the tail, i.e. the
    /// predecessor of position `at`, or `None` if the list is empty.
    ///
    /// `at == len` is answered by the tail itself without walking the cycle.
    pub(crate) fn node_before(&self, at: usize) -> Option<NonNull<Node<T>>> {
        debug_assert!(at <= self.len, "position {} beyond length {}", at, self.len);
        let tail = self.tail?;
        if at == self.len {
            return Some(tail);
        }
        let mut prev = tail;
        // SAFETY: every node reachable from `tail` belongs to the list.
        (0..at).for_each(|_| prev = unsafe { prev.as_ref().next });
        Some(prev)
    }

    /// Find the predecessor of the element at `at`, or fail with
    /// [`ListError::IndexOutOfRange`].
    fn element_predecessor(&self, at: isize) -> Result<NonNull<Node<T>>, ListError> {
        let out_of_range = ListError::IndexOutOfRange {
            index: at,
            len: self.len,
        };
        match usize::try_from(at) {
            Ok(pos) if pos < self.len => self.node_before(pos).ok_or(out_of_range),
            _ => Err(out_of_range),
        }
    }

    /// Make the self-looped `node` the only node of an empty list.
    ///
    /// It is unsafe because it does not check whether `node` is detached and
    /// linked to itself.
    unsafe fn attach_first(&mut self, node: NonNull<Node<T>>) {
        debug_assert!(self.tail.is_none(), "list is not empty");
        debug_assert_eq!(node.as_ref().next, node);
        self.tail = Some(node);
        self.len = 1;
    }

    /// Attach a detached node `node` to the list, right after `prev`.
    ///
    /// The tail is left where it is, so attaching after the tail makes `node` the
    /// new first element.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    pub(crate) unsafe fn attach_after(
        &mut self,
        mut prev: NonNull<Node<T>>,
        mut node: NonNull<Node<T>>,
    ) {
        node.as_mut().next = prev.as_ref().next;
        prev.as_mut().next = node;
        self.len += 1;
    }

    /// Detach the node right after `prev` from the list, and return it as a box.
    ///
    /// If the detached node was the tail, `prev` becomes the new tail; if it was the
    /// only node, the list becomes empty.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    /// The list must not be empty.
    pub(crate) unsafe fn detach_after(&mut self, mut prev: NonNull<Node<T>>) -> Box<Node<T>> {
        let node_ptr = prev.as_ref().next;
        let node = Box::from_raw(node_ptr.as_ptr());
        self.len -= 1;
        if self.len == 0 {
            // `prev` is the node itself here.
            self.tail = None;
        } else {
            prev.as_mut().next = node.next;
            if self.tail == Some(node_ptr) {
                self.tail = Some(prev);
            }
        }
        node
    }

    /// Detach all nodes from the list as a closed ring, or return `None` if the
    /// list is empty. The list is left empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedRing<T>> {
        let back = self.tail.take()?;
        let len = std::mem::take(&mut self.len);
        Some(DetachedRing::new(back, len))
    }

    /// Splice a detached ring into the list, between the tail and the first node.
    ///
    /// With `at_back`, the back of the ring becomes the new tail (the ring is
    /// appended); otherwise the tail stays and the ring is prepended.
    fn attach_ring(&mut self, ring: DetachedRing<T>, at_back: bool) {
        trace!(spliced = ring.len, len = self.len, at_back, "splice ring");
        match self.tail {
            None => {
                self.tail = Some(ring.back);
                self.len = ring.len;
            }
            // SAFETY: `tail` and `ring.back` belong to two disjoint, well-formed
            // cycles, so exchanging their `next` links merges them into one.
            Some(mut tail) => unsafe {
                let mut back = ring.back;
                let head = tail.as_ref().next;
                tail.as_mut().next = back.as_ref().next;
                back.as_mut().next = head;
                self.len += ring.len;
                if at_back {
                    self.tail = Some(back);
                }
            },
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// assert_eq!(list.len(), 3);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 4);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. The list can be reused afterwards.
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
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.to_string(), "{ 3 }");
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: nodes reachable from the list hold a valid element.
        self.head_node().map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: nodes reachable from the list hold a valid element.
        self.head_node()
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty. The back element is held by the tail, so this is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: nodes reachable from the list hold a valid element.
        self.tail.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: nodes reachable from the list hold a valid element.
        self.tail.map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.tail {
            // SAFETY: `node` was just created and links to itself.
            None => unsafe { self.attach_first(node) },
            // SAFETY: `tail` belongs to the list.
            Some(tail) => unsafe { self.attach_after(tail, node) },
        }
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// list.push_back(3);
    /// list.push_back(4);
    /// assert_eq!(list.to_string(), "{ 0 1 2 3 4 }");
    /// ```
    pub fn push_back(&mut self, elt: T) {
        // The new first node becomes the last one once the tail moves onto it.
        self.push_front(elt);
        self.tail = self.head_node();
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` belongs to the non-empty list.
        Some(unsafe { self.detach_after(tail) }.into_element())
    }

    /// Returns a reference to the element at position `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at < 0` or `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*i*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    ///
    /// let list = List::from([10, 20, 30]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
    /// assert!(list.get(-1).is_err());
    /// ```
    pub fn get(&self, at: isize) -> Result<&T, ListError> {
        let prev = self.element_predecessor(at)?;
        // SAFETY: the successor of a node of the list is a node of the list.
        Ok(unsafe { &prev.as_ref().next.as_ref().element })
    }

    /// Returns a mutable reference to the element at position `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at < 0` or `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// if let Ok(x) = list.get_mut(2) {
    ///     *x *= 5;
    /// }
    /// assert_eq!(list.to_string(), "{ 1 2 15 }");
    /// ```
    pub fn get_mut(&mut self, at: isize) -> Result<&mut T, ListError> {
        let prev = self.element_predecessor(at)?;
        // SAFETY: the successor of a node of the list is a node of the list.
        unsafe {
            let mut node = prev.as_ref().next;
            Ok(&mut node.as_mut().element)
        }
    }

    /// Adds an element at position `at` in the list, shifting later elements
    /// back. Inserting at `len` is the same as [`push_back`](List::push_back).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ListBounds`] if `at < 0` or `at > len`; the list is
    /// left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*i*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    ///
    /// let mut list = List::from([0, 1, 2, 3, 4]);
    ///
    /// assert!(list.insert(3, 69).is_ok());
    /// assert_eq!(list.to_string(), "{ 0 1 2 69 3 4 }");
    ///
    /// assert_eq!(list.insert(-1, 69), Err(ListError::ListBounds { index: -1, len: 6 }));
    /// assert_eq!(list.insert(100, 69), Err(ListError::ListBounds { index: 100, len: 6 }));
    /// assert_eq!(list.to_string(), "{ 0 1 2 69 3 4 }");
    /// ```
    pub fn insert(&mut self, at: isize, elt: T) -> Result<(), ListError> {
        let pos = match usize::try_from(at) {
            Ok(pos) if pos <= self.len => pos,
            _ => {
                return Err(ListError::ListBounds {
                    index: at,
                    len: self.len,
                })
            }
        };
        match self.node_before(pos) {
            // SAFETY: `prev` belongs to the list, and it is not the tail unless
            // `pos == 0`, where linking after the tail is exactly position 0.
            Some(prev) if pos < self.len => unsafe {
                self.attach_after(prev, Node::new_detached(elt))
            },
            // empty list, or `pos == len`
            _ => self.push_back(elt),
        }
        Ok(())
    }

    /// Removes the element at position `at` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at < 0` or `at >= len`; the list
    /// is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*i*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list.to_string(), "{ 2 3 }");
    /// assert_eq!(list.remove(1), Ok(3));
    /// assert_eq!(list.back(), Some(&2));
    /// assert!(list.remove(1).is_err());
    /// ```
    pub fn remove(&mut self, at: isize) -> Result<T, ListError> {
        let prev = self.element_predecessor(at)?;
        // SAFETY: `prev` belongs to the list, which is non-empty.
        Ok(unsafe { self.detach_after(prev) }.into_element())
    }

    /// Provides a forward iterator.
    ///
    /// The iterator walks from the first node for exactly the length of the list
    /// at the time it is created. Every call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(iter.next(), None); // Fused and non-cyclic
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list.to_string(), "{ 10 11 12 }");
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a forward iterator over `(position, element)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from(['a', 'b']);
    /// assert_eq!(Vec::from_iter(list.indexed()), vec![(0, &'a'), (1, &'b')]);
    /// ```
    #[inline]
    pub fn indexed(&self) -> std::iter::Enumerate<Iter<'_, T>> {
        self.iter().enumerate()
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1.to_string(), "{ a b c }");
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(ring) = other.detach_all_nodes() {
            self.attach_ring(ring, true);
        }
    }

    /// Moves all elements from `other` to the beginning of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list2.prepend(&mut list1);
    ///
    /// assert_eq!(list2.to_string(), "{ a b c }");
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(ring) = other.detach_all_nodes() {
            self.attach_ring(ring, false);
        }
    }

    /// Appends a copy of every element of `other` to the end of the list,
    /// leaving `other` untouched.
    ///
    /// `other` is cloned into a disjoint cycle first, which is then spliced
    /// after the tail, so no node is ever shared between the two lists.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the length
    /// of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut other = List::from([4, 5]);
    ///
    /// list.extend_from_list(&other);
    /// other.push_back(6);
    ///
    /// assert_eq!(list.to_string(), "{ 1 2 3 4 5 }");
    /// assert_eq!(other.to_string(), "{ 4 5 6 }");
    /// ```
    pub fn extend_from_list(&mut self, other: &Self)
    where
        T: Clone,
    {
        if other.is_empty() {
            return;
        }
        self.append(&mut other.clone());
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements in order, space separated and braced: `{ 0 1 2 }`.
/// An empty list renders as `{  }`.
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, element) in self.indexed() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str(" }")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a node on the heap that links to itself.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            element,
        });
        let mut node = NonNull::from(Box::leak(node));
        // SAFETY: `node` was just leaked from a box, nothing else points to it.
        unsafe { node.as_mut().next = node };
        node
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedRing<T> {
    fn new(back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            back,
            len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the cycle from the tail and check it closes after exactly `len`
    /// steps, and not before.
    pub(crate) fn assert_cycle(&self) {
        let tail = match self.tail {
            None => {
                assert_eq!(self.len, 0, "a list without tail must be empty");
                return;
            }
            Some(tail) => tail,
        };
        assert!(self.len > 0, "a list with a tail must not be empty");
        let mut node = tail;
        for step in 1..=self.len {
            node = unsafe { node.as_ref().next };
            if step < self.len {
                assert_ne!(node, tail, "cycle closed after {} of {} steps", step, self.len);
            }
        }
        assert_eq!(node, tail, "cycle did not close after {} steps", self.len);
    }
}
