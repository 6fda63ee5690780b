use std::ptr;

/// A node in the doubly linked list
struct Node<T> {
    data: T,
    prev: *mut Node<T>,
    next: *mut Node<T>,
}

impl<T> Node<T> {
    fn new(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        })
    }
}

/// A doubly linked list with positional access, implemented with raw pointers
pub struct List<T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    length: usize,
}

impl<T> List<T> {
    /// Creates a new empty doubly linked list
    pub fn new() -> Self {
        List {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            length: 0,
        }
    }

    /// Returns the length of the list
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Adds an element to the front of the list
    pub fn push_front(&mut self, data: T) {
        let new_node = Box::into_raw(Node::new(data));

        unsafe {
            if self.head.is_null() {
                // Empty list
                self.tail = new_node;
            } else {
                (*self.head).prev = new_node;
                (*new_node).next = self.head;
            }
            self.head = new_node;
        }

        self.length += 1;
    }

    /// Adds an element to the back of the list
    pub fn push_back(&mut self, data: T) {
        let new_node = Box::into_raw(Node::new(data));

        unsafe {
            if self.tail.is_null() {
                // Empty list
                self.head = new_node;
            } else {
                (*self.tail).next = new_node;
                (*new_node).prev = self.tail;
            }
            self.tail = new_node;
        }

        self.length += 1;
    }

    /// Removes and returns the element from the front of the list
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }

        unsafe {
            let old_head = self.head;
            self.head = (*old_head).next;

            if self.head.is_null() {
                // This was the only node
                self.tail = ptr::null_mut();
            } else {
                (*self.head).prev = ptr::null_mut();
            }

            self.length -= 1;
            let boxed_node = Box::from_raw(old_head);
            Some(boxed_node.data)
        }
    }

    /// Returns the node at `pos`, walking from whichever end is nearer.
    /// `pos` must be in bounds.
    fn node_at(&self, pos: usize) -> *mut Node<T> {
        debug_assert!(pos < self.length);

        unsafe {
            if pos < self.length / 2 {
                let mut node = self.head;
                for _ in 0..pos {
                    node = (*node).next;
                }
                node
            } else {
                let mut node = self.tail;
                for _ in 0..(self.length - 1 - pos) {
                    node = (*node).prev;
                }
                node
            }
        }
    }

    /// Returns a reference to the element at `pos`, or None if out of bounds.
    /// Walks from the head for the first half, from the tail for the second.
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.length {
            return None;
        }
        unsafe { Some(&(*self.node_at(pos)).data) }
    }

    /// Inserts an element before position `pos`; `pos == len` appends.
    ///
    /// # Panics
    /// Panics if `pos > len`.
    pub fn insert_at(&mut self, pos: usize, data: T) {
        assert!(pos <= self.length, "insert position out of bounds");

        if pos == 0 {
            return self.push_front(data);
        }
        if pos == self.length {
            return self.push_back(data);
        }

        let at = self.node_at(pos);
        let new_node = Box::into_raw(Node::new(data));

        unsafe {
            // Splice between `at` and its predecessor (both exist here)
            let before = (*at).prev;
            (*new_node).prev = before;
            (*new_node).next = at;
            (*before).next = new_node;
            (*at).prev = new_node;
        }

        self.length += 1;
    }

    /// Removes and returns the element at `pos`, or None if out of bounds.
    /// O(1) at either end, forward scan otherwise.
    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        if pos >= self.length {
            return None;
        }
        if pos == 0 {
            return self.pop_front();
        }

        let node = if pos == self.length - 1 {
            self.tail
        } else {
            unsafe {
                let mut node = self.head;
                for _ in 0..pos {
                    node = (*node).next;
                }
                node
            }
        };

        unsafe {
            let prev = (*node).prev;
            let next = (*node).next;

            // pos > 0, so a predecessor always exists
            (*prev).next = next;

            if next.is_null() {
                // Removing tail
                self.tail = prev;
            } else {
                (*next).prev = prev;
            }

            self.length -= 1;
            let boxed_node = Box::from_raw(node);
            Some(boxed_node.data)
        }
    }

    /// Removes all elements from the list
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a reference to the front element without removing it
    pub fn front(&self) -> Option<&T> {
        if self.head.is_null() {
            None
        } else {
            unsafe { Some(&(*self.head).data) }
        }
    }

    /// Returns a reference to the back element without removing it
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_null() {
            None
        } else {
            unsafe { Some(&(*self.tail).data) }
        }
    }

    /// Returns an iterator over the list that borrows the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns a mutable iterator over the list that borrows the list mutably
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

/// An iterator over the doubly linked list that consumes the list
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An iterator over the doubly linked list that borrows the list
pub struct Iter<'a, T> {
    current: *mut Node<T>,
    _marker: std::marker::PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }

        unsafe {
            let data = &(*self.current).data;
            self.current = (*self.current).next;
            Some(data)
        }
    }
}

/// A mutable iterator over the doubly linked list that borrows the list mutably
pub struct IterMut<'a, T> {
    current: *mut Node<T>,
    _marker: std::marker::PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }

        unsafe {
            let data = &mut (*self.current).data;
            self.current = (*self.current).next;
            Some(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_default() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        let list: List<i32> = List::default();
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_and_pop() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_get_both_halves() {
        let mut list = List::new();
        for i in 0..7 {
            list.push_back(i);
        }

        // First half walks from the head, second half from the tail
        for i in 0..7 {
            assert_eq!(list.get(i), Some(&i));
        }
        assert_eq!(list.get(7), None);
    }

    #[test]
    fn test_insert_at() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(3);

        list.insert_at(1, 2); // middle
        list.insert_at(0, 0); // front
        list.insert_at(4, 4); // back (pos == len)

        let vec: Vec<&i32> = list.iter().collect();
        assert_eq!(vec, vec![&0, &1, &2, &3, &4]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    #[should_panic(expected = "insert position out of bounds")]
    fn test_insert_at_out_of_bounds() {
        let mut list = List::new();
        list.push_back(1);
        list.insert_at(2, 2);
    }

    #[test]
    fn test_remove_at() {
        let mut list = List::new();
        for i in 1..=5 {
            list.push_back(i);
        }

        assert_eq!(list.remove_at(2), Some(3)); // middle
        assert_eq!(list.remove_at(3), Some(5)); // tail
        assert_eq!(list.remove_at(0), Some(1)); // head

        let vec: Vec<&i32> = list.iter().collect();
        assert_eq!(vec, vec![&2, &4]);

        assert_eq!(list.remove_at(2), None); // out of bounds
        assert_eq!(list.remove_at(0), Some(2));
        assert_eq!(list.remove_at(0), Some(4));
        assert!(list.is_empty());
    }

    #[test]
    fn test_front_and_back() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);

        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.len(), 2); // Should not consume
    }

    #[test]
    fn test_iterators() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        // iter
        let vec: Vec<&i32> = list.iter().collect();
        assert_eq!(vec, vec![&1, &2, &3]);
        assert_eq!(list.len(), 3);

        // iter_mut
        for item in list.iter_mut() {
            *item *= 2;
        }
        let vec: Vec<&i32> = list.iter().collect();
        assert_eq!(vec, vec![&2, &4, &6]);

        // into_iter
        let vec: Vec<i32> = list.into_iter().collect();
        assert_eq!(vec, vec![2, 4, 6]);
    }

    #[test]
    fn test_clear() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn test_drop() {
        let mut list = List::new();
        for i in 0..100 {
            list.push_back(i);
        }
        // Cleanup handled by Drop
    }
}
