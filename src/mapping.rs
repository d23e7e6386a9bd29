use crate::utils::bitset::Bitset256;

/// Dense child table with one owned slot per possible byte value.
///
/// A 256-bit occupancy index shadows the slots so counting children and
/// walking them in ascending byte order never scans vacant entries.
/// Children are boxed, keeping the table at pointer width per edge.
pub(crate) struct DirectMapping<N> {
    children: Box<[Option<Box<N>>; 256]>,
    occupied: Bitset256,
}

impl<N> DirectMapping<N> {
    pub fn new() -> Self {
        Self {
            children: Box::new(std::array::from_fn(|_| None)),
            occupied: Bitset256::new(),
        }
    }

    #[inline]
    #[allow(dead_code)]
    pub fn add_child(&mut self, key: u8, node: N) {
        self.children[key as usize] = Some(Box::new(node));
        self.occupied.set(key as usize);
    }

    #[inline]
    pub fn seek_child(&self, key: u8) -> Option<&N> {
        self.children[key as usize].as_deref()
    }

    #[inline]
    pub fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        self.children[key as usize].as_deref_mut()
    }

    /// Existing child for `key`, or a freshly inserted one built by `f`.
    pub fn child_or_insert_with(&mut self, key: u8, f: impl FnOnce() -> N) -> &mut N {
        let slot = &mut self.children[key as usize];
        if slot.is_none() {
            self.occupied.set(key as usize);
        }
        &mut **slot.get_or_insert_with(|| Box::new(f()))
    }

    #[inline]
    pub fn delete_child(&mut self, key: u8) -> Option<N> {
        let node = self.children[key as usize].take();
        if node.is_some() {
            self.occupied.unset(key as usize);
        }
        node.map(|boxed| *boxed)
    }

    #[inline]
    pub fn num_children(&self) -> usize {
        self.occupied.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Present children in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.occupied
            .iter()
            .filter_map(|pos| self.children[pos].as_deref().map(|node| (pos as u8, node)))
    }
}

impl<N> Default for DirectMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}
