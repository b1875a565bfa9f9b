// Byte trie stored in a single arena
//
// Nodes are addressed by index. A node that has children owns a 256-entry
// child table in a separate arena; leaves own none. Index 0 is the root and
// is never anyone's child, so 0 doubles as "no child".

const NO_TABLE: u32 = 0;

#[derive(Debug, Clone, Copy, Default)]
struct Node {
    /// 1-based index into `tables`, or `NO_TABLE`.
    table: u32,
    /// Payload, 0 = none.
    value: u32,
}

#[derive(Debug, Clone)]
pub struct ByteTrie {
    nodes: Vec<Node>,
    tables: Vec<[u32; 256]>,
}

impl Default for ByteTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteTrie {
    pub const ROOT: u32 = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            tables: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Child of `node` along `byte`.
    #[inline]
    pub fn next(&self, node: u32, byte: u8) -> Option<u32> {
        let table = self.nodes[node as usize].table;
        if table == NO_TABLE {
            return None;
        }
        match self.tables[table as usize - 1][byte as usize] {
            0 => None,
            child => Some(child),
        }
    }

    /// Payload stored at `node`, if any.
    #[inline]
    pub fn value(&self, node: u32) -> Option<u32> {
        match self.nodes[node as usize].value {
            0 => None,
            v => Some(v),
        }
    }

    /// Inserts `key` with a non-zero `value`. An existing value is kept.
    pub fn insert(&mut self, key: &[u8], value: u32) {
        debug_assert_ne!(value, 0);
        let mut node = Self::ROOT;
        for &byte in key {
            node = match self.next(node, byte) {
                Some(child) => child,
                None => self.add_child(node, byte),
            };
        }
        let slot = &mut self.nodes[node as usize].value;
        if *slot == 0 {
            *slot = value;
        }
    }

    /// Node reached by walking `key` from the root.
    pub fn find(&self, key: &[u8]) -> Option<u32> {
        key.iter()
            .try_fold(Self::ROOT, |node, &byte| self.next(node, byte))
    }

    fn add_child(&mut self, parent: u32, byte: u8) -> u32 {
        let child = self.nodes.len() as u32;
        self.nodes.push(Node::default());
        if self.nodes[parent as usize].table == NO_TABLE {
            self.tables.push([0; 256]);
            self.nodes[parent as usize].table = self.tables.len() as u32;
        }
        let table = self.nodes[parent as usize].table as usize - 1;
        self.tables[table][byte as usize] = child;
        child
    }
}
