use parking_lot::Mutex;
use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};
use tracing::debug;

/// Enlace nulo de la lista doblemente enlazada.
const NIL: usize = usize::MAX;

/// Nodo de la arena: la lista de recencia se enlaza por índices, no por punteros.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Estado protegido por el lock: tabla de índices + lista de recencia.
///
/// `head` es el más recientemente usado, `tail` el menos.
struct LruState<K, V> {
    capacity: usize,
    index: HashMap<K, usize>,
    nodes: Vec<Node<K, V>>,
    head: usize,
    tail: usize,
}

impl<K, V> LruState<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        }
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn touch(&mut self, idx: usize) {
        if self.head != idx {
            self.detach(idx);
            self.push_front(idx);
        }
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.touch(idx);
        Some(&self.nodes[idx].value)
    }

    fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        if let Some(&idx) = self.index.get(&key) {
            self.nodes[idx].value = value;
            self.touch(idx);
            return;
        }

        let idx = if self.index.len() >= self.capacity {
            // Lleno: se reutiliza el slot del LRU para la nueva entrada
            let victim = self.tail;
            self.detach(victim);
            let node = &mut self.nodes[victim];
            let evicted = std::mem::replace(&mut node.key, key.clone());
            node.value = value;
            self.index.remove(&evicted);
            debug!("🗑️ Cache eviction: {:?}", evicted);
            victim
        } else {
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        };

        self.push_front(idx);
        self.index.insert(key, idx);
    }

    fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while cursor != NIL {
            keys.push(self.nodes[cursor].key.clone());
            cursor = self.nodes[cursor].next;
        }
        keys
    }
}

/// Bounded, thread-safe LRU cache.
///
/// Entries live in an arena of nodes linked by index, addressed through a
/// `HashMap<K, usize>`, so `get` and `put` are O(1) amortized. A single
/// `parking_lot::Mutex` guards the whole structure: `get` reorders the recency
/// list, so every access is exclusive.
///
/// Cloning the cache yields another handle to the same store.
///
/// A capacity of `0` disables the cache: `put` stores nothing and every `get`
/// misses.
pub struct LRUCache<K, V> {
    state: Arc<Mutex<LruState<K, V>>>,
}

impl<K, V> LRUCache<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            debug!("⚠️ LRU cache creado con capacidad 0: caché deshabilitado");
        }

        Self {
            state: Arc::new(Mutex::new(LruState::new(capacity))),
        }
    }

    /// Returns a clone of the value and marks the entry most-recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        self.state.lock().get(key).cloned()
    }

    /// Inserts or overwrites `key`, evicting the least-recently used entry
    /// when a new key arrives at capacity. Updates never evict.
    pub fn put(&self, key: K, value: V) {
        self.state.lock().put(key, value);
    }

    pub fn len(&self) -> usize {
        self.state.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.state.lock().capacity
    }

    /// Keys from most- to least-recently used.
    pub fn keys(&self) -> Vec<K> {
        self.state.lock().keys()
    }
}

impl<K, V> Clone for LRUCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<K, V> fmt::Debug for LRUCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LRUCache")
            .field("capacity", &state.capacity)
            .field("len", &state.index.len())
            .finish()
    }
}
