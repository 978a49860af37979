//! Hashing, available only with the `Hashable` skill.
//!
//! ```compile_fail
//! use std::collections::HashSet;
//! use named_type::prelude::*;
//!
//! enum SerialTag {}
//! type Serial = NamedType<String, SerialTag, Comparable>;
//!
//! let mut set = HashSet::new();
//! set.insert(Serial::new("AA11".into()));
//! ```

use core::hash::{Hash, Hasher};

use crate::NamedType;
use crate::skill::{Require, op};

impl<T, Tag, S> Hash for NamedType<T, Tag, S>
where
    T: Hash,
    S: Require<op::Hash>,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::NamedType;
    use crate::skill::{Comparable, Hashable};

    enum SerialTag {}
    type Serial = NamedType<String, SerialTag, (Comparable, Hashable)>;

    fn digest<X: Hash>(value: &X) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn hash_matches_the_underlying_hash() {
        let serial = Serial::new("AA11".into());
        assert_eq!(digest(&serial), digest(&String::from("AA11")));
        assert_eq!(digest(&serial), digest(&Serial::new("AA11".into())));
    }

    #[test]
    fn usable_as_hash_map_key() {
        let mut by_serial: HashMap<Serial, i32> = HashMap::new();
        by_serial.insert(Serial::new("AA11".into()), 10);
        by_serial.insert(Serial::new("BB22".into()), 20);
        let cc33 = Serial::new("CC33".into());
        by_serial.insert(cc33.clone(), 30);

        assert_eq!(by_serial[&Serial::new("AA11".into())], 10);
        assert_eq!(by_serial[&Serial::new("BB22".into())], 20);
        assert_eq!(by_serial[&cc33], 30);
    }
}
