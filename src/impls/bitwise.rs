//! Bitwise operators.

use super::{binary_operator, unary_operator};

binary_operator!(
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor,
    Shl::shl,
    Shr::shr,
);

unary_operator!(Not::not);

#[cfg(test)]
mod tests {
    use crate::NamedType;
    use crate::skill::{
        BitWiseAndable, BitWiseInvertable, BitWiseLeftShiftable, BitWiseOrable,
        BitWiseRightShiftable, BitWiseXorable,
    };

    enum Tag {}

    #[test]
    fn invert() {
        let bits = NamedType::<i32, Tag, BitWiseInvertable>::new(13);
        assert_eq!(*(!bits).get(), !13);
    }

    #[test]
    fn and_or_xor() {
        let mut and = NamedType::<i32, Tag, BitWiseAndable>::new(2);
        assert_eq!(*(and & NamedType::new(64)).get(), 2 & 64);
        and &= NamedType::new(64);
        assert_eq!(*and.get(), 0);

        let mut or = NamedType::<i32, Tag, BitWiseOrable>::new(2);
        assert_eq!(*(or | NamedType::new(64)).get(), 66);
        or |= NamedType::new(64);
        assert_eq!(*or.get(), 66);

        let mut xor = NamedType::<u8, Tag, BitWiseXorable>::new(0b1010);
        assert_eq!(*(&xor ^ &NamedType::new(0b0110)).get(), 0b1100);
        xor ^= NamedType::new(0b1010);
        assert_eq!(*xor.get(), 0);
    }

    #[test]
    fn shifts() {
        let mut left = NamedType::<i32, Tag, BitWiseLeftShiftable>::new(2);
        assert_eq!(*(left << NamedType::new(3)).get(), 16);
        left <<= NamedType::new(3);
        assert_eq!(*left.get(), 16);

        let mut right = NamedType::<i32, Tag, BitWiseRightShiftable>::new(16);
        assert_eq!(*(right >> NamedType::new(3)).get(), 2);
        right >>= NamedType::new(3);
        assert_eq!(*right.get(), 2);
    }
}
