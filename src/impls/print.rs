//! Printing through the underlying value's `Display`.

use core::fmt;

use crate::NamedType;
use crate::skill::{Require, op};

impl<T, Tag, S> fmt::Display for NamedType<T, Tag, S>
where
    T: fmt::Display,
    S: Require<op::Print>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

#[cfg(feature = "std")]
impl<T, Tag, S> NamedType<T, Tag, S> {
    /// Writes the underlying value to `sink`.
    pub fn print<W>(&self, sink: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write + ?Sized,
        T: fmt::Display,
        S: Require<op::Print>,
    {
        write!(sink, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use crate::NamedType;
    use crate::skill::Printable;

    enum Tag {}

    #[test]
    fn display_forwards_flags() {
        let ratio = NamedType::<f64, Tag, Printable>::new(1.23456);
        assert_eq!(format!("{ratio}"), "1.23456");
        assert_eq!(format!("{ratio:.2}"), "1.23");
        assert_eq!(format!("{:>6}", NamedType::<u8, Tag, Printable>::new(7)), "     7");
    }

    #[cfg(feature = "std")]
    #[test]
    fn print_writes_to_the_sink() {
        let mut sink = Vec::new();
        NamedType::<&str, Tag, Printable>::new("meters").print(&mut sink).unwrap();
        assert_eq!(sink, b"meters");
    }
}
