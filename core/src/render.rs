//! String forms: `[e1, e2]` for element containers, `{k1=v1, k2=v2}` for maps.

use core::fmt::{self, Display, Formatter, Write};

pub(crate) fn write_elements<'a, T: Display + 'a>(
    f: &mut Formatter<'_>,
    elements: impl IntoIterator<Item = &'a T>,
) -> fmt::Result {
    f.write_char('[')?;
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    f.write_char(']')
}

pub(crate) fn write_pairs<'a, K: Display + 'a, V: Display + 'a>(
    f: &mut Formatter<'_>,
    pairs: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> fmt::Result {
    f.write_char('{')?;
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    f.write_char('}')
}
