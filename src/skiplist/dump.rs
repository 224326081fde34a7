use core::fmt;

use super::SkipList;
use crate::raw::RawSkipList;

impl SkipList {
    /// Renders the tower structure for debugging.
    ///
    /// One line per active level, highest first: the header's span, then the
    /// value and span of every element on that level, ending in `nil`. The
    /// layout is meant for people and may change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert(1, "one");
    /// println!("{}", list.dump());
    /// ```
    pub fn dump(&self) -> Dump<'_> {
        Dump { list: &self.raw }
    }
}

/// Level-by-level rendering of a [`SkipList`], created by [`SkipList::dump`].
#[must_use = "`Dump` only renders when formatted"]
pub struct Dump<'a> {
    list: &'a RawSkipList,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.list.header();
        for i in (0..self.list.level()).rev() {
            write!(f, "{i} [hdr span:{}] -> ", header[i].span)?;

            let mut cursor = header[i].next;
            while let Some(handle) = cursor {
                let node = self.list.node(handle);
                let link = node.levels()[i];
                write!(f, "[val:{} span:{}] -> ", node.value().escape_ascii(), link.span)?;
                cursor = link.next;
            }
            writeln!(f, "nil")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
