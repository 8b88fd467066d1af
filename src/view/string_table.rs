/// Location of one string in a [`StringTable`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringEntry {
    pub start: usize,
    pub len: usize,
}

/// Strings packed into one buffer, addressed by index.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: String,
    table: Vec<StringEntry>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str) -> usize {
        let index = self.table.len();
        self.table.push(StringEntry {
            start: self.strings.len(),
            len: text.len(),
        });
        self.strings.push_str(text);
        index
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<StringEntry> {
        self.table.get(index).copied()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        let entry = self.table.get(index)?;
        self.strings.get(entry.start..entry.start + entry.len)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.table
            .iter()
            .filter_map(|entry| self.strings.get(entry.start..entry.start + entry.len))
    }
}

impl<'s> FromIterator<&'s str> for StringTable {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        let mut table = Self::new();
        for text in iter {
            table.push(text);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::{StringEntry, StringTable};

    #[test]
    fn entries_index_into_shared_buffer() {
        let table: StringTable = ["Sword", "", "Bow"].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("Sword"));
        assert_eq!(table.get(1), Some(""));
        assert_eq!(table.entry(2), Some(StringEntry { start: 5, len: 3 }));
        assert_eq!(table.get(3), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), ["Sword", "", "Bow"]);
    }
}
