//! Decoding of the storage slot (`name1=value1; name2=value2`).

use crate::cookies::encoding::decode;

/// A raw `name=value` segment of the storage slot, still percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Segment<'a> {
    /// Split one `;`-separated piece of the slot.
    ///
    /// Leading whitespace is dropped (hosts put a space after `;`), trailing
    /// whitespace is kept. A piece without `=` is all name with an empty value.
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim_start();
        match raw.split_once('=') {
            Some((name, value)) => Segment { name, value },
            None => Segment {
                name: raw,
                value: "",
            },
        }
    }

    pub fn decoded_name(&self) -> String {
        decode(self.name)
    }

    pub fn decoded_value(&self) -> String {
        decode(self.value)
    }

    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }
}

/// Iterate the non-empty segments of a storage slot in order.
pub fn segments(slot: &str) -> impl Iterator<Item = Segment<'_>> {
    slot.split(';')
        .map(Segment::parse)
        .filter(|segment| !segment.is_empty())
}

/// Decoded value of the first segment whose decoded name equals `name`.
pub fn find(slot: &str, name: &str) -> Option<String> {
    segments(slot)
        .find(|segment| segment.decoded_name() == name)
        .map(|segment| segment.decoded_value())
}

/// All decoded pairs in slot order; duplicates are kept.
pub fn pairs(slot: &str) -> impl Iterator<Item = (String, String)> + '_ {
    segments(slot).map(|segment| (segment.decoded_name(), segment.decoded_value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_split() {
        assert_eq!(
            Segment::parse(" b=2"),
            Segment {
                name: "b",
                value: "2"
            }
        );
        assert_eq!(
            Segment::parse("k=a=b"),
            Segment {
                name: "k",
                value: "a=b"
            }
        );
    }

    #[test]
    fn test_segment_without_equals() {
        assert_eq!(
            Segment::parse(" flag"),
            Segment {
                name: "flag",
                value: ""
            }
        );
    }

    #[test]
    fn test_trailing_whitespace_is_significant() {
        assert_eq!(Segment::parse("  a =1").name, "a ");
    }

    #[test]
    fn test_find() {
        let slot = "a=1; b=2;c=3";
        assert_eq!(find(slot, "a").as_deref(), Some("1"));
        assert_eq!(find(slot, "b").as_deref(), Some("2"));
        assert_eq!(find(slot, "c").as_deref(), Some("3"));
        assert_eq!(find(slot, "d"), None);
    }

    #[test]
    fn test_find_first_match_wins() {
        assert_eq!(find("a=1; a=2", "a").as_deref(), Some("1"));
    }

    #[test]
    fn test_find_decodes_name_and_value() {
        let slot = "b%C3%A1%C3%B1%C3%A2%C3%B1%C3%A2=%C2%BFy%C3%A9ll%C3%B3w?";
        assert_eq!(find(slot, "báñâñâ").as_deref(), Some("¿yéllów?"));
    }

    #[test]
    fn test_empty_slot() {
        assert_eq!(find("", "a"), None);
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("a=1;").count(), 1);
    }

    #[test]
    fn test_pairs_keep_duplicates() {
        let collected: Vec<_> = pairs("a=1; b; a=3").collect();
        assert_eq!(
            collected,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), String::new()),
                ("a".to_string(), "3".to_string()),
            ]
        );
    }
}
