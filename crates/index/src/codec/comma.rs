use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;

/// A list of strings stored as a single comma-separated value.
///
/// Decoding never fails. An empty string decodes to a list holding one empty
/// string, so the empty list and `[""]` share the same encoding.
///
/// ```rust
/// use fdcl_index::codec::CommaList;
/// let list: CommaList = "armeabi-v7a,x86".parse().unwrap();
/// assert_eq!(list.as_slice(), ["armeabi-v7a", "x86"]);
/// assert_eq!(list.to_string(), "armeabi-v7a,x86");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommaList(Vec<String>);
impl CommaList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|i| i == item)
    }
}

impl FromStr for CommaList {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.split(',').map(str::to_string).collect()))
    }
}
impl Display for CommaList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.join(","))
    }
}

impl Deref for CommaList {
    type Target = [String];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<Vec<String>> for CommaList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}
impl From<CommaList> for Vec<String> {
    fn from(list: CommaList) -> Self {
        list.0
    }
}
impl<'a> IntoIterator for &'a CommaList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
