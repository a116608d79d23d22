/// External links and donation addresses attached to an app.
///
/// Every field is empty when the index doesn't provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Links {
    pub website: String,
    pub source: String,
    pub tracker: String,
    pub changelog: String,
    pub donate: String,
    pub bitcoin: String,
    pub litecoin: String,
    pub dogecoin: String,
    pub flattr: String,
}
impl Links {
    /// Returns the non-empty links, labelled by kind, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("website", self.website.as_str()),
            ("source", self.source.as_str()),
            ("tracker", self.tracker.as_str()),
            ("changelog", self.changelog.as_str()),
            ("donate", self.donate.as_str()),
            ("bitcoin", self.bitcoin.as_str()),
            ("litecoin", self.litecoin.as_str()),
            ("dogecoin", self.dogecoin.as_str()),
            ("flattr", self.flattr.as_str()),
        ]
        .into_iter()
        .filter(|(_, link)| !link.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_skips_empty_links() {
        let links = Links {
            website: "https://example.org".to_string(),
            tracker: "https://example.org/issues".to_string(),
            ..Default::default()
        };
        let collected: Vec<_> = links.iter().collect();
        assert_eq!(
            collected,
            [("website", "https://example.org"), ("tracker", "https://example.org/issues")]
        );
    }
}
