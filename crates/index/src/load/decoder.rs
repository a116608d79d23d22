//! Field-by-field decoding of the `index.xml` element tree.

use std::io::BufRead;
use std::str::FromStr;

use exn::ResultExt;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::instrument;

use crate::codec::{CalendarDate, CommaList, Hash, HexBytes};
use crate::error::{ErrorKind, Result};
use crate::models::{App, Package, Repository, RepositoryIndex};

/// Pulls events from an XML document and maps elements and attributes onto
/// the index models.
///
/// Unknown elements are skipped along with their content. Text fields take the
/// character data directly inside their element; nested elements are ignored.
/// When a scalar element is repeated, the last one wins.
pub(crate) struct Decoder<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}
impl<R: BufRead> Decoder<R> {
    pub(crate) fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().expand_empty_elements = true;
        Self { reader, buf: Vec::new() }
    }

    /// Decodes the first element of the document as the index root. Anything
    /// after the root closes is never read.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn index(mut self) -> Result<RepositoryIndex> {
        loop {
            match self.next()? {
                Event::Start(_) => break,
                Event::Eof => exn::bail!(ErrorKind::MissingRoot),
                // Declaration, doctype, comments, whitespace.
                _ => {},
            }
        }
        let mut index = RepositoryIndex::default();
        self.children(|decoder, start| {
            match start.local_name().as_ref() {
                b"repo" => index.repo = decoder.repo(start)?,
                b"application" => index.apps.push(decoder.application()?),
                _ => decoder.skip()?,
            }
            Ok(())
        })?;
        Ok(index)
    }

    fn repo(&mut self, start: &BytesStart<'_>) -> Result<Repository> {
        let mut repo = Repository::default();
        for attribute in start.attributes() {
            let attribute = attribute.or_raise(|| self.malformed("invalid attribute"))?;
            let value = attribute.unescape_value().or_raise(|| self.malformed("invalid attribute value"))?;
            match attribute.key.local_name().as_ref() {
                b"name" => repo.name = value.into_owned(),
                b"pubkey" => repo.pubkey = value.into_owned(),
                b"timestamp" => repo.timestamp = number("timestamp", &value)?,
                b"url" => repo.url = value.into_owned(),
                b"version" => repo.version = number("version", &value)?,
                b"maxage" => repo.max_age = number("maxage", &value)?,
                _ => {},
            }
        }
        self.children(|decoder, start| {
            match start.local_name().as_ref() {
                b"description" => repo.description = decoder.text()?,
                _ => decoder.skip()?,
            }
            Ok(())
        })?;
        Ok(repo)
    }

    #[instrument(level = "trace", skip(self))]
    fn application(&mut self) -> Result<App> {
        let mut app = App::default();
        self.children(|decoder, start| {
            match start.local_name().as_ref() {
                b"id" => app.id = decoder.text()?,
                b"name" => app.name = decoder.text()?,
                b"summary" => app.summary = decoder.text()?,
                b"desc" => app.description = decoder.text()?,
                b"license" => app.license = decoder.text()?,
                b"categories" => app.categories = decoder.comma_list()?,
                b"web" => app.links.website = decoder.text()?,
                b"source" => app.links.source = decoder.text()?,
                b"tracker" => app.links.tracker = decoder.text()?,
                b"changelog" => app.links.changelog = decoder.text()?,
                b"donate" => app.links.donate = decoder.text()?,
                b"bitcoin" => app.links.bitcoin = decoder.text()?,
                b"litecoin" => app.links.litecoin = decoder.text()?,
                b"dogecoin" => app.links.dogecoin = decoder.text()?,
                b"flattr" => app.links.flattr = decoder.text()?,
                b"marketversion" => app.market_version = decoder.text()?,
                b"marketvercode" => app.market_version_code = decoder.number("marketvercode")?,
                b"package" => app.packages.push(decoder.package()?),
                _ => decoder.skip()?,
            }
            Ok(())
        })?;
        Ok(app)
    }

    fn package(&mut self) -> Result<Package> {
        let mut package = Package::default();
        self.children(|decoder, start| {
            match start.local_name().as_ref() {
                b"version" => package.version_name = decoder.text()?,
                b"versioncode" => package.version_code = decoder.number("versioncode")?,
                b"size" => package.size = decoder.number("size")?,
                b"sdkver" => package.min_sdk = decoder.number("sdkver")?,
                b"maxsdkver" => package.max_sdk = decoder.number("maxsdkver")?,
                b"nativecode" => package.abis = decoder.comma_list()?,
                b"apkname" => package.apk_name = decoder.text()?,
                b"srcname" => package.src_name = Some(decoder.text()?),
                b"sig" => package.signature = decoder.scalar::<HexBytes>("sig")?,
                b"added" => package.added = Some(decoder.scalar::<CalendarDate>("added")?),
                b"permissions" => package.permissions = decoder.comma_list()?,
                b"features" => package.features = decoder.comma_list()?,
                b"hash" => package.hash = Some(decoder.hash(start)?),
                _ => decoder.skip()?,
            }
            Ok(())
        })?;
        Ok(package)
    }

    fn hash(&mut self, start: &BytesStart<'_>) -> Result<Hash> {
        let kind = match start.try_get_attribute("type").or_raise(|| self.malformed("invalid attribute"))? {
            Some(attribute) => attribute
                .unescape_value()
                .or_raise(|| self.malformed("invalid attribute value"))?
                .into_owned(),
            None => String::new(),
        };
        Ok(Hash {
            kind,
            digest: self.scalar::<HexBytes>("hash")?,
        })
    }

    /// Calls `visit` for every child element until the current element closes.
    /// `visit` must consume the child it's handed, by decoding or skipping it.
    fn children<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(&mut Self, &BytesStart<'static>) -> Result<()>,
    {
        loop {
            match self.next()? {
                Event::Start(start) => visit(self, &start)?,
                Event::End(_) => return Ok(()),
                Event::Eof => exn::bail!(self.malformed("unexpected end of document")),
                _ => {},
            }
        }
    }

    /// Collects the character data directly inside the current element.
    fn text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next()? {
                Event::Text(chars) => {
                    text.push_str(&chars.unescape().or_raise(|| self.malformed("invalid character data"))?);
                },
                Event::CData(cdata) => {
                    text.push_str(std::str::from_utf8(&cdata).or_raise(|| self.malformed("invalid CDATA"))?);
                },
                Event::Start(_) => self.skip()?,
                Event::End(_) => return Ok(text),
                Event::Eof => exn::bail!(self.malformed("unexpected end of document")),
                _ => {},
            }
        }
    }

    fn comma_list(&mut self) -> Result<CommaList> {
        let Ok(list) = self.text()?.parse::<CommaList>();
        Ok(list)
    }

    fn number<T>(&mut self, field: &'static str) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let text = self.text()?;
        number(field, &text)
    }

    fn scalar<T>(&mut self, field: &'static str) -> Result<T>
    where
        T: FromStr<Err = crate::error::Error>,
    {
        let text = self.text()?;
        text.parse::<T>().or_raise(|| ErrorKind::InvalidField { field, value: text.clone() })
    }

    /// Consumes the rest of the current element, including any children.
    fn skip(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) if depth == 0 => return Ok(()),
                Event::End(_) => depth -= 1,
                Event::Eof => exn::bail!(self.malformed("unexpected end of document")),
                _ => {},
            }
        }
    }

    fn next(&mut self) -> Result<Event<'static>> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf).map(Event::into_owned);
        match event {
            Ok(event) => Ok(event),
            Err(error @ quick_xml::Error::Io(_)) => Err(error).or_raise(|| ErrorKind::Io),
            Err(error) => {
                let kind = self.malformed(&error.to_string());
                Err(error).or_raise(|| kind)
            },
        }
    }

    fn malformed(&self, reason: &str) -> ErrorKind {
        ErrorKind::MalformedXml(format!("{reason} at byte {}", self.reader.buffer_position()))
    }
}

/// Parses an integer field. Surrounding whitespace is ignored, and an empty
/// value is zero.
fn number<T>(field: &'static str, value: &str) -> Result<T>
where
    T: FromStr + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse::<T>().or_raise(|| ErrorKind::InvalidField {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(xml: &str) -> Result<RepositoryIndex> {
        Decoder::new(xml.as_bytes()).index()
    }

    #[rstest]
    #[case("42", 42)]
    #[case(" 42\n", 42)]
    #[case("", 0)]
    #[case("   ", 0)]
    fn test_number(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(number::<u64>("versioncode", input).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("1.5")]
    fn test_number_invalid(#[case] input: &str) {
        let err = number::<u64>("versioncode", input).unwrap_err();
        assert_eq!(*err, ErrorKind::InvalidField { field: "versioncode", value: input.to_string() });
    }

    #[test]
    fn test_text_ignores_nested_elements() {
        let index = decode("<fdroid><application><name>Note<b>ignored</b>pad</name></application></fdroid>").unwrap();
        assert_eq!(index.apps[0].name, "Notepad");
    }

    #[test]
    fn test_text_decodes_entities_and_cdata() {
        let index = decode(
            "<fdroid><application><summary>Tom &amp; Jerry</summary>\
             <desc><![CDATA[<p>Hi</p>]]></desc></application></fdroid>",
        )
        .unwrap();
        assert_eq!(index.apps[0].summary, "Tom & Jerry");
        assert_eq!(index.apps[0].description, "<p>Hi</p>");
    }

    #[test]
    fn test_last_repeated_field_wins() {
        let index = decode("<fdroid><application><name>First</name><name>Second</name></application></fdroid>").unwrap();
        assert_eq!(index.apps[0].name, "Second");
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let index = decode(
            "<fdroid><extra><application><id>nested.not.an.app</id></application></extra>\
             <application><id>real</id><antifeatures><af>Ads</af></antifeatures></application></fdroid>",
        )
        .unwrap();
        assert_eq!(index.apps.len(), 1);
        assert_eq!(index.apps[0].id, "real");
    }

    #[test]
    fn test_self_closing_elements() {
        let index = decode("<fdroid><application><id>a</id><license/><categories/></application></fdroid>").unwrap();
        assert_eq!(index.apps[0].license, "");
        assert_eq!(index.apps[0].categories.as_slice(), [""]);
    }

    #[test]
    fn test_absent_comma_list_is_empty() {
        let index = decode("<fdroid><application><id>a</id></application></fdroid>").unwrap();
        assert!(index.apps[0].categories.is_empty());
    }

    #[test]
    fn test_stops_after_root() {
        let index = decode("<fdroid><application><id>a</id></application></fdroid><trailing garbage").unwrap();
        assert_eq!(index.apps.len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("<?xml version=\"1.0\"?>")]
    #[case("<!-- nothing here -->")]
    fn test_missing_root(#[case] xml: &str) {
        assert_eq!(*decode(xml).unwrap_err(), ErrorKind::MissingRoot);
    }

    #[rstest]
    #[case("<fdroid><application>")]
    #[case("<fdroid><application><id>a</name></application></fdroid>")]
    #[case("<fdroid><application><id>&bogus;</id></application></fdroid>")]
    #[case("<fdroid><repo name=\"x></repo></fdroid>")]
    fn test_malformed(#[case] xml: &str) {
        let err = decode(xml).unwrap_err();
        assert!(matches!(*err, ErrorKind::MalformedXml(_)), "unexpected error: {:?}", *err);
    }
}
