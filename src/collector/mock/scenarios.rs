//! Pre-built statistics server scenarios for testing.
//!
//! Documents follow the layout of BIND 9's version 2 XML statistics
//! (`statistics-channels`), trimmed to the sections the plugin reads.

use super::source::MockSource;

/// URL every scenario serves its document under.
pub const SCENARIO_URL: &str = "http://127.0.0.2:8053/";

/// Typical server: a handful of query types, memory summary present.
const TYPICAL_SERVER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="/bind9.xsl"?>
<isc version="1.0">
  <bind>
    <statistics version="2.2">
      <views>
        <view>
          <name>_default</name>
          <rdtype><name>A</name><counter>881</counter></rdtype>
        </view>
      </views>
      <server>
        <boot-time>2012-04-01T10:00:00Z</boot-time>
        <current-time>2012-04-02T10:00:00Z</current-time>
        <requests>
          <opcode><name>QUERY</name><counter>2345</counter></opcode>
        </requests>
        <queries-in>
          <rdtype><name>A</name><counter>1200</counter></rdtype>
          <rdtype><name>NS</name><counter>31</counter></rdtype>
          <rdtype><name>SOA</name><counter>54</counter></rdtype>
          <rdtype><name>PTR</name><counter>310</counter></rdtype>
          <rdtype><name>MX</name><counter>12</counter></rdtype>
          <rdtype><name>TXT</name><counter>8</counter></rdtype>
          <rdtype><name>AAAA</name><counter>690</counter></rdtype>
          <rdtype><name>SRV</name><counter>5</counter></rdtype>
          <rdtype><name>DS</name><counter>2</counter></rdtype>
          <rdtype><name>DNSKEY</name><counter>3</counter></rdtype>
          <rdtype><name>SPF</name><counter>4</counter></rdtype>
          <rdtype><name>ANY</name><counter>29</counter></rdtype>
        </queries-in>
        <nsstat><name>Requestv4</name><counter>2345</counter></nsstat>
      </server>
      <memory>
        <contexts>
          <context><id>0x7f1</id><name>main</name><total>1024</total><inuse>512</inuse></context>
        </contexts>
        <summary>
          <TotalUse>123456</TotalUse>
          <InUse>98765</InUse>
          <BlockSize>262144</BlockSize>
          <ContextSize>4096</ContextSize>
          <Lost>0</Lost>
        </summary>
      </memory>
    </statistics>
  </bind>
</isc>
"#;

/// The A/AAAA/BOGUS document used for the basic aggregation scenario.
const SIMPLE_QUERIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<isc version="1.0"><bind><statistics version="2.2">
  <server>
    <queries-in>
      <rdtype><name>A</name><counter>100</counter></rdtype>
      <rdtype><name>AAAA</name><counter>50</counter></rdtype>
      <rdtype><name>BOGUS</name><counter>7</counter></rdtype>
    </queries-in>
  </server>
  <memory><summary><TotalUse>123456</TotalUse><InUse>98765</InUse></summary></memory>
</statistics></bind></isc>
"#;

/// A freshly started server: statistics sections exist but are empty.
const IDLE_SERVER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<isc version="1.0"><bind><statistics version="2.2">
  <server><queries-in/></server>
  <memory/>
</statistics></bind></isc>
"#;

/// Response cut off mid-document.
const TRUNCATED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<isc version="1.0"><bind><statistics version="2.2">
  <server><queries-in><rdtype><name>A</name><counter>12"#;

#[allow(dead_code)]
impl MockSource {
    fn with_document(body: &str) -> Self {
        let mut source = Self::new();
        source.add_document(SCENARIO_URL, body);
        source
    }

    /// A busy server with a mix of cataloged and uncataloged query types.
    ///
    /// Uncataloged: SPF (4) and ANY (29).
    pub fn typical_server() -> Self {
        Self::with_document(TYPICAL_SERVER)
    }

    /// A=100, AAAA=50, BOGUS=7 plus a memory summary.
    pub fn simple_queries() -> Self {
        Self::with_document(SIMPLE_QUERIES)
    }

    /// Sections present but without any entries.
    pub fn idle_server() -> Self {
        Self::with_document(IDLE_SERVER)
    }

    /// Serves a document that is not well-formed.
    pub fn truncated_document() -> Self {
        Self::with_document(TRUNCATED)
    }

    /// Nothing is listening at [`SCENARIO_URL`].
    pub fn unreachable() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::StatsSource;
    use crate::document::Document;

    #[test]
    fn test_scenarios_parse() {
        for source in [
            MockSource::typical_server(),
            MockSource::simple_queries(),
            MockSource::idle_server(),
        ] {
            let body = source.fetch(SCENARIO_URL).unwrap();
            assert!(Document::parse(&body).is_ok());
        }
    }

    #[test]
    fn test_truncated_scenario_does_not_parse() {
        let body = MockSource::truncated_document()
            .fetch(SCENARIO_URL)
            .unwrap();
        assert!(Document::parse(&body).is_err());
    }

    #[test]
    fn test_unreachable_scenario() {
        assert!(MockSource::unreachable().fetch(SCENARIO_URL).is_err());
    }
}
