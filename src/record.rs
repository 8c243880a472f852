//! Search-result records and their normalization into [`Deliverable`]s.

use crate::titles;
use crate::types::Deliverable;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};
use url::Url;

/// One record of a catalog search page, as sent by the server
///
/// Every field is a string on the wire; `null` and missing fields become empty
/// strings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRecord {
    /// Position of the record in the result set (e.g. "46")
    #[serde(rename = "RowNum", default, deserialize_with = "nullable")]
    pub row_num: String,

    /// Total result count, repeated on every record (e.g. "920")
    #[serde(default, deserialize_with = "nullable")]
    pub total_count: String,

    /// Work item id (e.g. "14072")
    #[serde(default, deserialize_with = "nullable")]
    pub wki_id: String,

    /// Full catalog title
    #[serde(rename = "TITLE", default, deserialize_with = "nullable")]
    pub title: String,

    /// Work item reference (e.g. "RES/MTS-00063-1r1")
    #[serde(rename = "WKI_REFERENCE", default, deserialize_with = "nullable")]
    pub wki_reference: String,

    /// Directory of the published files (e.g. "etsi_es/201800_201899/20187301/01.01.02_60/")
    #[serde(rename = "EDSpathname", default, deserialize_with = "nullable")]
    pub pathname: String,

    /// PDF filename, empty when none
    #[serde(rename = "EDSPDFfilename", default, deserialize_with = "nullable")]
    pub pdf_filename: String,

    /// Archive filename, empty when none
    #[serde(rename = "EDSARCfilename", default, deserialize_with = "nullable")]
    pub archive_filename: String,

    /// Descriptor, e.g. "ETSI ES 201 873-1 V1.1.2 (2001-06)"
    #[serde(rename = "ETSI_DELIVERABLE", default, deserialize_with = "nullable")]
    pub deliverable: String,

    /// Work item status code (e.g. "12")
    #[serde(rename = "STATUS_CODE", default, deserialize_with = "nullable")]
    pub status_code: String,

    /// Action type (e.g. "PU")
    #[serde(rename = "ACTION_TYPE", default, deserialize_with = "nullable")]
    pub action_type: String,

    /// "1" when this is the current version
    #[serde(rename = "IsCurrent", default, deserialize_with = "nullable")]
    pub is_current: String,

    /// "1" when superseded. Not reliably set by the server.
    #[serde(default, deserialize_with = "nullable")]
    pub superseded: String,

    /// Review date, usually null
    #[serde(rename = "ReviewDate", default, deserialize_with = "nullable")]
    pub review_date: String,

    /// Comma-separated work item ids of newer versions (e.g. "68552,")
    #[serde(default, deserialize_with = "nullable")]
    pub new_versions: String,

    /// Scope text
    #[serde(rename = "Scope", default, deserialize_with = "nullable")]
    pub scope: String,

    /// Technical body name
    #[serde(rename = "TB", default, deserialize_with = "nullable")]
    pub technical_body: String,

    /// Comma-separated keywords
    #[serde(rename = "Keywords", default, deserialize_with = "nullable")]
    pub keywords: String,
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawRecord {
    fn descriptor_tokens(&self) -> Vec<&str> {
        self.deliverable.split(' ').collect()
    }

    /// Document identifier: descriptor tokens two to four, e.g. "ES 201 873-1"
    ///
    /// Returns an empty string when the descriptor has fewer than four tokens.
    pub fn doc_id(&self) -> String {
        let tokens = self.descriptor_tokens();
        if tokens.len() < 4 {
            warn!(
                descriptor = %self.deliverable,
                wki_id = %self.wki_id,
                "Deliverable descriptor too short to derive a document id"
            );
            return String::new();
        }
        tokens[1..4].join(" ")
    }

    /// Publication month from the trailing "(YYYY-MM)" token of the descriptor
    pub fn publish_date(&self) -> Option<DateTime<Utc>> {
        let last = self.descriptor_tokens().last().copied().unwrap_or_default();
        let parsed = parse_year_month(last);
        if parsed.is_none() {
            warn!(
                descriptor = %self.deliverable,
                "Deliverable descriptor has no parsable publication date"
            );
        }
        parsed
    }

    /// Work item id, 0 when the server value is not an integer
    pub fn work_item_id(&self) -> i64 {
        match self.wki_id.trim().parse() {
            Ok(id) => id,
            Err(e) => {
                debug!(wki_id = %self.wki_id, "Unparsable work item id: {}", e);
                0
            }
        }
    }

    /// Short title, curated when known
    pub fn short_title(&self, doc_id: &str) -> String {
        titles::short_title(doc_id, &self.title)
    }

    /// Download URLs under `base`: PDF first, then archive, skipping empty filenames
    pub fn files(&self, base: &Url) -> Vec<String> {
        [&self.pdf_filename, &self.archive_filename]
            .into_iter()
            .filter(|name| !name.is_empty())
            .filter_map(|name| self.file_url(base, name))
            .collect()
    }

    fn file_url(&self, base: &Url, filename: &str) -> Option<String> {
        let mut url = base.clone();
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments
                    .pop_if_empty()
                    .extend(self.pathname.split('/').filter(|s| !s.is_empty()))
                    .push(filename);
            }
            Err(()) => {
                warn!(base = %base, "Deliver base URL cannot take path segments");
                return None;
            }
        }
        Some(url.to_string())
    }

    /// Parse the declared total result count, if present
    pub fn total_count(&self) -> Option<usize> {
        self.total_count.trim().parse().ok()
    }

    /// Normalize this record
    pub fn to_deliverable(&self, base: &Url) -> Deliverable {
        let doc_id = self.doc_id();
        Deliverable {
            title: self.short_title(&doc_id),
            published_at: self.publish_date(),
            work_item_id: self.work_item_id(),
            files: self.files(base),
            doc_id,
        }
    }
}

/// Parse a "(YYYY-MM)" fragment into the first day of that month, UTC midnight
pub fn parse_year_month(token: &str) -> Option<DateTime<Utc>> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let (year, month) = inner.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deliver_base() -> Url {
        Url::parse("http://www.etsi.org/deliver/").unwrap()
    }

    fn core_language() -> RawRecord {
        serde_json::from_str(
            r#"{
                "RowNum": "46",
                "total_count": "920",
                "wki_id": "14072",
                "TITLE": "Methods for Testing and Specification (MTS); The Tree and Tabular Combined Notation version 3; Part 1: TTCN-3 Core Language",
                "WKI_REFERENCE": "RES/MTS-00063-1r1",
                "EDSpathname": "etsi_es/201800_201899/20187301/01.01.02_60/",
                "EDSPDFfilename": "es_20187301v010102p.pdf",
                "EDSARCfilename": "es_20187301v010102p0.zip",
                "ETSI_DELIVERABLE": "ETSI ES 201 873-1 V1.1.2 (2001-06)",
                "STATUS_CODE": "12",
                "ACTION_TYPE": "PU",
                "IsCurrent": "0",
                "superseded": "0",
                "ReviewDate": null,
                "new_versions": "68552,",
                "Scope": "TTCN-3 textual description, BNF syntax and operational semantics.\r\n\r\n",
                "TB": "Methods for Testing & Specification",
                "Keywords": "ASN.1,METHODOLOGY,MTS,TESTING,TTCN"
            }"#,
        )
        .unwrap()
    }

    fn with_descriptor(descriptor: &str) -> RawRecord {
        RawRecord {
            deliverable: descriptor.to_string(),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_core_language_record() {
        let record = core_language();
        assert_eq!(record.review_date, "", "null decodes to empty string");

        let d = record.to_deliverable(&deliver_base());
        assert_eq!(d.doc_id, "ES 201 873-1");
        assert_eq!(d.title, "Core Language");
        assert_eq!(
            d.published_at,
            Some(Utc.with_ymd_and_hms(2001, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(d.work_item_id, 14072);
        assert_eq!(
            d.files,
            vec![
                "http://www.etsi.org/deliver/etsi_es/201800_201899/20187301/01.01.02_60/es_20187301v010102p.pdf",
                "http://www.etsi.org/deliver/etsi_es/201800_201899/20187301/01.01.02_60/es_20187301v010102p0.zip",
            ]
        );
        assert_eq!(record.total_count(), Some(920));
    }

    #[test]
    fn test_doc_id_uses_tokens_two_to_four() {
        assert_eq!(
            with_descriptor("ETSI TS 102 950-3 V1.2.1 (2012-04)").doc_id(),
            "TS 102 950-3"
        );
        assert_eq!(
            with_descriptor("ETSI ETR 141 ed.1 (1994-10)").doc_id(),
            "ETR 141 ed.1"
        );
    }

    #[test]
    fn test_short_descriptor_degrades_to_empty_id() {
        assert_eq!(with_descriptor("ETSI ES 202").doc_id(), "");
        assert_eq!(with_descriptor("ETSI ES").doc_id(), "");
        assert_eq!(with_descriptor("").doc_id(), "");
    }

    #[test]
    fn test_publish_date_parsing() {
        assert_eq!(
            with_descriptor("ETSI ES 201 873-1 V4.6.1 (2014-06)").publish_date(),
            Some(Utc.with_ymd_and_hms(2014, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(with_descriptor("ETSI ES 201 873-1 V4.6.1").publish_date(), None);
        assert_eq!(with_descriptor("ETSI ES 201 873-1 (2014-13)").publish_date(), None);
        assert_eq!(with_descriptor("ETSI ES 201 873-1 2014-06").publish_date(), None);
        assert_eq!(with_descriptor("").publish_date(), None);
    }

    #[test]
    fn test_parse_year_month_requires_exact_shape() {
        assert!(parse_year_month("(2001-06)").is_some());
        assert!(parse_year_month("(2001-6)").is_none());
        assert!(parse_year_month("(01-06)").is_none());
        assert!(parse_year_month("(2001-06").is_none());
        assert!(parse_year_month("(2001/06)").is_none());
    }

    #[test]
    fn test_work_item_id_defaults_to_zero() {
        let record = RawRecord {
            wki_id: "abc".to_string(),
            ..RawRecord::default()
        };
        assert_eq!(record.work_item_id(), 0);
        assert_eq!(RawRecord::default().work_item_id(), 0);
    }

    #[test]
    fn test_files_skip_empty_names() {
        let record = RawRecord {
            pathname: "etsi_tr/101800_101899/101874/01.01.01_60/".to_string(),
            archive_filename: "tr_101874v010101p0.zip".to_string(),
            ..RawRecord::default()
        };
        assert_eq!(
            record.files(&deliver_base()),
            vec!["http://www.etsi.org/deliver/etsi_tr/101800_101899/101874/01.01.01_60/tr_101874v010101p0.zip"]
        );
        assert!(RawRecord::default().files(&deliver_base()).is_empty());
    }

    #[test]
    fn test_files_join_without_trailing_slashes() {
        let record = RawRecord {
            pathname: "/etsi_es/x".to_string(),
            pdf_filename: "a.pdf".to_string(),
            ..RawRecord::default()
        };
        let base = Url::parse("https://mirror.example.com/etsi").unwrap();
        assert_eq!(
            record.files(&base),
            vec!["https://mirror.example.com/etsi/etsi_es/x/a.pdf"]
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record: RawRecord =
            serde_json::from_str(r#"{"ETSI_DELIVERABLE":"ETSI TR 101 666 V1.0.0 (1999-12)","extra":"x"}"#)
                .unwrap();
        assert_eq!(record.doc_id(), "TR 101 666");
        assert_eq!(record.short_title("TR 101 666"), "TTCN (Ed. 2++)");
    }
}
