//! Search-record fixtures and page body generators

use serde_json::{Value, json};

/// One search record with the fields the pipeline reads
pub fn record(descriptor: &str, wki_id: &str, total_count: &str, title: &str) -> Value {
    json!({
        "RowNum": "1",
        "total_count": total_count,
        "wki_id": wki_id,
        "TITLE": title,
        "WKI_REFERENCE": "RES/MTS-00000",
        "EDSpathname": "",
        "EDSPDFfilename": "",
        "EDSARCfilename": "",
        "ETSI_DELIVERABLE": descriptor,
        "STATUS_CODE": "12",
        "ACTION_TYPE": "PU",
        "IsCurrent": "1",
        "superseded": "0",
        "ReviewDate": null,
        "new_versions": null,
        "Scope": "",
        "TB": "Methods for Testing & Specification",
        "Keywords": "MTS,TESTING,TTCN"
    })
}

/// A record with download files under `pathname`
pub fn record_with_files(
    descriptor: &str,
    wki_id: &str,
    total_count: &str,
    pathname: &str,
    pdf: &str,
    archive: &str,
) -> Value {
    let mut value = record(descriptor, wki_id, total_count, "");
    value["EDSpathname"] = json!(pathname);
    value["EDSPDFfilename"] = json!(pdf);
    value["EDSARCfilename"] = json!(archive);
    value
}

/// `count` filler records, each carrying the same total count
pub fn filler_page(page: u32, count: usize, total_count: &str) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                record(
                    &format!("ETSI TS 100 {:03}-{} V1.1.1 (2010-01)", page, i),
                    &format!("{}", page as usize * 1000 + i),
                    total_count,
                    "Methods for Testing and Specification (MTS); Filler",
                )
            })
            .collect(),
    )
}
