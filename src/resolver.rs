//! Resolution of a validated request into the filings to download.
//!
//! The search index is paged. [`filing_references`] walks the pages lazily:
//! a page is only requested once every hit of the previous one has been
//! consumed, so a limited request stops issuing requests as soon as it has
//! enough filings, and a date window stops at the first hit older than
//! `after_date` (the index returns hits newest first).

use chrono::NaiveDate;
use futures_util::future::{self, Either};
use futures_util::stream::{self, Stream, StreamExt, TryStreamExt};
use std::path::Path;

use super::error::{EdgarError, Result};
use super::request::FilingRequest;
use super::search::{Hit, SearchOptions};
use super::traits::{ArchiveOperations, SearchOperations};

const FILING_DETAILS_STEM: &str = "filing-details";

/// A filing selected for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingReference {
    pub accession_number: String,
    /// CIK of the filer, as listed by the search index.
    pub cik: String,
    /// Form type, e.g. `8-K` or `8-K/A`.
    pub form: String,
    pub filing_date: NaiveDate,
    /// Complete submission text file containing every document of the filing.
    pub full_submission_url: String,
    /// Individual documents saved next to the full submission on request.
    pub details: Vec<DetailDocument>,
}

/// A single document of a filing and the name it is saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailDocument {
    pub url: String,
    pub file_name: String,
}

impl FilingReference {
    /// Builds a reference from a search hit, with archive URLs rooted at `archives_url`.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::Schema` if the hit id is not of the form
    /// `accession:filename` or the hit lists no CIK.
    pub fn from_hit(archives_url: &str, hit: &Hit, filing_date: NaiveDate) -> Result<Self> {
        let (accession_number, file_name) = hit
            ._id
            .split_once(':')
            .filter(|(accession, file)| is_accession_number(accession) && !file.is_empty())
            .ok_or_else(|| {
                EdgarError::Schema(format!(
                    "malformed hit id '{}', expected 'accession_number:filename'",
                    hit._id
                ))
            })?;

        // The filer comes last; earlier entries are e.g. reporting owners of a form 4.
        let cik = hit
            ._source
            .ciks
            .last()
            .map(|cik| cik.trim_start_matches('0'))
            .filter(|cik| !cik.is_empty())
            .ok_or_else(|| EdgarError::Schema(format!("hit '{}' lists no CIK", hit._id)))?;

        let base = format!(
            "{}/data/{}/{}",
            archives_url,
            cik,
            accession_number.replace('-', "")
        );

        Ok(Self {
            accession_number: accession_number.to_string(),
            cik: cik.to_string(),
            form: hit._source.file_type.clone(),
            filing_date,
            full_submission_url: format!("{base}/{accession_number}.txt"),
            details: vec![DetailDocument {
                url: format!("{base}/{file_name}"),
                file_name: details_file_name(file_name),
            }],
        })
    }
}

/// `NNNNNNNNNN-NN-NNNNNN`: filer id, year, sequence. The accession number names
/// the filing's directory, so nothing else may pass.
fn is_accession_number(value: &str) -> bool {
    value.len() == 20
        && value.bytes().enumerate().all(|(i, b)| match i {
            10 | 13 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `filing-details` plus the document's extension, with `htm` spelled `html`.
fn details_file_name(document: &str) -> String {
    match Path::new(document).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("htm") => format!("{FILING_DETAILS_STEM}.html"),
        Some(ext) => format!("{FILING_DETAILS_STEM}.{}", ext.to_ascii_lowercase()),
        None => FILING_DETAILS_STEM.to_string(),
    }
}

/// Search parameters for the page of results starting at `from`.
pub fn search_options(request: &FilingRequest, from: u32) -> SearchOptions {
    SearchOptions::new()
        .with_query("")
        .with_entity_name(request.ticker_or_cik.clone())
        .with_forms(vec![request.filing_type.clone()])
        .with_date_range(
            request.after_date.format("%Y-%m-%d").to_string(),
            request.before_date.format("%Y-%m-%d").to_string(),
        )
        .with_from(from)
}

fn filing_date(hit: &Hit) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&hit._source.file_date, "%Y-%m-%d").map_err(|e| {
        EdgarError::Schema(format!(
            "hit '{}' has invalid file_date '{}': {}",
            hit._id, hit._source.file_date, e
        ))
    })
}

/// Fetches the page starting at `from`. Yields the hits and the offset of the
/// next page, or `None` once the index has nothing more to return.
async fn fetch_page<C>(
    client: &C,
    request: &FilingRequest,
    from: u32,
) -> Result<Option<(Vec<Hit>, Option<u32>)>>
where
    C: SearchOperations + ?Sized,
{
    let response = client.search(search_options(request, from)).await?;
    let total = response.hits.total;
    let hits = response.hits.hits;

    tracing::debug!(
        "Search page for {} {} from {}: {} hits of {} total",
        request.ticker_or_cik,
        request.filing_type,
        from,
        hits.len(),
        total.value
    );

    if hits.is_empty() {
        return Ok(None);
    }

    // The index reports its page size; fall back to what was actually returned.
    let page_size = response
        .query
        .and_then(|query| query.size)
        .filter(|&size| size > 0)
        .unwrap_or(hits.len() as u32);
    let next = from.saturating_add(page_size);
    let exhausted = total.is_exact() && next >= total.value;

    Ok(Some((hits, (!exhausted).then_some(next))))
}

/// Lazily resolves `request` into the filings to download, newest first.
///
/// Hits outside the date window, hits of other form types, and amendments
/// (unless requested) are skipped without counting toward the limit.
pub fn filing_references<'a, C>(
    client: &'a C,
    request: &'a FilingRequest,
) -> impl Stream<Item = Result<FilingReference>> + 'a
where
    C: SearchOperations + ArchiveOperations + ?Sized,
{
    let archives_url = client.archives_url();

    let pages = stream::try_unfold(Some(0u32), move |cursor| async move {
        match cursor {
            Some(from) => fetch_page(client, request, from).await,
            None => Ok(None),
        }
    });

    let references = pages
        .map_ok(|hits| stream::iter(hits.into_iter().map(Ok::<Hit, EdgarError>)))
        .try_flatten()
        .and_then(|hit| future::ready(filing_date(&hit).map(|date| (date, hit))))
        .try_take_while(move |(date, _)| future::ready(Ok(*date >= request.after_date)))
        .try_filter(move |(date, hit)| {
            future::ready(request.in_window(*date) && request.accepts_form(&hit._source.file_type))
        })
        .and_then(move |(date, hit)| future::ready(FilingReference::from_hit(archives_url, &hit, date)));

    match request.limit {
        Some(limit) => Either::Left(references.take(limit.get())),
        None => Either::Right(references),
    }
}

/// Collects every reference [`filing_references`] yields.
pub async fn resolve_filings<C>(client: &C, request: &FilingRequest) -> Result<Vec<FilingReference>>
where
    C: SearchOperations + ArchiveOperations + ?Sized,
{
    filing_references(client, request).try_collect().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateBounds;
    use crate::options::DownloadOptions;
    use crate::search::SearchResponse;

    const ARCHIVES: &str = "https://www.sec.gov/Archives/edgar";

    fn hit(id: &str, ciks: &[&str], file_type: &str, file_date: &str) -> Hit {
        let body = serde_json::json!({
            "hits": {
                "total": {"value": 1, "relation": "eq"},
                "hits": [{
                    "_id": id,
                    "_source": {
                        "ciks": ciks,
                        "file_date": file_date,
                        "form": file_type,
                        "file_type": file_type,
                    }
                }]
            }
        });
        let mut response = SearchResponse::from_json(&body.to_string()).unwrap();
        response.hits.hits.remove(0)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builds_archive_urls() {
        let hit = hit(
            "0000320193-20-000096:aapl-20200926.htm",
            &["0000320193"],
            "10-K",
            "2020-10-30",
        );
        let reference = FilingReference::from_hit(ARCHIVES, &hit, date(2020, 10, 30)).unwrap();

        assert_eq!(reference.accession_number, "0000320193-20-000096");
        assert_eq!(reference.cik, "320193");
        assert_eq!(
            reference.full_submission_url,
            "https://www.sec.gov/Archives/edgar/data/320193/000032019320000096/0000320193-20-000096.txt"
        );
        assert_eq!(
            reference.details,
            vec![DetailDocument {
                url: "https://www.sec.gov/Archives/edgar/data/320193/000032019320000096/aapl-20200926.htm"
                    .to_string(),
                file_name: "filing-details.html".to_string(),
            }]
        );
    }

    #[test]
    fn filer_is_last_cik() {
        let hit = hit(
            "0001181431-20-000001:xslF345X03/wf-form4.xml",
            &["0001214128", "0000320193"],
            "4",
            "2020-01-02",
        );
        let reference = FilingReference::from_hit(ARCHIVES, &hit, date(2020, 1, 2)).unwrap();

        assert_eq!(reference.cik, "320193");
        assert_eq!(reference.details[0].file_name, "filing-details.xml");
    }

    #[test]
    fn malformed_hits_are_schema_errors() {
        let no_separator = hit("0000320193-20-000096", &["320193"], "10-K", "2020-10-30");
        assert!(matches!(
            FilingReference::from_hit(ARCHIVES, &no_separator, date(2020, 10, 30)),
            Err(EdgarError::Schema(_))
        ));

        let no_cik = hit("0000320193-20-000096:a.htm", &[], "10-K", "2020-10-30");
        assert!(matches!(
            FilingReference::from_hit(ARCHIVES, &no_cik, date(2020, 10, 30)),
            Err(EdgarError::Schema(_))
        ));

        for id in [
            "../../x:a.htm",
            "0000320193-20-000096/..:a.htm",
            "0000320193-20-00009:a.htm",
            "000032019320000096:a.htm",
            ":a.htm",
        ] {
            let hit = hit(id, &["320193"], "10-K", "2020-10-30");
            assert!(
                matches!(
                    FilingReference::from_hit(ARCHIVES, &hit, date(2020, 10, 30)),
                    Err(EdgarError::Schema(_))
                ),
                "{id} should be rejected"
            );
        }

        let bad_date = hit("0000320193-20-000096:a.htm", &["320193"], "10-K", "10/30/2020");
        assert!(matches!(filing_date(&bad_date), Err(EdgarError::Schema(_))));
    }

    #[test]
    fn details_names() {
        assert_eq!(details_file_name("a8-k.htm"), "filing-details.html");
        assert_eq!(details_file_name("a8-k.html"), "filing-details.html");
        assert_eq!(details_file_name("primary_doc.xml"), "filing-details.xml");
        assert_eq!(details_file_name("README"), "filing-details");
    }

    #[test]
    fn search_options_follow_request() {
        let options = DownloadOptions::new().with_date_range("2017-01-01", "2017-03-25");
        let bounds = DateBounds::new(date(2000, 1, 1), date(2024, 6, 30));
        let request = FilingRequest::new("8-K", "aapl", &options, &bounds).unwrap();

        let params = search_options(&request, 100).to_query_params();

        assert!(params.contains(&("entityName".to_string(), "AAPL".to_string())));
        assert!(params.contains(&("forms".to_string(), "8-K".to_string())));
        assert!(params.contains(&("startdt".to_string(), "2017-01-01".to_string())));
        assert!(params.contains(&("enddt".to_string(), "2017-03-25".to_string())));
        assert!(params.contains(&("from".to_string(), "100".to_string())));
    }
}
