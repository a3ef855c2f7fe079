//! Sequential download of resolved filings to disk.
//!
//! Layout under the download root:
//!
//! ```text
//! <root>/sec-edgar-filings/<ticker or CIK>/<filing type>/<accession number>/
//!     full-submission.txt
//!     filing-details.html
//! ```

use async_trait::async_trait;
use regex::bytes::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;
use url::Url;

use super::Edgar;
use super::error::Result;
use super::resolver::FilingReference;
use super::traits::ArchiveOperations;

pub const ROOT_FOLDER_NAME: &str = "sec-edgar-filings";
pub const FULL_SUBMISSION_FILENAME: &str = "full-submission.txt";

// Quoted href of an anchor or src of an image.
static LINK_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)(<(?:a\b[^>]*?\shref|img\b[^>]*?\ssrc)\s*=\s*)("[^"]*"|'[^']*')"#)
        .expect("link attribute pattern is valid")
});

/// Directory all filings of one request are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    dir: PathBuf,
}

impl DownloadTarget {
    /// `<root>/sec-edgar-filings/<ticker_or_cik>/<filing_type>`. A `/` inside the
    /// filing type (e.g. `ATS-N/UA`) becomes `-` so each type maps to a single
    /// directory.
    pub fn new(root: &Path, ticker_or_cik: &str, filing_type: &str) -> Self {
        Self {
            dir: root
                .join(ROOT_FOLDER_NAME)
                .join(ticker_or_cik)
                .join(filing_type.replace('/', "-")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Directory of a single filing.
    pub fn filing_dir(&self, accession_number: &str) -> PathBuf {
        self.dir.join(accession_number)
    }
}

#[async_trait]
impl ArchiveOperations for Edgar {
    fn archives_url(&self) -> &str {
        &self.edgar_archives_url
    }

    async fn document(&self, url: &str) -> Result<Vec<u8>> {
        self.get_bytes(url).await
    }
}

/// Downloads each filing in order, stopping at the first failure.
///
/// The full submission is always saved; detail documents only when
/// `include_details` is set. Directories are created as needed.
pub async fn download_filings<C>(
    client: &C,
    target: &DownloadTarget,
    filings: &[FilingReference],
    include_details: bool,
) -> Result<()>
where
    C: ArchiveOperations + ?Sized,
{
    for filing in filings {
        let dir = target.filing_dir(&filing.accession_number);

        save_document(client, &dir, &filing.full_submission_url, FULL_SUBMISSION_FILENAME).await?;

        if include_details {
            for detail in &filing.details {
                save_document(client, &dir, &detail.url, &detail.file_name).await?;
            }
        }

        tracing::info!(
            "Saved {} {} filed {} to {}",
            filing.form,
            filing.accession_number,
            filing.filing_date,
            dir.display()
        );
    }

    Ok(())
}

async fn save_document<C>(client: &C, dir: &Path, url: &str, file_name: &str) -> Result<PathBuf>
where
    C: ArchiveOperations + ?Sized,
{
    let mut content = client.document(url).await?;
    if file_name.ends_with(".html") {
        content = resolve_relative_urls(&content, url);
    }

    fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    fs::write(&path, &content).await?;
    tracing::debug!("Wrote {} bytes from {} to {}", content.len(), url, path.display());

    Ok(path)
}

/// Rewrites relative `href`s of anchors and `src`s of images to absolute URLs
/// against `document_url`, so saved HTML keeps working links and images.
///
/// Fragments and values already starting with `http` are left alone. The rest
/// of the document is passed through byte for byte, whatever its encoding.
pub fn resolve_relative_urls(html: &[u8], document_url: &str) -> Vec<u8> {
    let Ok(base) = Url::parse(document_url) else {
        return html.to_vec();
    };

    LINK_ATTRIBUTE
        .replace_all(html, |caps: &Captures| {
            let prefix = &caps[1];
            let quoted = &caps[2];
            let quote = quoted[0];
            let value = &quoted[1..quoted.len() - 1];

            let resolved = std::str::from_utf8(value)
                .ok()
                .map(str::trim)
                .filter(|v| !v.starts_with('#') && !v.starts_with("http"))
                .and_then(|v| base.join(v).ok());

            let mut out = prefix.to_vec();
            match resolved {
                Some(url) => {
                    out.push(quote);
                    out.extend_from_slice(url.as_str().as_bytes());
                    out.push(quote);
                }
                None => out.extend_from_slice(quoted),
            }
            out
        })
        .into_owned()
}
