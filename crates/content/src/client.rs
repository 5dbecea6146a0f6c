//! HTTP client for the public text API
//!
//! Fetches the Uthmani text chapter-by-chapter or page-by-page. Responses
//! arrive as an envelope around a list of verse objects; anything other
//! than a 2xx with the expected shape maps to a [`ContentError`], which
//! callers treat as "no data".

use crate::error::{ContentError, ContentResult};
use crate::traits::ContentSource;
use serde::Deserialize;
use std::time::Duration as StdDuration;
use tilawah_core::{Verse, CHAPTER_COUNT, PAGE_COUNT};

/// Text edition served by the API
const EDITION: &str = "quran-uthmani";

/// Client for the alquran.cloud content API
pub struct QuranCloudSource {
    base_url: String,
    client: Option<reqwest::blocking::Client>,
}

impl QuranCloudSource {
    const API_BASE: &'static str = "https://api.alquran.cloud/v1";

    /// Creates a source against the public API
    pub fn new() -> Self {
        Self::with_base_url(Self::API_BASE)
    }

    /// Creates a source against a different base URL (tests, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(StdDuration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
            .ok();

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn fetch_verses(&self, path: &str) -> ContentResult<Vec<Verse>> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| ContentError::Network("HTTP client not available".to_string()))?;

        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = client
            .get(&url)
            .send()
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()));
        }

        let envelope: ApiEnvelope = response
            .json()
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

        let verses: Vec<Verse> = envelope
            .data
            .ayahs
            .into_iter()
            .map(ApiAyah::into_verse)
            .collect();

        if verses.is_empty() {
            return Err(ContentError::InvalidResponse(
                "response contained no verses".to_string(),
            ));
        }
        Ok(verses)
    }
}

impl Default for QuranCloudSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for QuranCloudSource {
    fn chapter_verses(&self, chapter: u16) -> ContentResult<Vec<Verse>> {
        if chapter == 0 || chapter > CHAPTER_COUNT {
            return Err(ContentError::InvalidLocation(format!("chapter {}", chapter)));
        }
        self.fetch_verses(&format!("surah/{}/{}", chapter, EDITION))
    }

    fn page_verses(&self, page: u16) -> ContentResult<Vec<Verse>> {
        if page == 0 || page > PAGE_COUNT {
            return Err(ContentError::InvalidLocation(format!("page {}", page)));
        }
        self.fetch_verses(&format!("page/{}/{}", page, EDITION))
    }
}

// ----- response shapes ----------------------------------------------------

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    data: ApiData,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    ayahs: Vec<ApiAyah>,
}

#[derive(Debug, Deserialize)]
struct ApiAyah {
    number: u32,
    text: String,
    #[serde(rename = "numberInSurah")]
    number_in_surah: u16,
    juz: u8,
    page: u16,
    surah: ApiSurahRef,
}

#[derive(Debug, Deserialize)]
struct ApiSurahRef {
    number: u16,
}

impl ApiAyah {
    fn into_verse(self) -> Verse {
        Verse {
            chapter_number: self.surah.number,
            number_in_chapter: self.number_in_surah,
            global_number: self.number,
            text: self.text,
            page: self.page,
            juz: self.juz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "number": 1,
            "name": "الفاتحة",
            "englishName": "Al-Faatiha",
            "ayahs": [
                {
                    "number": 1,
                    "text": "بِسْمِ اللَّهِ",
                    "numberInSurah": 1,
                    "juz": 1,
                    "page": 1,
                    "surah": {"number": 1, "name": "الفاتحة"}
                },
                {
                    "number": 2,
                    "text": "الْحَمْدُ لِلَّهِ",
                    "numberInSurah": 2,
                    "juz": 1,
                    "page": 1,
                    "surah": {"number": 1, "name": "الفاتحة"}
                }
            ]
        }
    }"#;

    #[test]
    fn test_envelope_parses_and_maps_to_verses() {
        let envelope: ApiEnvelope = serde_json::from_str(SAMPLE).expect("parse");
        let verses: Vec<Verse> = envelope
            .data
            .ayahs
            .into_iter()
            .map(ApiAyah::into_verse)
            .collect();

        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].chapter_number, 1);
        assert_eq!(verses[0].number_in_chapter, 1);
        assert_eq!(verses[0].global_number, 1);
        assert_eq!(verses[1].global_number, 2);
        assert_eq!(verses[1].page, 1);
    }

    #[test]
    fn test_envelope_tolerates_extra_fields() {
        // the API sends more fields than we read
        let envelope: Result<ApiEnvelope, _> = serde_json::from_str(SAMPLE);
        assert!(envelope.is_ok());
    }

    #[test]
    fn test_chapter_range_is_validated_before_any_request() {
        let source = QuranCloudSource::with_base_url("http://localhost:1");
        assert!(matches!(
            source.chapter_verses(0),
            Err(ContentError::InvalidLocation(_))
        ));
        assert!(matches!(
            source.chapter_verses(115),
            Err(ContentError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_page_range_is_validated_before_any_request() {
        let source = QuranCloudSource::with_base_url("http://localhost:1");
        assert!(matches!(
            source.page_verses(0),
            Err(ContentError::InvalidLocation(_))
        ));
        assert!(matches!(
            source.page_verses(605),
            Err(ContentError::InvalidLocation(_))
        ));
    }
}
