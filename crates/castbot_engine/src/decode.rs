use castbot_logging::castbot_debug;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
}

/// Decode page bytes to UTF-8, choosing the encoding by BOM, then the
/// Content-Type charset, then `chardetng` detection.
///
/// Mirrors may serve windows-1251 without any charset header. Malformed
/// sequences become U+FFFD so a stray byte never costs the whole page.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(charset_label)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| detect(bytes));

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        castbot_debug!("Replaced malformed {} sequences in page body", used.name());
    }

    DecodedHtml {
        html: text.into_owned(),
        encoding_label: used.name().to_string(),
    }
}

fn detect(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
            .filter(|label| !label.is_empty())
    })
}
