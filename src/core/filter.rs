use crate::domain::model::{QualifyingListing, RawListing, RejectReason};

/// Reduce price text to its digit characters, in order. Whitespace and
/// currency decorations are dropped, so `"5 000"` parses to `5000`.
pub fn parse_price(price_text: &str) -> Option<u64> {
    let digits: String = price_text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Price-range filter. Bounds are inclusive on both ends.
pub fn qualify(
    raw: &RawListing,
    min_price: u64,
    max_price: u64,
) -> Result<QualifyingListing, RejectReason> {
    let price = parse_price(&raw.price_text).ok_or(RejectReason::MalformedPrice)?;

    if price < min_price || price > max_price {
        return Err(RejectReason::OutOfRange { price });
    }

    Ok(QualifyingListing {
        title: raw.title.clone(),
        price_text: raw.price_text.clone(),
        url: raw.url.clone(),
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, price_text: &str) -> RawListing {
        RawListing {
            title: title.to_string(),
            price_text: price_text.to_string(),
            url: format!("https://kwork.ru/projects/{}", title),
        }
    }

    #[test]
    fn test_parse_price_extracts_digits_in_order() {
        assert_eq!(parse_price("Желаемый бюджет: до 5 000"), Some(5000));
        assert_eq!(parse_price("5 000"), Some(5000));
        assert_eq!(parse_price("600"), Some(600));
        assert_eq!(parse_price("1 234 567 ₽"), Some(1234567));
    }

    #[test]
    fn test_parse_price_rejects_digitless_input() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("до договорённости"), None);
        assert_eq!(parse_price("₽ —"), None);
    }

    #[test]
    fn test_qualify_inclusive_bounds() {
        assert!(qualify(&raw("a", "500"), 500, 100_000).is_ok());
        assert!(qualify(&raw("b", "100000"), 500, 100_000).is_ok());

        assert_eq!(
            qualify(&raw("c", "499"), 500, 100_000),
            Err(RejectReason::OutOfRange { price: 499 })
        );
        assert_eq!(
            qualify(&raw("d", "100001"), 500, 100_000),
            Err(RejectReason::OutOfRange { price: 100_001 })
        );
    }

    #[test]
    fn test_qualify_malformed_price() {
        assert_eq!(
            qualify(&raw("e", "нет бюджета"), 500, 100_000),
            Err(RejectReason::MalformedPrice)
        );
    }

    #[test]
    fn test_qualify_carries_listing_fields() {
        let listing = qualify(&raw("Сайт под ключ", "до 5 000"), 500, 100_000).unwrap();
        assert_eq!(listing.title, "Сайт под ключ");
        assert_eq!(listing.price, 5000);
        assert_eq!(listing.price_text, "до 5 000");
        assert_eq!(listing.url, "https://kwork.ru/projects/Сайт под ключ");
    }
}
