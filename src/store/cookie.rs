use super::StoreId;

pub const DEFAULT_STORE_COOKIE: &str = "active-store";

/// Find the active store in a `Cookie` request header. The caller passes the
/// result on explicitly; nothing here is remembered between requests.
pub fn active_store_from_cookie(header: &str, cookie_name: &str) -> Option<StoreId> {
    let raw = header.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == cookie_name).then_some(value.trim())
    })?;

    let raw = raw.trim_matches('"');
    let decoded = urlencoding::decode(raw).ok()?;
    match StoreId::new(&decoded) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!(cookie = cookie_name, %err, "ignoring invalid active store cookie");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_active_store_among_other_cookies() {
        let header = "session=abc123; active-store=tienda-01; theme=dark";
        let store = active_store_from_cookie(header, DEFAULT_STORE_COOKIE).unwrap();
        assert_eq!(store.as_str(), "tienda-01");
    }

    #[test]
    fn handles_quoted_and_encoded_values() {
        let store = active_store_from_cookie("active-store=\"shop%5F2\"", DEFAULT_STORE_COOKIE);
        assert_eq!(store.unwrap().as_str(), "shop_2");
    }

    #[test]
    fn missing_or_invalid_cookie_yields_none() {
        assert!(active_store_from_cookie("", DEFAULT_STORE_COOKIE).is_none());
        assert!(active_store_from_cookie("session=abc", DEFAULT_STORE_COOKIE).is_none());
        assert!(active_store_from_cookie("active-store=", DEFAULT_STORE_COOKIE).is_none());
        assert!(
            active_store_from_cookie("active-store=..%2Fsecret", DEFAULT_STORE_COOKIE).is_none()
        );
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        let header = "x-active-store=other; active-store=main";
        let store = active_store_from_cookie(header, DEFAULT_STORE_COOKIE).unwrap();
        assert_eq!(store.as_str(), "main");
    }
}
