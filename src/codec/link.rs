//! Share URLs: attaching encoded parameters to a base URL and reading them back.

use url::Url;

use crate::codec::params::LinkParams;
use crate::error::OfferError;

/// Replace the query of `base` with the encoded offer parameters.
pub fn share_url(base: &Url, params: &LinkParams) -> Url {
    let mut url = base.clone();
    url.set_fragment(None);
    url.set_query(Some(&params.to_query()));
    url
}

/// Extract the parameter map from a full link or from a bare query string.
///
/// Accepts `https://host/path?a=b`, `host/path?a=b`, `?a=b` (including a bare `?`)
/// and `a=b`.
pub fn params_from_link(link: &str) -> Result<LinkParams, OfferError> {
    let link = link.trim();
    if let Ok(url) = Url::parse(link) {
        return Ok(LinkParams::from_query(url.query().unwrap_or_default()));
    }

    if let Some((prefix, rest)) = link.split_once('?') {
        if prefix.contains(char::is_whitespace) {
            return Err(invalid(link));
        }
        let query = rest.split_once('#').map_or(rest, |(query, _)| query);
        return Ok(LinkParams::from_query(query));
    }

    if link.contains('=') {
        Ok(LinkParams::from_query(link))
    } else {
        Err(invalid(link))
    }
}

fn invalid(link: &str) -> OfferError {
    OfferError::InvalidLink(format!("'{link}' is neither a URL nor a query string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_replaces_existing_query() {
        let base = Url::parse("https://compmax.example/offer?stale=1#top").unwrap();
        let params: LinkParams = [("name", "Sam Lee"), ("maxSalary", "150000")]
            .into_iter()
            .collect();
        let url = share_url(&base, &params);
        assert_eq!(
            url.as_str(),
            "https://compmax.example/offer?name=Sam+Lee&maxSalary=150000"
        );
    }

    #[test]
    fn params_from_full_link_and_bare_query() {
        let full = params_from_link("https://compmax.example/?name=Sam&maxSalary=1").unwrap();
        assert_eq!(full.get("name"), Some("Sam"));

        let bare = params_from_link("?name=Sam").unwrap();
        assert_eq!(bare.get("name"), Some("Sam"));

        let bare = params_from_link("name=Sam&maxEquity=2").unwrap();
        assert_eq!(bare.get("maxEquity"), Some("2"));

        let no_query = params_from_link("https://compmax.example/").unwrap();
        assert!(no_query.is_empty());
    }

    #[test]
    fn schemeless_link_reads_its_query() {
        let params =
            params_from_link("compmax.example/offer?name=Sam&maxSalary=90000&maxEquity=2#top").unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), ["name", "maxSalary", "maxEquity"]);
        assert_eq!(params.get("maxEquity"), Some("2"));

        let decoded = crate::codec::decode(&params);
        assert!(decoded.recipient_mode);
        assert_eq!(decoded.offer.metadata.recipient_name, "Sam");
        assert_eq!(decoded.offer.bounds.max_salary(), 90_000.0);
    }

    #[test]
    fn empty_and_valueless_queries_are_accepted() {
        assert!(params_from_link("?").unwrap().is_empty());

        let keys_only = params_from_link("?name&maxSalary&maxEquity").unwrap();
        assert_eq!(keys_only.len(), 3);
        assert_eq!(keys_only.get("name"), Some(""));
    }

    #[test]
    fn garbage_link_is_rejected() {
        assert!(matches!(
            params_from_link("not a link"),
            Err(OfferError::InvalidLink(_))
        ));
        assert!(matches!(
            params_from_link("not a link?name=Sam"),
            Err(OfferError::InvalidLink(_))
        ));
    }
}
