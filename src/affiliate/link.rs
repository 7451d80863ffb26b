// Building and reading affiliated store URLs
use crate::affiliate::partners::partner_spec;
use crate::affiliate::query::parse_query_params;
use crate::model::{AffiliateData, PartnerId};
use crate::utils::non_empty;

/// Returns `url` tagged for the affiliate network in `affiliate`.
///
/// Without a usable partner id the URL comes back unchanged. With a URL
/// prefix, the tagged URL is percent-encoded (twice for networks that need
/// it) and appended to the prefix; otherwise the publisher token is added as
/// the network's own query parameter.
pub fn rewrite_url(url: &str, affiliate: Option<&AffiliateData>) -> String {
    let Some(affiliate) = affiliate else {
        return url.to_string();
    };
    let Some(partner_id) = affiliate.active_partner() else {
        return url.to_string();
    };
    if url.is_empty() {
        return url.to_string();
    }

    let spec = partner_spec(partner_id.as_str());
    let separator = if url.contains('?') { '&' } else { '?' };
    let mut result = format!("{url}{separator}partnerId={partner_id}");

    if let Some(prefix) = non_empty(affiliate.url_prefix.as_deref()) {
        let mut encoded = urlencoding::encode(&result).into_owned();
        if spec.is_some_and(|s| s.encode_twice) {
            encoded = urlencoding::encode(&encoded).into_owned();
        }
        return format!("{prefix}{encoded}");
    }

    if let (Some(token), Some(spec)) = (non_empty(affiliate.affiliate_token.as_deref()), spec) {
        result.push('&');
        result.push_str(spec.affiliate_token_param);
        result.push('=');
        result.push_str(token);
    }
    result
}

/// Reads affiliate metadata back out of a tagged URL.
///
/// Unknown networks yield only the partner id, since the names of their
/// prefix and token parameters are not known.
pub fn parse_affiliate_data(url: &str) -> AffiliateData {
    let mut params = parse_query_params(url);
    let partner_id = match params.remove("partnerId").flatten() {
        Some(id) if !id.is_empty() => PartnerId::from(id),
        _ => return AffiliateData::default(),
    };

    let Some(spec) = partner_spec(partner_id.as_str()) else {
        return AffiliateData::with_partner(partner_id);
    };

    AffiliateData {
        url_prefix: params.remove(spec.url_prefix_param).flatten(),
        affiliate_token: params.remove(spec.affiliate_token_param).flatten(),
        partner_id: Some(partner_id),
    }
}
