// Known affiliate networks and the query parameters each one uses.

/// One row of the partner table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerSpec {
    pub partner_id: &'static str,
    /// Query parameter carrying the click-tracking URL prefix.
    pub url_prefix_param: &'static str,
    /// Query parameter carrying the publisher token.
    pub affiliate_token_param: &'static str,
    /// Whether the destination must be percent-encoded twice before the
    /// prefix is prepended.
    pub encode_twice: bool,
}

pub static PARTNERS: &[PartnerSpec] = &[
    // LinkShare
    PartnerSpec {
        partner_id: "30",
        url_prefix_param: "LS_PARAM",
        affiliate_token_param: "siteID",
        encode_twice: true,
    },
    // TradeDoubler
    PartnerSpec {
        partner_id: "2003",
        url_prefix_param: "TD_PARAM",
        affiliate_token_param: "tduid",
        encode_twice: false,
    },
    // DGM
    PartnerSpec {
        partner_id: "1002",
        url_prefix_param: "AFF_PARAM",
        affiliate_token_param: "affToken",
        encode_twice: false,
    },
];

pub fn partner_spec(partner_id: &str) -> Option<&'static PartnerSpec> {
    PARTNERS.iter().find(|spec| spec.partner_id == partner_id)
}
