//! Property tests for the offer link codec and the trade-off model.

use compmax::codec::{LinkParams, decode, encode, params_from_link, share_url};
use compmax::domain::{EquityMode, Offer, OfferBounds, OfferMetadata, TradeoffPosition};
use compmax::model::OfferModel;
use proptest::prelude::*;
use url::Url;

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,16}[A-Za-z0-9]\\PC{0,8}"
}

fn email() -> impl Strategy<Value = String> {
    "[a-z0-9._+-]{1,12}@[a-z0-9-]{1,10}(\\.[a-z]{2,5}){0,2}"
}

fn equity() -> impl Strategy<Value = EquityMode> {
    prop_oneof![
        (0.0f64..=100.0).prop_map(EquityMode::Percentage),
        (0u64..=100_000_000).prop_map(EquityMode::Shares),
    ]
}

prop_compose! {
    fn offer()(
        max_salary in 0.0f64..=10_000_000.0,
        equity in equity(),
        company in text(),
        sender_name in text(),
        granter_email in email(),
        date in text(),
        position_title in text(),
        recipient_name in text(),
        recipient_email in email(),
    ) -> Offer {
        Offer {
            bounds: OfferBounds::new(max_salary, equity).unwrap(),
            metadata: OfferMetadata {
                company,
                sender_name,
                granter_email,
                date,
                position_title,
                recipient_name,
                recipient_email,
            },
        }
    }
}

fn any_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_string()),
        Just("maxSalary".to_string()),
        Just("equityType".to_string()),
        Just("maxEquity".to_string()),
        Just("maxShares".to_string()),
        Just("sliderpos".to_string()),
        "[a-zA-Z]{0,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// Everything the link carries survives encode -> URL -> decode.
    #[test]
    fn link_round_trip(offer in offer(), raw_position in 0i64..=100) {
        let position = TradeoffPosition::new(raw_position).unwrap();
        let params = encode(&offer, position).unwrap();

        let base = Url::parse("https://compmax.example/offer").unwrap();
        let url = share_url(&base, &params);
        let decoded = decode(&params_from_link(url.as_str()).unwrap());

        prop_assert!(decoded.recipient_mode);
        prop_assert_eq!(decoded.position, position);
        prop_assert_eq!(decoded.offer.bounds, offer.bounds);

        let mut expected = offer.metadata.clone();
        expected.recipient_email = String::new();
        prop_assert_eq!(&decoded.offer.metadata, &expected);

        // Re-encoding the decoded offer is stable.
        let mut again = decoded.offer.clone();
        again.metadata.recipient_email = offer.metadata.recipient_email.clone();
        prop_assert_eq!(encode(&again, decoded.position).unwrap(), params);
    }

    /// Decode accepts any map and always lands on valid bounds and position.
    #[test]
    fn decode_is_total(pairs in prop::collection::vec((any_key(), "\\PC{0,12}"), 0..12)) {
        let params: LinkParams = pairs.into_iter().collect();
        let decoded = decode(&params);

        let rebuilt = OfferBounds::new(decoded.offer.bounds.max_salary(), decoded.offer.bounds.equity());
        prop_assert!(rebuilt.is_ok());
        prop_assert!(decoded.position.get() <= 100);
    }

    #[test]
    fn salary_rises_and_equity_falls_along_the_slider(
        max_salary in 0.0f64..=10_000_000.0,
        equity in equity(),
    ) {
        let model = OfferModel::construct(max_salary, equity).unwrap();
        let points: Vec<_> = (0..=100).map(|p| model.evaluate(p).unwrap()).collect();

        prop_assert_eq!(points[0].salary, 0.0);
        prop_assert_eq!(points[100].equity_or_shares(), 0.0);
        for pair in points.windows(2) {
            prop_assert!(pair[1].salary >= pair[0].salary);
            prop_assert!(pair[1].equity_or_shares() <= pair[0].equity_or_shares());
        }
    }
}

#[test]
fn percentage_scenario() {
    let decoded = decode(
        &params_from_link("?name=Sam&maxSalary=200000&equityType=percentage&maxEquity=4.0&sliderpos=25")
            .unwrap(),
    );
    let point = OfferModel::from_bounds(decoded.offer.bounds).evaluate_at(decoded.position);
    assert_eq!(point.salary, 50_000.0);
    assert_eq!(point.equity_or_shares(), 3.0);
}

#[test]
fn corrupted_link_still_opens_with_defaults() {
    let decoded = decode(&params_from_link("?name=Sam&maxSalary=abc&maxEquity=%%%&sliderpos=x").unwrap());
    assert!(decoded.recipient_mode);
    assert_eq!(decoded.offer.bounds, OfferBounds::default());
    assert_eq!(decoded.position, TradeoffPosition::default());
}
