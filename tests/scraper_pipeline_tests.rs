//! Guide pages parsed and reconciled against converted fixtures.

use jogos_na_tv::data_fetcher::api::parse_fixtures_response;
use jogos_na_tv::data_fetcher::processors::{FixtureFilter, convert_fixture, reconcile_pools};
use jogos_na_tv::data_fetcher::scrapers::cards::parse_card_page;
use jogos_na_tv::data_fetcher::scrapers::collect_matches;
use jogos_na_tv::data_fetcher::scrapers::listing::parse_listing_page;

const FIXTURES_BODY: &str = r#"{
    "errors": [],
    "results": 3,
    "response": [
        {
            "fixture": { "id": 1, "date": "2024-05-12T16:00:00-03:00", "venue": { "name": "Maracanã" } },
            "league": { "id": 71, "name": "Serie A", "country": "Brazil" },
            "teams": { "home": { "name": "Flamengo" }, "away": { "name": "Botafogo" } }
        },
        {
            "fixture": { "id": 2, "date": "2024-05-12T21:30:00-03:00", "venue": { "name": "Arena MRV" } },
            "league": { "id": 13, "name": "CONMEBOL Libertadores", "country": "World" },
            "teams": { "home": { "name": "Atlético-MG" }, "away": { "name": "Athletico-PR" } }
        },
        {
            "fixture": { "id": 3, "date": "2024-05-12T19:00:00-03:00" },
            "league": { "id": 71, "name": "Serie A", "country": "Brazil" },
            "teams": { "home": { "name": "Corinthians (F)" }, "away": { "name": "Palmeiras (F)" } }
        }
    ]
}"#;

const LISTING_PAGE: &str = r#"
    <table>
      <tr>
        <td class="match-time">16:00</td>
        <td class="match-home">Flamengo</td>
        <td class="match-away">Botafogo</td>
        <td><ul class="match-channels"><li>GLOBO RJ, MG, SP</li><li>PREMIERE FC</li></ul></td>
      </tr>
      <tr>
        <td class="match-time">21:30</td>
        <td class="match-home">Atlético Mineiro</td>
        <td class="match-away">Atlético Paranaense</td>
        <td><ul class="match-channels"><li>ESPN</li></ul></td>
      </tr>
    </table>
"#;

const CARD_PAGE: &str = r#"
    <section>
      <div data-home="Flamengo" data-away="Botafogo" data-time="16h00">
        <p class="channel-name">Premiere 2</p>
      </div>
      <div data-home="Atletico-MG" data-away="Athletico-PR" data-time="22h00">
        <p class="channel-name">Disney+ Premium</p>
      </div>
      <div data-home="Corinthians Feminino" data-away="Palmeiras Feminino" data-time="19h00">
      </div>
    </section>
"#;

#[test]
fn test_pages_reconcile_against_api_fixtures() {
    let records = parse_fixtures_response(FIXTURES_BODY, "https://api.test/fixtures").unwrap();
    let filter = FixtureFilter::default();

    let listing = collect_matches("listing", parse_listing_page(LISTING_PAGE));
    let cards = collect_matches("cards", parse_card_page(CARD_PAGE));
    let pools = [listing.as_slice(), cards.as_slice()];

    let results: Vec<(String, Vec<String>)> = records
        .iter()
        .filter(|record| filter.is_in_scope(record))
        .filter_map(|record| convert_fixture(record, "12-05-2024").unwrap())
        .map(|fixture| {
            let channels = reconcile_pools(&fixture, &pools);
            (fixture.teams.0, channels)
        })
        .collect();

    assert_eq!(
        results,
        vec![
            (
                "Flamengo".to_string(),
                vec!["Globo RJ", "Globo MG", "Globo SP", "Premiere 2"]
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            ),
            (
                "Atlético-MG".to_string(),
                vec!["ESPN".to_string(), "Disney+".to_string()]
            ),
            ("Corinthians (F)".to_string(), Vec::new()),
        ]
    );
}
