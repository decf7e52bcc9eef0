use super::*;
use std::sync::Arc;

use futures::executor::block_on;

use crate::state::token_store::MemoryTokenStore;
use crate::util::navigation::BrowserNavigator;

fn api_with_base(base: Option<&str>) -> HttpAuthApi {
    let config = ConsoleConfig::from_values(base, None).unwrap();
    let transport = Transport::new(Arc::new(MemoryTokenStore::new()), Arc::new(BrowserNavigator), "/signin");
    HttpAuthApi::new(&config, transport)
}

#[test]
fn url_joins_base_and_endpoint() {
    let api = api_with_base(Some("https://api.torneo.test/"));
    assert_eq!(api.url(ME_ENDPOINT), "https://api.torneo.test/api/auth/me");
    assert_eq!(api.url(LOGIN_ENDPOINT), "https://api.torneo.test/api/auth/login");
}

#[test]
fn url_is_relative_for_same_origin() {
    assert_eq!(api_with_base(None).url(LOGOUT_ENDPOINT), "/api/auth/logout");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let api = api_with_base(None);
    let creds = Credentials { username: "admin".to_owned(), password: "x".to_owned() };
    assert_eq!(block_on(api.fetch_identity("tok")), Err(AuthError::Unavailable));
    assert_eq!(block_on(api.login(&creds)), Err(AuthError::Unavailable));
    assert_eq!(block_on(api.logout("tok")), Err(AuthError::Unavailable));
}
