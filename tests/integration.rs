//! Integration tests for end-to-end bootstrap resolution.

use rdap_bootstrap::{
    BootstrapTables, Error, Redirector, RequestScheme, ResourceType, SchemePolicy, ServiceUrls,
};
use std::sync::Arc;
use std::thread;

const ARIN_HTTP: &str = "http://rdap.arin.net/registry";
const ARIN_HTTPS: &str = "https://rdap.arin.net/registry";
const RIPE_HTTP: &str = "http://rdap.db.ripe.net";
const RIPE_HTTPS: &str = "https://rdap.db.ripe.net";
const APNIC_HTTPS: &str = "https://rdap.apnic.net";
const LACNIC_HTTPS: &str = "https://rdap.lacnic.net/rdap";
const INFO_HTTPS: &str = "https://rdap.afilias.net/rdap/info";

fn urls(list: &[&str]) -> ServiceUrls {
    list.iter().copied().collect()
}

fn registry_tables() -> BootstrapTables {
    let arin = urls(&[ARIN_HTTP, ARIN_HTTPS]);
    let ripe = urls(&[RIPE_HTTP, RIPE_HTTPS]);
    let apnic = urls(&[APNIC_HTTPS]);
    let lacnic = urls(&[LACNIC_HTTPS]);

    let mut tables = BootstrapTables::new();

    tables.asn.insert(1, 1876, arin.clone()).unwrap();
    tables.asn.insert(42000, 42999, ripe.clone()).unwrap();
    tables.asn.insert(131072, 132095, apnic.clone()).unwrap();

    tables.ipv4.insert_str("7.0.0.0/8", arin.clone()).unwrap();
    tables.ipv4.insert_str("5.0.0.0/8", ripe.clone()).unwrap();
    tables.ipv4.insert_str("191.0.0.0/8", lacnic.clone()).unwrap();
    tables.ipv4.insert_str("1.0.0.0/8", apnic.clone()).unwrap();

    tables.ipv6.insert_str("2600::/12", arin.clone()).unwrap();
    tables.ipv6.insert_str("2800::/12", lacnic.clone()).unwrap();
    tables.ipv6.insert_str("2a00::/12", ripe.clone()).unwrap();

    tables.domain.insert("info", urls(&[INFO_HTTPS]));

    tables.entity.insert("ARIN", arin);
    tables.entity.insert("RIPE", ripe);
    tables.entity.insert("AP", apnic);
    tables.entity.insert("LACNIC", lacnic);

    tables
}

fn redirector() -> Redirector {
    Redirector::new(registry_tables(), SchemePolicy::Unset)
}

fn base(resource_type: ResourceType, identifier: &str) -> Option<ServiceUrls> {
    redirector().service_urls(resource_type, identifier).unwrap()
}

fn http_of(resource_type: ResourceType, identifier: &str) -> String {
    base(resource_type, identifier)
        .and_then(|u| u.http_url().map(str::to_string))
        .unwrap()
}

fn https_of(resource_type: ResourceType, identifier: &str) -> String {
    base(resource_type, identifier)
        .and_then(|u| u.https_url().map(str::to_string))
        .unwrap()
}

#[test]
fn test_autnum_base() {
    assert_eq!(http_of(ResourceType::Autnum, "10"), ARIN_HTTP);
    assert_eq!(https_of(ResourceType::Autnum, "42222"), RIPE_HTTPS);
    assert!(base(ResourceType::Autnum, "1877").is_none());
}

#[test]
fn test_autnum_every_number_in_range() {
    let redirector = redirector();
    for asn in 42000..=42999u32 {
        let found = redirector
            .service_urls(ResourceType::Autnum, &asn.to_string())
            .unwrap()
            .unwrap();
        assert_eq!(found.https_url(), Some(RIPE_HTTPS));
    }
    for asn in [0u32, 41999, 43000, 131071, 132096] {
        assert!(redirector
            .service_urls(ResourceType::Autnum, &asn.to_string())
            .unwrap()
            .is_none());
    }
}

#[test]
fn test_ip_base() {
    assert_eq!(http_of(ResourceType::Ip, "7.0.0.0/8"), ARIN_HTTP);
    assert_eq!(http_of(ResourceType::Ip, "7.0.0.0/16"), ARIN_HTTP);
    assert_eq!(
        http_of(ResourceType::Ip, "2620:0000:0000:0000:0000:0000:0000:0000"),
        ARIN_HTTP
    );

    assert_eq!(https_of(ResourceType::Ip, "191.0.1.0/24"), LACNIC_HTTPS);
    assert_eq!(https_of(ResourceType::Ip, "2800:0000::/12"), LACNIC_HTTPS);
    assert_eq!(https_of(ResourceType::Ip, "191.0.1.1/32"), LACNIC_HTTPS);
    assert_eq!(https_of(ResourceType::Ip, "191.0.1.1"), LACNIC_HTTPS);

    assert!(base(ResourceType::Ip, "8.8.8.8").is_none());
}

#[test]
fn test_ip_most_specific_prefix_wins() {
    let mut tables = registry_tables();
    tables
        .ipv4
        .insert_str("191.0.128.0/17", urls(&["https://nic.example/rdap"]))
        .unwrap();
    let redirector = Redirector::new(tables, SchemePolicy::Unset);

    let specific = redirector
        .service_urls(ResourceType::Ip, "191.0.200.1")
        .unwrap()
        .unwrap();
    assert_eq!(specific.https_url(), Some("https://nic.example/rdap"));

    let parent = redirector
        .service_urls(ResourceType::Ip, "191.0.1.1")
        .unwrap()
        .unwrap();
    assert_eq!(parent.https_url(), Some(LACNIC_HTTPS));
}

#[test]
fn test_domain_base() {
    assert_eq!(http_of(ResourceType::Domain, "0.0.0.7.in-addr.arpa."), ARIN_HTTP);
    assert_eq!(http_of(ResourceType::Domain, "0.0.0.7.in-addr.arpa"), ARIN_HTTP);
    assert_eq!(http_of(ResourceType::Domain, "0.7.in-addr.arpa"), ARIN_HTTP);
    assert_eq!(http_of(ResourceType::Domain, "7.in-addr.arpa"), ARIN_HTTP);
    assert_eq!(http_of(ResourceType::Domain, "0.2.6.2.ip6.arpa"), ARIN_HTTP);

    assert_eq!(https_of(ResourceType::Domain, "example.INFO"), INFO_HTTPS);
    assert_eq!(https_of(ResourceType::Domain, "example.INFO."), INFO_HTTPS);

    assert_eq!(https_of(ResourceType::Domain, "0.0.8.2.ip6.arpa"), LACNIC_HTTPS);

    assert!(base(ResourceType::Domain, "example.com").is_none());
}

#[test]
fn test_reverse_zone_matches_equivalent_prefix() {
    let redirector = redirector();
    let cases = [
        ("5.in-addr.arpa", "5.0.0.0/8"),
        ("0.5.in-addr.arpa", "5.0.0.0/16"),
        ("0.0.5.in-addr.arpa", "5.0.0.0/24"),
        ("1.0.0.5.in-addr.arpa", "5.0.0.1/32"),
        ("0.a.2.ip6.arpa", "2a00::/12"),
    ];
    for (zone, prefix) in cases {
        assert_eq!(
            redirector.service_urls(ResourceType::Domain, zone).unwrap(),
            redirector.service_urls(ResourceType::Ip, prefix).unwrap(),
            "{} vs {}",
            zone,
            prefix
        );
    }
}

#[test]
fn test_malformed_reverse_zone_is_invalid() {
    let redirector = redirector();
    for zone in ["1.2.3.4.5.in-addr.arpa", "300.in-addr.arpa", "ab.ip6.arpa", "in-addr.arpa"] {
        assert!(matches!(
            redirector.service_urls(ResourceType::Domain, zone),
            Err(Error::InvalidDomain(_))
        ));
    }
}

#[test]
fn test_nameserver_base() {
    assert_eq!(https_of(ResourceType::Nameserver, "ns1.example.INFO"), INFO_HTTPS);
    assert_eq!(https_of(ResourceType::Nameserver, "ns1.example.INFO."), INFO_HTTPS);

    assert!(base(ResourceType::Nameserver, "ns1.5.in-addr.arpa.").is_none());
    assert!(base(ResourceType::Nameserver, "0.7.in-addr.arpa").is_none());
    assert!(base(ResourceType::Nameserver, "0.2.6.2.ip6.arpa").is_none());
}

#[test]
fn test_entity_base() {
    assert_eq!(https_of(ResourceType::Entity, "ABC123-AP"), APNIC_HTTPS);
    assert_eq!(http_of(ResourceType::Entity, "ABC123-ARIN"), ARIN_HTTP);
    assert_eq!(https_of(ResourceType::Entity, "ABC123-LACNIC"), LACNIC_HTTPS);
    assert_eq!(http_of(ResourceType::Entity, "ABC123-RIPE"), RIPE_HTTP);

    assert_eq!(
        base(ResourceType::Entity, "abc123-ripe"),
        base(ResourceType::Entity, "abc123-RIPE")
    );
    assert!(base(ResourceType::Entity, "ABC123").is_none());
}

#[test]
fn test_redirect_scenarios() {
    let mut tables = BootstrapTables::new();
    tables
        .entity
        .insert("BOTH", urls(&["http://example.com", "https://example.com"]));
    tables.entity.insert("PLAIN", urls(&["http://example.com"]));
    tables.entity.insert("SECURE", urls(&["https://example.com"]));

    let unset = Redirector::new(tables.clone(), SchemePolicy::Unset);
    let matching = Redirector::new(tables, SchemePolicy::MatchRequest);

    let go = |r: &Redirector, tag: &str, scheme| {
        r.redirect(ResourceType::Entity, &format!("X-{}", tag), scheme, "/bar")
            .unwrap()
            .unwrap()
    };

    assert_eq!(go(&unset, "BOTH", RequestScheme::Http), "https://example.com/bar");
    assert_eq!(go(&unset, "PLAIN", RequestScheme::Https), "http://example.com/bar");
    assert_eq!(go(&matching, "BOTH", RequestScheme::Https), "https://example.com/bar");
    assert_eq!(go(&matching, "BOTH", RequestScheme::Http), "http://example.com/bar");
    assert_eq!(go(&matching, "SECURE", RequestScheme::Http), "https://example.com/bar");
}

#[test]
fn test_redirect_path_end_to_end() {
    let redirector = Redirector::new(registry_tables(), SchemePolicy::MatchRequest);

    assert_eq!(
        redirector
            .redirect_path("/autnum/10", RequestScheme::Http)
            .unwrap()
            .as_deref(),
        Some("http://rdap.arin.net/registry/autnum/10")
    );
    assert_eq!(
        redirector
            .redirect_path("/ip/191.0.1.0/24", RequestScheme::Http)
            .unwrap()
            .as_deref(),
        Some("https://rdap.lacnic.net/rdap/ip/191.0.1.0/24")
    );
    assert_eq!(
        redirector
            .redirect_path("/domain/example.INFO", RequestScheme::Https)
            .unwrap()
            .as_deref(),
        Some("https://rdap.afilias.net/rdap/info/domain/example.INFO")
    );
    assert!(redirector
        .redirect_path("/autnum/99999999", RequestScheme::Https)
        .unwrap()
        .is_none());
}

#[test]
fn test_invalid_input_is_client_error() {
    let redirector = redirector();
    for path in ["/autnum/ten", "/ip/999.1.1.1", "/domain/bad..name", "/entity/", "/help"] {
        let err = redirector
            .redirect_path(path, RequestScheme::Https)
            .unwrap_err();
        assert!(err.is_client_error(), "{} should be a client error", path);
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let redirector = redirector();
    let paths = [
        "/autnum/42222",
        "/ip/2800:0000::/12",
        "/domain/0.7.in-addr.arpa",
        "/nameserver/ns1.example.info",
        "/entity/ABC123-AP",
        "/entity/ABC123-NONE",
    ];
    for path in paths {
        let first = redirector.redirect_path(path, RequestScheme::Https).unwrap();
        for _ in 0..5 {
            assert_eq!(redirector.redirect_path(path, RequestScheme::Https).unwrap(), first);
        }
    }
}

#[test]
fn test_concurrent_reads_during_reload() {
    let redirector = Arc::new(redirector());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let redirector = Arc::clone(&redirector);
            thread::spawn(move || {
                for _ in 0..500 {
                    let url = redirector
                        .redirect_path("/entity/X-AP", RequestScheme::Https)
                        .unwrap()
                        .unwrap();
                    // either generation, never a mix
                    assert!(
                        url == "https://rdap.apnic.net/entity/X-AP"
                            || url == "https://rdap-new.apnic.net/entity/X-AP"
                    );
                }
            })
        })
        .collect();

    for _ in 0..20 {
        let mut tables = registry_tables();
        tables.entity.insert("AP", urls(&["https://rdap-new.apnic.net"]));
        redirector.reload(tables);
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(redirector.generation(), 20);
}
