use std::collections::BTreeMap;

pub fn get_site_labels(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("app.kubernetes.io/name".to_owned(), name.to_owned()),
        ("app.kubernetes.io/component".to_owned(), "site".to_owned()),
        (
            "app.kubernetes.io/managed-by".to_owned(),
            "sitekeeper-agent".to_owned(),
        ),
    ])
}
