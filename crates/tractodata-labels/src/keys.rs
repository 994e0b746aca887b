//! Keys identifying bundles, endpoints and surfaces in listings.

/// Separator between the parts of a key.
pub const KEY_SEPARATOR: &str = ",";

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// `bundle[,hemisphere]`
pub fn bundle_key(bundle: &str, hemisphere: Option<&str>) -> String {
    join_present(&[Some(bundle), hemisphere])
}

/// `bundle[,hemisphere],endpoint`
pub fn bundle_endpoint_key(bundle: &str, endpoint: &str, hemisphere: Option<&str>) -> String {
    join_present(&[Some(bundle), hemisphere, Some(endpoint)])
}

/// `surface[,hemisphere]`
pub fn surface_key(surface: &str, hemisphere: Option<&str>) -> String {
    join_present(&[Some(surface), hemisphere])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(bundle_key("CC", None), "CC");
        assert_eq!(bundle_key("Cing", Some("L")), "Cing,L");
        assert_eq!(bundle_endpoint_key("CST", "head", Some("R")), "CST,R,head");
        assert_eq!(bundle_endpoint_key("CC", "tail", None), "CC,tail");
        assert_eq!(surface_key("pial", Some("L")), "pial,L");
    }
}
