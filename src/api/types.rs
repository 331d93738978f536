//! API response types.

use serde::Serialize;

use crate::catalog::Catalog;

/// Catalogs and horizons the server calculates with.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Plant-type and region catalogs.
    #[serde(flatten)]
    pub catalog: Catalog,
    /// Projection horizons (years).
    pub horizons: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_response_is_flat() {
        let resp = CatalogResponse {
            catalog: Catalog::default(),
            horizons: vec![5, 10, 20],
        };
        let json = serde_json::to_value(&resp).unwrap_or_default();
        assert!(json.get("plant_types").is_some());
        assert!(json.get("regions").is_some());
        assert_eq!(json["horizons"], serde_json::json!([5, 10, 20]));
    }
}
