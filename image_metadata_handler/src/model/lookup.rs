use std::collections::HashMap;

use serde::Deserialize;

/// Path parameter carrying the image name
pub const IMAGE_NAME_PARAMETER: &str = "imageName";

/// An api gateway proxy request looking up a single image
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub http_method: String,
    /// api gateway sends `null` when the route has no path parameters
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
}

impl LookupRequest {
    /// The exact image name to look up
    pub fn image_name(&self) -> anyhow::Result<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(IMAGE_NAME_PARAMETER))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing {IMAGE_NAME_PARAMETER} path parameter"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_image_name() {
        let request: LookupRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "GET",
            "resource": "/images/{imageName}",
            "pathParameters": { "imageName": "a b.png" }
        }))
        .unwrap();

        assert_eq!(request.image_name().unwrap(), "a b.png");
    }

    #[test]
    fn missing_path_parameters() {
        for envelope in [
            serde_json::json!({ "httpMethod": "GET" }),
            serde_json::json!({ "httpMethod": "GET", "pathParameters": null }),
            serde_json::json!({ "httpMethod": "GET", "pathParameters": { "id": "x" } }),
            serde_json::json!({ "httpMethod": "GET", "pathParameters": { "imageName": "" } }),
        ] {
            let request: LookupRequest = serde_json::from_value(envelope).unwrap();
            assert!(request.image_name().is_err());
        }
    }
}
