use serde::{Deserialize, Serialize};

use serde_json::Value;

/// An access token record, as returned when listing tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Token value.
    pub token: String,
    /// Expiration date, absent for tokens which never expire.
    #[serde(default)]
    pub expires_at: Option<String>,
    /// The `OAuth` client which created the token.
    #[serde(default)]
    pub client: Option<String>,
}

/// A device summary or detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Device identifier.
    pub id: String,
    /// Device name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the device is currently online.
    #[serde(default)]
    pub connected: bool,
    /// Last time the cloud heard from the device.
    #[serde(default)]
    pub last_heard: Option<String>,
    /// Hardware platform identifier.
    #[serde(default)]
    pub platform_id: Option<u32>,
    /// Product the device belongs to.
    #[serde(default)]
    pub product_id: Option<u32>,
    /// Cloud variables exposed by the firmware, name to type.
    #[serde(default)]
    pub variables: Option<Value>,
    /// Cloud functions exposed by the firmware.
    #[serde(default)]
    pub functions: Option<Vec<String>>,
}

/// Result of reading a device variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub result: Value,
    /// Information about the device which answered.
    #[serde(default, rename = "coreInfo")]
    pub core_info: Option<Value>,
}

/// Result of calling a device function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResult {
    /// Device identifier.
    pub id: String,
    /// Device name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the device was online.
    #[serde(default)]
    pub connected: bool,
    /// Value returned by the firmware function.
    pub return_value: i64,
}

/// A claim code used to associate a device with an account or a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCode {
    /// The one-time claim code.
    pub claim_code: String,
    /// Devices already claimed by the requester.
    #[serde(default)]
    pub device_ids: Vec<String>,
}

/// An organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Organization name.
    pub name: String,
    /// Organization slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// A product of an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Product slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Hardware platform of the product devices.
    #[serde(default)]
    pub platform_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AccessToken, ClaimCode, Device, FunctionResult, Organization, Product, Variable};

    #[test]
    fn access_tokens() {
        let tokens: Vec<AccessToken> = serde_json::from_value(json!([
            { "token": "abc", "expires_at": "2026-01-01T00:00:00.000Z", "client": "user" },
            { "token": "def", "expires_at": null, "client": "__PASSWORD_ONLY__" },
        ]))
        .unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].expires_at, None);
    }

    #[test]
    fn device_with_unknown_fields() {
        let device: Device = serde_json::from_value(json!({
            "id": "0123456789abcdef",
            "name": "garage",
            "connected": true,
            "platform_id": 6,
            "last_ip_address": "10.0.0.1",
            "functions": ["led"],
        }))
        .unwrap();

        assert_eq!(device.name.as_deref(), Some("garage"));
        assert!(device.connected);
        assert_eq!(device.functions, Some(vec!["led".into()]));
        assert_eq!(device.product_id, None);
    }

    #[test]
    fn variable_and_function() {
        let variable: Variable = serde_json::from_value(json!({
            "name": "temperature",
            "result": 21.5,
            "coreInfo": { "connected": true },
        }))
        .unwrap();
        assert_eq!(variable.result, json!(21.5));

        let result: FunctionResult = serde_json::from_value(json!({
            "id": "42",
            "connected": true,
            "return_value": 1,
        }))
        .unwrap();
        assert_eq!(result.return_value, 1);
    }

    #[test]
    fn claim_code() {
        let code: ClaimCode =
            serde_json::from_value(json!({ "claim_code": "xyz" })).unwrap();

        assert_eq!(
            code,
            ClaimCode {
                claim_code: "xyz".into(),
                device_ids: Vec::new(),
            }
        );
    }

    #[test]
    fn organizations_and_products() {
        let orgs: Vec<Organization> = serde_json::from_value(json!([
            { "id": "5f1a", "name": "Acme", "slug": "acme" },
            { "name": "Personal" },
        ]))
        .unwrap();

        assert_eq!(orgs[0].slug.as_deref(), Some("acme"));
        assert_eq!(
            orgs[1],
            Organization {
                id: None,
                name: "Personal".into(),
                slug: None,
            }
        );

        let product: Product = serde_json::from_value(json!({
            "id": 1234,
            "name": "Sensors",
            "slug": "sensors-v1",
            "platform_id": 12,
            "description": "Field sensors",
        }))
        .unwrap();

        assert_eq!(product.id, 1234);
        assert_eq!(product.slug.as_deref(), Some("sensors-v1"));
        assert_eq!(product.platform_id, Some(12));
    }
}
