//! Store type with its embedded address and coordinates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical retail location offers are associated with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub address: Address,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_serializes_with_nested_address_and_coordinates() {
        let store = Store {
            id: Uuid::new_v4(),
            name: "King Soopers - Downtown".to_string(),
            address: Address {
                street: "1155 E 9th Ave".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                zip: "80218".to_string(),
            },
            coordinates: Coordinates {
                latitude: 39.7294,
                longitude: -104.9738,
            },
        };

        let json: serde_json::Value =
            serde_json::to_value(&store).expect("serialize Store");
        assert_eq!(json["address"]["city"].as_str(), Some("Denver"));
        assert!((json["coordinates"]["latitude"].as_f64().unwrap() - 39.7294).abs() < 1e-9);
    }
}
