//! Domain Model
//!
//! Entity types shared by the store and the views, plus the Boston-housing
//! feature catalog. Everything in this module is plain data with no web
//! dependencies, so it is testable on any target.

pub mod chat;
pub mod filter;
pub mod predict;
pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role selected at registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    PropertyDealer,
    Customer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::PropertyDealer => "Property Dealer",
            Role::Customer => "Customer",
        }
    }
}

/// A registered account. Passwords are stored in plaintext: this is a demo
/// credential model with no real security (see the login docs).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Condo,
    Townhouse,
    House,
    Apartment,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::House,
        PropertyType::Apartment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Sold,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Sold => "sold",
        }
    }
}

/// A property listing. Listings are static seed data: the dealer-facing
/// "Add Property" affordance is rendered but intentionally unwired.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub address: String,
    pub neighborhood: String,
    pub price: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub dealer_id: u32,
    pub status: ListingStatus,
    pub features: Features,
}

/// A (user, property) favorite pair. Existence in the store means
/// favorited; at most one pair per combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: u32,
    pub property_id: u32,
}

/// One entry of the append-only prediction log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: u32,
    pub user_id: u32,
    pub features: Features,
    pub price: f64,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// A Boston neighborhood with its marker position and listing count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub property_count: u32,
}

/// The 13 covariates of the historical Boston-housing dataset. Serialized
/// field names keep the dataset's uppercase keys.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Features {
    pub crim: f64,
    pub zn: f64,
    pub indus: f64,
    pub chas: f64,
    pub nox: f64,
    pub rm: f64,
    pub age: f64,
    pub dis: f64,
    pub rad: f64,
    pub tax: f64,
    pub ptratio: f64,
    pub b: f64,
    pub lstat: f64,
}

impl Features {
    /// Starting values for the prediction form (the first row of the
    /// dataset, a Nahant tract).
    pub fn example() -> Self {
        Features {
            crim: 0.00632,
            zn: 18.0,
            indus: 2.31,
            chas: 0.0,
            nox: 0.538,
            rm: 6.575,
            age: 65.2,
            dis: 4.09,
            rad: 1.0,
            tax: 296.0,
            ptratio: 15.3,
            b: 396.9,
            lstat: 4.98,
        }
    }

    pub fn value(&self, key: FeatureKey) -> f64 {
        match key {
            FeatureKey::Crim => self.crim,
            FeatureKey::Zn => self.zn,
            FeatureKey::Indus => self.indus,
            FeatureKey::Chas => self.chas,
            FeatureKey::Nox => self.nox,
            FeatureKey::Rm => self.rm,
            FeatureKey::Age => self.age,
            FeatureKey::Dis => self.dis,
            FeatureKey::Rad => self.rad,
            FeatureKey::Tax => self.tax,
            FeatureKey::Ptratio => self.ptratio,
            FeatureKey::B => self.b,
            FeatureKey::Lstat => self.lstat,
        }
    }

    pub fn set(&mut self, key: FeatureKey, value: f64) {
        match key {
            FeatureKey::Crim => self.crim = value,
            FeatureKey::Zn => self.zn = value,
            FeatureKey::Indus => self.indus = value,
            FeatureKey::Chas => self.chas = value,
            FeatureKey::Nox => self.nox = value,
            FeatureKey::Rm => self.rm = value,
            FeatureKey::Age => self.age = value,
            FeatureKey::Dis => self.dis = value,
            FeatureKey::Rad => self.rad = value,
            FeatureKey::Tax => self.tax = value,
            FeatureKey::Ptratio => self.ptratio = value,
            FeatureKey::B => self.b = value,
            FeatureKey::Lstat => self.lstat = value,
        }
    }
}

/// Closed set of feature keys, in dataset order. The order matters: the
/// price estimator accumulates weighted terms in this sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Crim,
    Zn,
    Indus,
    Chas,
    Nox,
    Rm,
    Age,
    Dis,
    Rad,
    Tax,
    Ptratio,
    B,
    Lstat,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 13] = [
        FeatureKey::Crim,
        FeatureKey::Zn,
        FeatureKey::Indus,
        FeatureKey::Chas,
        FeatureKey::Nox,
        FeatureKey::Rm,
        FeatureKey::Age,
        FeatureKey::Dis,
        FeatureKey::Rad,
        FeatureKey::Tax,
        FeatureKey::Ptratio,
        FeatureKey::B,
        FeatureKey::Lstat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::Crim => "CRIM",
            FeatureKey::Zn => "ZN",
            FeatureKey::Indus => "INDUS",
            FeatureKey::Chas => "CHAS",
            FeatureKey::Nox => "NOX",
            FeatureKey::Rm => "RM",
            FeatureKey::Age => "AGE",
            FeatureKey::Dis => "DIS",
            FeatureKey::Rad => "RAD",
            FeatureKey::Tax => "TAX",
            FeatureKey::Ptratio => "PTRATIO",
            FeatureKey::B => "B",
            FeatureKey::Lstat => "LSTAT",
        }
    }

    /// Human-readable description shown next to each prediction input.
    pub fn description(self) -> &'static str {
        match self {
            FeatureKey::Crim => "Per capita crime rate by town",
            FeatureKey::Zn => "Proportion of residential land zoned for lots over 25,000 sq.ft.",
            FeatureKey::Indus => "Proportion of non-retail business acres per town",
            FeatureKey::Chas => "Charles River dummy variable (1 if tract bounds river; 0 otherwise)",
            FeatureKey::Nox => "Nitric oxides concentration (parts per 10 million)",
            FeatureKey::Rm => "Average number of rooms per dwelling",
            FeatureKey::Age => "Proportion of owner-occupied units built prior to 1940",
            FeatureKey::Dis => "Weighted distances to five Boston employment centres",
            FeatureKey::Rad => "Index of accessibility to radial highways",
            FeatureKey::Tax => "Full-value property-tax rate per $10,000",
            FeatureKey::Ptratio => "Pupil-teacher ratio by town",
            FeatureKey::B => "1000(Bk - 0.63)^2 where Bk is the proportion of Black people by town",
            FeatureKey::Lstat => "% lower status of the population",
        }
    }
}

/// Format a whole-dollar amount with thousands separators, `$1,200,000`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_access_round_trips_every_key() {
        let mut features = Features::example();
        for key in FeatureKey::ALL {
            features.set(key, 1.5);
            assert_eq!(features.value(key), 1.5, "{}", key.as_str());
        }
    }

    #[test]
    fn feature_keys_serialize_under_dataset_names() {
        let json = serde_json::to_value(Features::example()).unwrap();
        for key in FeatureKey::ALL {
            assert!(json.get(key.as_str()).is_some(), "{}", key.as_str());
        }
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(950), "$950");
        assert_eq!(format_usd(50_000), "$50,000");
        assert_eq!(format_usd(1_200_000), "$1,200,000");
    }
}
